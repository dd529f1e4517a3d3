//! The three disk lists of the `Disks` query.
//!
//! Parity drives carry no filesystem, so their shape is the common subset;
//! data and cache disks extend it with the `fs*` usage fields.

use crate::core::domain::{
    model::disk::{DiskStatus, DiskType},
    value_object::serde_helpers::NumberOrString,
};
use serde::Deserialize;
use serde_with::serde_as;

#[derive(Debug, Deserialize)]
pub(crate) struct DiskQuery {
    pub array: DisksArray,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DisksArray {
    pub disks: Vec<FsDisk>,
    pub parities: Vec<ParityDisk>,
    pub caches: Vec<FsDisk>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParityDisk {
    pub name: String,
    pub status: DiskStatus,
    #[serde_as(as = "Option<NumberOrString>")]
    pub temp: Option<i32>,
    #[serde(rename = "type")]
    pub disk_type: DiskType,
    pub id: String,
    pub is_spinning: bool,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FsDisk {
    #[serde(flatten)]
    pub common: ParityDisk,
    #[serde_as(as = "Option<NumberOrString>")]
    pub fs_size: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub fs_free: Option<u64>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub fs_used: Option<u64>,
}
