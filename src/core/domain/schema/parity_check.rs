use crate::core::domain::{
    model::parity_check::ParityCheckStatus, value_object::serde_helpers::NumberOrString,
};
use serde::Deserialize;
use serde_with::serde_as;

#[derive(Debug, Deserialize)]
pub(crate) struct ParityCheckQuery {
    pub array: ArrayForParityCheck,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArrayForParityCheck {
    pub parity_check_status: ParityCheckStatusEntry,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ParityCheckStatusEntry {
    pub status: ParityCheckStatus,
    #[serde_as(as = "Option<NumberOrString>")]
    pub progress: Option<u32>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub errors: Option<u64>,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde_as(as = "Option<NumberOrString>")]
    pub duration: Option<u64>,
    #[serde(default)]
    pub correcting: Option<bool>,
    pub paused: bool,
    pub running: bool,
}
