//! Domain models for array members, cache pools and parity drives.
//!
//! A [`Disk`] is built from any of the three disk lists the server reports.
//! Parity drives have no filesystem, so their `fs_*` fields are always `None`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health/membership state of a disk slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiskStatus {
    /// No disk present in the slot.
    DiskNp,
    DiskOk,
    /// A disk is expected but missing.
    DiskNpMissing,
    DiskInvalid,
    /// The wrong disk is installed in the slot.
    DiskWrong,
    /// Disabled.
    DiskDsbl,
    DiskNpDsbl,
    DiskDsblNew,
    DiskNew,
}

impl DiskStatus {
    pub const ALL: [DiskStatus; 9] = [
        DiskStatus::DiskNp,
        DiskStatus::DiskOk,
        DiskStatus::DiskNpMissing,
        DiskStatus::DiskInvalid,
        DiskStatus::DiskWrong,
        DiskStatus::DiskDsbl,
        DiskStatus::DiskNpDsbl,
        DiskStatus::DiskDsblNew,
        DiskStatus::DiskNew,
    ];

    /// Returns the wire value of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DiskStatus::DiskNp => "DISK_NP",
            DiskStatus::DiskOk => "DISK_OK",
            DiskStatus::DiskNpMissing => "DISK_NP_MISSING",
            DiskStatus::DiskInvalid => "DISK_INVALID",
            DiskStatus::DiskWrong => "DISK_WRONG",
            DiskStatus::DiskDsbl => "DISK_DSBL",
            DiskStatus::DiskNpDsbl => "DISK_NP_DSBL",
            DiskStatus::DiskDsblNew => "DISK_DSBL_NEW",
            DiskStatus::DiskNew => "DISK_NEW",
        }
    }
}

impl fmt::Display for DiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a disk within the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiskType {
    Data,
    Parity,
    /// The USB boot device.
    Flash,
    Cache,
}

impl DiskType {
    pub const ALL: [DiskType; 4] = [
        DiskType::Data,
        DiskType::Parity,
        DiskType::Flash,
        DiskType::Cache,
    ];

    /// Returns the wire value of the disk type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DiskType::Data => "DATA",
            DiskType::Parity => "PARITY",
            DiskType::Flash => "FLASH",
            DiskType::Cache => "CACHE",
        }
    }
}

impl fmt::Display for DiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bus a disk is attached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiskInterfaceType {
    Sas,
    Sata,
    Usb,
    Pcie,
    Nvme,
    Unknown,
}

impl DiskInterfaceType {
    /// Returns the wire value of the interface type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DiskInterfaceType::Sas => "SAS",
            DiskInterfaceType::Sata => "SATA",
            DiskInterfaceType::Usb => "USB",
            DiskInterfaceType::Pcie => "PCIE",
            DiskInterfaceType::Nvme => "NVME",
            DiskInterfaceType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DiskInterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall SMART verdict for a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiskSmartStatus {
    Ok,
    Failed,
    Unknown,
}

impl DiskSmartStatus {
    /// Returns the wire value of the SMART status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DiskSmartStatus::Ok => "OK",
            DiskSmartStatus::Failed => "FAILED",
            DiskSmartStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DiskSmartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A disk of the array, a cache pool member, or a parity drive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Disk {
    /// Slot name (e.g. "disk1", "parity", "cache").
    pub name: String,
    pub status: DiskStatus,
    /// Temperature in °C; `None` while the disk is spun down.
    pub temp: Option<i32>,
    /// Filesystem size in kilobytes; `None` for parity drives.
    pub fs_size: Option<u64>,
    /// Free filesystem space in kilobytes; `None` for parity drives.
    pub fs_free: Option<u64>,
    /// Used filesystem space in kilobytes; `None` for parity drives.
    pub fs_used: Option<u64>,
    #[serde(rename = "type")]
    pub disk_type: DiskType,
    /// Unique disk identifier.
    pub id: String,
    pub is_spinning: bool,

    // Extended hardware details. Not requested by the disk query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_num: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<DiskInterfaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_status: Option<DiskSmartStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_errors: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_reads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_writes: Option<u64>,
}

impl Disk {
    /// Returns `true` if the server reported any filesystem usage for this disk.
    #[must_use]
    pub fn has_filesystem(&self) -> bool {
        self.fs_size.is_some() || self.fs_free.is_some() || self.fs_used.is_some()
    }
}
