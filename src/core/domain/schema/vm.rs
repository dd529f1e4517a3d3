use crate::core::domain::model::vm::VmState;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct VmsQuery {
    pub vms: VmsRoot,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VmsRoot {
    pub domain: Vec<VmEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VmEntry {
    pub id: String,
    pub name: String,
    pub state: VmState,
}

// Decoded for validation only; callers get a presence check.
#[derive(Debug, Deserialize)]
pub(crate) struct VmActionResult {
    #[allow(dead_code)]
    pub id: String,
    #[allow(dead_code)]
    pub state: VmState,
}

/// Result object shared by all VM mutations. Only the requested action is non-null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VmMutations {
    #[serde(default)]
    pub start: Option<VmActionResult>,
    #[serde(default)]
    pub stop: Option<VmActionResult>,
    #[serde(default)]
    pub reboot: Option<VmActionResult>,
    #[serde(default)]
    pub pause: Option<VmActionResult>,
    #[serde(default)]
    pub resume: Option<VmActionResult>,
    #[serde(default)]
    pub force_stop: Option<VmActionResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VmActionResponse {
    pub vm: VmMutations,
}
