use crate::core::domain::model::docker::DockerState;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct DockerQuery {
    pub docker: DockerRoot,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DockerRoot {
    pub containers: Vec<ContainerEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContainerEntry {
    pub id: String,
    pub names: Vec<String>,
    pub state: DockerState,
    pub image: String,
    pub auto_start: bool,
}

// Decoded for validation only; callers get a presence check.
#[derive(Debug, Deserialize)]
pub(crate) struct DockerActionResult {
    #[allow(dead_code)]
    pub id: String,
    #[allow(dead_code)]
    pub state: DockerState,
}

/// Result object shared by the container mutations.
#[derive(Debug, Deserialize)]
pub(crate) struct DockerMutations {
    #[serde(default)]
    pub start: Option<DockerActionResult>,
    #[serde(default)]
    pub stop: Option<DockerActionResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DockerActionResponse {
    pub docker: DockerMutations,
}
