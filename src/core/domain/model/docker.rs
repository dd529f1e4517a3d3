//! Domain models for Docker containers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Run state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DockerState {
    Running,
    Stopped,
    Paused,
    Restarting,
    Created,
    Exited,
    Dead,
}

impl DockerState {
    pub const ALL: [DockerState; 7] = [
        DockerState::Running,
        DockerState::Stopped,
        DockerState::Paused,
        DockerState::Restarting,
        DockerState::Created,
        DockerState::Exited,
        DockerState::Dead,
    ];

    /// Returns the wire value of the state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DockerState::Running => "RUNNING",
            DockerState::Stopped => "STOPPED",
            DockerState::Paused => "PAUSED",
            DockerState::Restarting => "RESTARTING",
            DockerState::Created => "CREATED",
            DockerState::Exited => "EXITED",
            DockerState::Dead => "DEAD",
        }
    }
}

impl fmt::Display for DockerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Docker container managed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DockerContainer {
    /// Prefixed identifier, usable with the container control methods.
    pub id: String,
    /// Display name: the first container name without its leading `/`,
    /// or the id when the container has no names.
    pub name: String,
    pub state: DockerState,
    /// Image reference (e.g. "lscr.io/linuxserver/plex:latest").
    pub image: String,
    pub autostart: bool,
}

impl DockerContainer {
    /// Derives the display name from the container's name list.
    pub(crate) fn display_name(id: &str, names: &[String]) -> String {
        match names.first() {
            Some(first) => first.strip_prefix('/').unwrap_or(first).to_string(),
            None => id.to_string(),
        }
    }
}
