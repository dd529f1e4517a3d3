//! Domain models for virtual machines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Run state of a virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VmState {
    Running,
    Stopped,
    Paused,
    /// Suspended by the guest's power management.
    Pmsuspended,
    ShuttingDown,
    Shutdown,
    Crashed,
}

impl VmState {
    pub const ALL: [VmState; 7] = [
        VmState::Running,
        VmState::Stopped,
        VmState::Paused,
        VmState::Pmsuspended,
        VmState::ShuttingDown,
        VmState::Shutdown,
        VmState::Crashed,
    ];

    /// Returns the wire value of the state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            VmState::Running => "RUNNING",
            VmState::Stopped => "STOPPED",
            VmState::Paused => "PAUSED",
            VmState::Pmsuspended => "PMSUSPENDED",
            VmState::ShuttingDown => "SHUTTING_DOWN",
            VmState::Shutdown => "SHUTDOWN",
            VmState::Crashed => "CRASHED",
        }
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A virtual machine defined on the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VirtualMachine {
    /// Prefixed identifier, usable with the VM control methods.
    pub id: String,
    pub name: String,
    pub state: VmState,
}
