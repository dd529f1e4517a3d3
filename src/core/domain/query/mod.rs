//! Catalog of the operations the client sends.
//!
//! Each [`Operation`] pairs a fixed document with its variable contract.
//! Queries take no variables; every mutation takes a single required
//! `id: PrefixedID!`.

mod documents;

/// Whether an operation reads or changes server state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A variable declared by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDefinition {
    pub name: &'static str,
    /// GraphQL type name, without the non-null marker.
    pub type_name: &'static str,
    pub required: bool,
}

impl VariableDefinition {
    /// Renders the declaration as it appears in a document header (`$id: PrefixedID!`).
    #[must_use]
    pub fn declaration(&self) -> String {
        format!(
            "${}: {}{}",
            self.name,
            self.type_name,
            if self.required { "!" } else { "" }
        )
    }
}

/// A fixed GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, also sent as `operationName`.
    pub name: &'static str,
    pub kind: OperationKind,
    pub document: &'static str,
    pub variables: &'static [VariableDefinition],
}

const ENTITY_ID: VariableDefinition = VariableDefinition {
    name: "id",
    type_name: "PrefixedID",
    required: true,
};

const MUTATION_VARIABLES: &[VariableDefinition] = &[ENTITY_ID];

const fn query(name: &'static str, document: &'static str) -> Operation {
    Operation {
        name,
        kind: OperationKind::Query,
        document,
        variables: &[],
    }
}

const fn mutation(name: &'static str, document: &'static str) -> Operation {
    Operation {
        name,
        kind: OperationKind::Mutation,
        document,
        variables: MUTATION_VARIABLES,
    }
}

pub const SERVER_INFO_QUERY: Operation = query("ServerInfo", documents::SERVER_INFO);
pub const METRICS_QUERY: Operation = query("Metrics", documents::METRICS);
pub const SHARES_QUERY: Operation = query("Shares", documents::SHARES);
pub const DISKS_QUERY: Operation = query("Disks", documents::DISKS);
pub const ARRAY_QUERY: Operation = query("Array", documents::ARRAY);
pub const VMS_QUERY: Operation = query("VMs", documents::VMS);
pub const DOCKER_QUERY: Operation = query("Docker", documents::DOCKER);
pub const PARITY_CHECK_QUERY: Operation = query("ParityCheck", documents::PARITY_CHECK);
pub const UPS_QUERY: Operation = query("UPS", documents::UPS);
pub const REGISTRATION_QUERY: Operation = query("Registration", documents::REGISTRATION);
pub const FLASH_QUERY: Operation = query("Flash", documents::FLASH);

pub const VM_START_MUTATION: Operation = mutation("StartVM", documents::VM_START);
pub const VM_STOP_MUTATION: Operation = mutation("StopVM", documents::VM_STOP);
pub const VM_REBOOT_MUTATION: Operation = mutation("RebootVM", documents::VM_REBOOT);
pub const VM_PAUSE_MUTATION: Operation = mutation("PauseVM", documents::VM_PAUSE);
pub const VM_RESUME_MUTATION: Operation = mutation("ResumeVM", documents::VM_RESUME);
pub const VM_FORCE_STOP_MUTATION: Operation = mutation("ForceStopVM", documents::VM_FORCE_STOP);
pub const DOCKER_START_MUTATION: Operation =
    mutation("StartContainer", documents::DOCKER_START);
pub const DOCKER_STOP_MUTATION: Operation = mutation("StopContainer", documents::DOCKER_STOP);

/// Every operation in the catalog.
pub const ALL_OPERATIONS: [Operation; 19] = [
    SERVER_INFO_QUERY,
    METRICS_QUERY,
    SHARES_QUERY,
    DISKS_QUERY,
    ARRAY_QUERY,
    VMS_QUERY,
    DOCKER_QUERY,
    PARITY_CHECK_QUERY,
    UPS_QUERY,
    REGISTRATION_QUERY,
    FLASH_QUERY,
    VM_START_MUTATION,
    VM_STOP_MUTATION,
    VM_REBOOT_MUTATION,
    VM_PAUSE_MUTATION,
    VM_RESUME_MUTATION,
    VM_FORCE_STOP_MUTATION,
    DOCKER_START_MUTATION,
    DOCKER_STOP_MUTATION,
];
