//! Virtual machine listing and power control.

use crate::{
    UnraidClient, UnraidResult, VirtualMachine,
    core::domain::{
        query::{
            Operation, VM_FORCE_STOP_MUTATION, VM_PAUSE_MUTATION, VM_REBOOT_MUTATION,
            VM_RESUME_MUTATION, VM_START_MUTATION, VM_STOP_MUTATION, VMS_QUERY,
        },
        schema::vm::{VmActionResponse, VmActionResult, VmEntry, VmMutations, VmsQuery},
    },
};
use tracing::debug;

impl From<VmEntry> for VirtualMachine {
    fn from(vm: VmEntry) -> Self {
        VirtualMachine {
            id: vm.id,
            name: vm.name,
            state: vm.state,
        }
    }
}

impl UnraidClient {
    /// Retrieves all virtual machines.
    pub async fn query_vms(&self) -> UnraidResult<Vec<VirtualMachine>> {
        let response: VmsQuery = self.call_api(&VMS_QUERY, None).await?;
        Ok(response
            .vms
            .domain
            .into_iter()
            .map(VirtualMachine::from)
            .collect())
    }

    /// Starts a VM.
    ///
    /// Returns `true` if the server returned a result for the action. The
    /// new state itself is not reported; query the VMs again to observe it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects `vm_id`,
    /// or the response does not match the expected shape.
    pub async fn vm_start(&self, vm_id: &str) -> UnraidResult<bool> {
        self.vm_action(&VM_START_MUTATION, vm_id, |vm| vm.start)
            .await
    }

    /// Gracefully stops a VM.
    pub async fn vm_stop(&self, vm_id: &str) -> UnraidResult<bool> {
        self.vm_action(&VM_STOP_MUTATION, vm_id, |vm| vm.stop).await
    }

    /// Reboots a VM.
    pub async fn vm_reboot(&self, vm_id: &str) -> UnraidResult<bool> {
        self.vm_action(&VM_REBOOT_MUTATION, vm_id, |vm| vm.reboot)
            .await
    }

    /// Pauses a running VM.
    pub async fn vm_pause(&self, vm_id: &str) -> UnraidResult<bool> {
        self.vm_action(&VM_PAUSE_MUTATION, vm_id, |vm| vm.pause)
            .await
    }

    /// Resumes a paused VM.
    pub async fn vm_resume(&self, vm_id: &str) -> UnraidResult<bool> {
        self.vm_action(&VM_RESUME_MUTATION, vm_id, |vm| vm.resume)
            .await
    }

    /// Forcibly powers off a VM.
    pub async fn vm_force_stop(&self, vm_id: &str) -> UnraidResult<bool> {
        self.vm_action(&VM_FORCE_STOP_MUTATION, vm_id, |vm| vm.force_stop)
            .await
    }

    async fn vm_action<F>(&self, operation: &Operation, vm_id: &str, select: F) -> UnraidResult<bool>
    where
        F: FnOnce(VmMutations) -> Option<VmActionResult>,
    {
        let response: VmActionResponse = self.call_mutation(operation, vm_id).await?;
        let accepted = select(response.vm).is_some();
        if !accepted {
            debug!(operation = operation.name, vm_id, "mutation returned no result");
        }
        Ok(accepted)
    }
}
