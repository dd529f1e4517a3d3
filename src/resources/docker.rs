//! Container listing and control.

use crate::{
    DockerContainer, UnraidClient, UnraidResult,
    core::domain::{
        query::{DOCKER_QUERY, DOCKER_START_MUTATION, DOCKER_STOP_MUTATION, Operation},
        schema::docker::{
            ContainerEntry, DockerActionResponse, DockerActionResult, DockerMutations,
            DockerQuery,
        },
    },
};
use tracing::debug;

impl From<ContainerEntry> for DockerContainer {
    fn from(container: ContainerEntry) -> Self {
        DockerContainer {
            name: DockerContainer::display_name(&container.id, &container.names),
            id: container.id,
            state: container.state,
            image: container.image,
            autostart: container.auto_start,
        }
    }
}

impl UnraidClient {
    /// Retrieves all Docker containers.
    pub async fn query_docker_containers(&self) -> UnraidResult<Vec<DockerContainer>> {
        let response: DockerQuery = self.call_api(&DOCKER_QUERY, None).await?;
        Ok(response
            .docker
            .containers
            .into_iter()
            .map(DockerContainer::from)
            .collect())
    }

    /// Starts a container. Returns `true` if the server returned a result.
    pub async fn docker_start(&self, container_id: &str) -> UnraidResult<bool> {
        self.docker_action(&DOCKER_START_MUTATION, container_id, |docker| docker.start)
            .await
    }

    /// Stops a container. Returns `true` if the server returned a result.
    pub async fn docker_stop(&self, container_id: &str) -> UnraidResult<bool> {
        self.docker_action(&DOCKER_STOP_MUTATION, container_id, |docker| docker.stop)
            .await
    }

    async fn docker_action<F>(
        &self,
        operation: &Operation,
        container_id: &str,
        select: F,
    ) -> UnraidResult<bool>
    where
        F: FnOnce(DockerMutations) -> Option<DockerActionResult>,
    {
        let response: DockerActionResponse = self.call_mutation(operation, container_id).await?;
        let accepted = select(response.docker).is_some();
        if !accepted {
            debug!(operation = operation.name, container_id, "mutation returned no result");
        }
        Ok(accepted)
    }
}
