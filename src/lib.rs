mod core;
mod resources;


pub use crate::core::domain::{
    error::{UnraidError, UnraidResult, ValidationError},
    model::{
        array::{Array, ArrayState},
        client_config::{ClientConfig, RateLimitConfig},
        disk::{Disk, DiskInterfaceType, DiskSmartStatus, DiskStatus, DiskType},
        docker::{DockerContainer, DockerState},
        metrics::Metrics,
        parity_check::{ParityCheck, ParityCheckStatus},
        registration::{Flash, Registration, RegistrationState, RegistrationType},
        server_info::ServerInfo,
        share::Share,
        ups::{UpsDevice, UpsStatus},
        vm::{VirtualMachine, VmState},
    },
    query::{Operation, OperationKind, VariableDefinition},
    value_object::{ApiKey, PrefixedId, ServerUrl},
};
pub use crate::core::infrastructure::{
    api_client::HttpExecutor, executor::QueryExecutor, graphql_response::GraphQlError,
};

/// The fixed catalog of GraphQL operations the client sends.
pub mod operations {
    pub use crate::core::domain::query::*;
}

use crate::core::domain::schema;
use serde::de::DeserializeOwned;
use std::{fmt, sync::Arc, time::Duration};
use tracing::debug;

/// A client for the Unraid GraphQL API
///
/// Each method sends exactly one fixed operation, validates the response
/// against that operation's schema and returns plain domain records. The
/// client holds no mutable state: it is cheap to clone and safe to call
/// concurrently from independent pollers.
///
/// # Examples
///
/// ```no_run
/// use unraid_graphql::{UnraidClient, UnraidResult};
///
/// #[tokio::main]
/// async fn main() -> UnraidResult<()> {
///     let client = UnraidClient::builder()
///         .url("https://tower.local")?
///         .api_key("0123456789abcdef")?
///         .accept_invalid_certs(true)
///         .build()?;
///
///     let info = client.query_server_info().await?;
///     println!("{} runs Unraid {}", info.name, info.unraid_version);
///
///     for vm in client.query_vms().await? {
///         println!("{}: {}", vm.name, vm.state);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct UnraidClient {
    executor: Arc<dyn QueryExecutor>,
}

/// Builder for UnraidClient configuration
#[derive(Debug, Default)]
pub struct UnraidClientBuilder {
    url: Option<ServerUrl>,
    api_key: Option<ApiKey>,
    config: ClientConfig,
}

impl UnraidClientBuilder {
    /// Sets the server URL (root or `/graphql` endpoint).
    pub fn url(mut self, url: impl AsRef<str>) -> UnraidResult<Self> {
        self.url = Some(ServerUrl::new(url)?);
        Ok(self)
    }

    /// Sets the API key sent in the `x-api-key` header.
    pub fn api_key(mut self, api_key: impl Into<String>) -> UnraidResult<Self> {
        self.api_key = Some(ApiKey::new(api_key)?);
        Ok(self)
    }

    /// Accepts self-signed or otherwise invalid TLS certificates.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Throttles requests client-side. Both values must be non-zero.
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(rate_limit);
        self
    }

    /// Builds a client backed by [`HttpExecutor`].
    ///
    /// # Errors
    ///
    /// Returns `UnraidError::Validation` if the URL or API key is missing or
    /// the rate limit is zero, and `UnraidError::Connection` if the HTTP
    /// client cannot be created.
    pub fn build(self) -> UnraidResult<UnraidClient> {
        let url = self.url.ok_or_else(|| ValidationError::Field {
            field: "url".to_string(),
            message: "Server URL is required".to_string(),
        })?;
        let api_key = self.api_key.ok_or_else(|| ValidationError::Field {
            field: "api_key".to_string(),
            message: "API key is required".to_string(),
        })?;

        let executor = HttpExecutor::new(url, api_key, self.config)?;
        debug!(endpoint = executor.endpoint(), "created Unraid client");
        Ok(UnraidClient::with_executor(executor))
    }
}

impl UnraidClient {
    /// Creates a new builder for UnraidClient configuration
    pub fn builder() -> UnraidClientBuilder {
        UnraidClientBuilder::default()
    }

    /// Creates a client that sends operations through `executor`.
    ///
    /// Use this to plug in a different transport, or a fake in tests.
    pub fn with_executor<E>(executor: E) -> Self
    where
        E: QueryExecutor + 'static,
    {
        Self {
            executor: Arc::new(executor),
        }
    }

    /// Sends `operation` and decodes the `data` payload into its schema type.
    pub(crate) async fn call_api<T>(
        &self,
        operation: &Operation,
        variables: Option<serde_json::Value>,
    ) -> UnraidResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(operation = operation.name, "executing operation");
        let data = self.executor.execute(operation, variables).await?;
        schema::decode(operation, data)
    }

    /// Sends a mutation with the single `id` variable every mutation takes.
    ///
    /// The id is forwarded as given; the server validates it.
    pub(crate) async fn call_mutation<T>(&self, operation: &Operation, id: &str) -> UnraidResult<T>
    where
        T: DeserializeOwned,
    {
        let id = PrefixedId::from(id);
        self.call_api(operation, Some(serde_json::json!({ "id": id })))
            .await
    }
}

impl fmt::Debug for UnraidClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnraidClient").finish_non_exhaustive()
    }
}
