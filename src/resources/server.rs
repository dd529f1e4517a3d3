//! Server identity, resource metrics and licensing.

use crate::{
    Flash, Metrics, Registration, ServerInfo, UnraidClient, UnraidResult,
    core::domain::{
        query::{FLASH_QUERY, METRICS_QUERY, REGISTRATION_QUERY, SERVER_INFO_QUERY},
        schema::{
            metrics::MetricsQuery,
            registration::{FlashQuery, RegistrationQuery},
            server_info::ServerInfoQuery,
        },
    },
};

impl From<ServerInfoQuery> for ServerInfo {
    fn from(response: ServerInfoQuery) -> Self {
        ServerInfo {
            localurl: response.server.localurl,
            name: response.server.name,
            unraid_version: response.info.versions.core.unraid,
        }
    }
}

impl From<MetricsQuery> for Metrics {
    fn from(response: MetricsQuery) -> Self {
        let memory = response.metrics.memory;
        Metrics {
            memory_free: memory.free,
            memory_total: memory.total,
            memory_active: memory.active,
            memory_available: memory.available,
            memory_percent_total: memory.percent_total,
            cpu_percent_total: response.metrics.cpu.percent_total,
        }
    }
}

impl From<RegistrationQuery> for Registration {
    fn from(response: RegistrationQuery) -> Self {
        let registration = response.registration;
        Registration {
            id: registration.id,
            license_type: registration.license_type,
            state: registration.state,
            expiration: registration.expiration,
            update_expiration: registration.update_expiration,
        }
    }
}

impl From<FlashQuery> for Flash {
    fn from(response: FlashQuery) -> Self {
        Flash {
            id: response.flash.id,
            guid: response.flash.guid,
            vendor: response.flash.vendor,
            product: response.flash.product,
        }
    }
}

impl UnraidClient {
    /// Retrieves the server's name, local URL and OS version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not match
    /// the expected shape.
    pub async fn query_server_info(&self) -> UnraidResult<ServerInfo> {
        let response: ServerInfoQuery = self.call_api(&SERVER_INFO_QUERY, None).await?;
        Ok(response.into())
    }

    /// Retrieves current memory and CPU utilisation.
    pub async fn query_metrics(&self) -> UnraidResult<Metrics> {
        let response: MetricsQuery = self.call_api(&METRICS_QUERY, None).await?;
        Ok(response.into())
    }

    /// Retrieves the licence registration of the server.
    pub async fn query_registration(&self) -> UnraidResult<Registration> {
        let response: RegistrationQuery = self.call_api(&REGISTRATION_QUERY, None).await?;
        Ok(response.into())
    }

    /// Retrieves the boot flash drive.
    pub async fn query_flash(&self) -> UnraidResult<Flash> {
        let response: FlashQuery = self.call_api(&FLASH_QUERY, None).await?;
        Ok(response.into())
    }
}
