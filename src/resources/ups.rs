//! UPS devices.

use crate::{
    UnraidClient, UnraidResult, UpsDevice,
    core::domain::{
        query::UPS_QUERY,
        schema::ups::{UpsDeviceEntry, UpsQuery},
    },
};

impl From<UpsDeviceEntry> for UpsDevice {
    fn from(device: UpsDeviceEntry) -> Self {
        UpsDevice {
            id: device.id,
            name: device.name,
            model: device.model,
            status: device.status,
            battery_level: device.battery.charge_level,
            runtime: device.battery.estimated_runtime,
            battery_health: device.battery.health,
            input_voltage: device.power.input_voltage,
            output_voltage: device.power.output_voltage,
            load_percentage: device.power.load_percentage,
        }
    }
}

impl UnraidClient {
    /// Retrieves all UPS devices the server monitors.
    pub async fn query_ups_devices(&self) -> UnraidResult<Vec<UpsDevice>> {
        let response: UpsQuery = self.call_api(&UPS_QUERY, None).await?;
        Ok(response.ups_devices.into_iter().map(UpsDevice::from).collect())
    }
}
