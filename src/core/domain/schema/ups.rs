use crate::core::domain::value_object::serde_helpers::NumberOrString;
use serde::Deserialize;
use serde_with::serde_as;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpsQuery {
    pub ups_devices: Vec<UpsDeviceEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpsDeviceEntry {
    pub id: String,
    pub name: String,
    pub model: String,
    pub status: String,
    pub battery: UpsBattery,
    pub power: UpsPower,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpsBattery {
    #[serde_as(as = "NumberOrString")]
    pub charge_level: u32,
    #[serde_as(as = "NumberOrString")]
    pub estimated_runtime: u64,
    pub health: String,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpsPower {
    #[serde_as(as = "NumberOrString")]
    pub input_voltage: f64,
    #[serde_as(as = "NumberOrString")]
    pub output_voltage: f64,
    #[serde_as(as = "NumberOrString")]
    pub load_percentage: u32,
}
