use crate::core::domain::value_object::serde_helpers::NumberOrString;
use serde::Deserialize;
use serde_with::serde_as;

#[derive(Debug, Deserialize)]
pub(crate) struct MetricsQuery {
    pub metrics: MetricsRoot,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetricsRoot {
    pub memory: MetricsMemory,
    pub cpu: MetricsCpu,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetricsMemory {
    #[serde_as(as = "NumberOrString")]
    pub free: u64,
    #[serde_as(as = "NumberOrString")]
    pub total: u64,
    #[serde_as(as = "NumberOrString")]
    pub active: u64,
    #[serde_as(as = "NumberOrString")]
    pub percent_total: f64,
    #[serde_as(as = "NumberOrString")]
    pub available: u64,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetricsCpu {
    #[serde_as(as = "NumberOrString")]
    pub percent_total: f64,
}
