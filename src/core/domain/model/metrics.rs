//! Point-in-time utilisation figures.

use serde::{Deserialize, Serialize};

/// Memory and CPU utilisation of the server.
///
/// Values are passed through as reported; no unit conversion is applied.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Metrics {
    /// Free memory in bytes.
    pub memory_free: u64,
    /// Total memory in bytes.
    pub memory_total: u64,
    /// Active memory in bytes.
    pub memory_active: u64,
    /// Available memory in bytes.
    pub memory_available: u64,
    /// Memory in use, as a percentage of total.
    pub memory_percent_total: f64,
    /// Overall CPU utilisation percentage.
    pub cpu_percent_total: f64,
}
