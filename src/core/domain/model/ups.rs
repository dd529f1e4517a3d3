//! UPS telemetry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common UPS conditions.
///
/// The server reports UPS status as free text, so this vocabulary is only
/// used for the best-effort classification in [`UpsDevice::known_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpsStatus {
    Online,
    OnBattery,
    LowBattery,
    ReplaceBattery,
    Overload,
    Offline,
    Unknown,
}

impl UpsStatus {
    /// Returns the canonical name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UpsStatus::Online => "ONLINE",
            UpsStatus::OnBattery => "ON_BATTERY",
            UpsStatus::LowBattery => "LOW_BATTERY",
            UpsStatus::ReplaceBattery => "REPLACE_BATTERY",
            UpsStatus::Overload => "OVERLOAD",
            UpsStatus::Offline => "OFFLINE",
            UpsStatus::Unknown => "UNKNOWN",
        }
    }

    /// Classifies a free-text status as reported by apcupsd or NUT.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        let normalized = status
            .trim()
            .to_ascii_uppercase()
            .replace([' ', '-'], "_");
        match normalized.as_str() {
            "ONLINE" | "OL" => UpsStatus::Online,
            "ON_BATTERY" | "ONBATT" | "OB" => UpsStatus::OnBattery,
            "LOW_BATTERY" | "LOWBATT" | "LB" => UpsStatus::LowBattery,
            "REPLACE_BATTERY" | "REPLACEBATT" | "RB" => UpsStatus::ReplaceBattery,
            "OVERLOAD" | "OVERLOADED" | "OVER" => UpsStatus::Overload,
            "OFFLINE" | "OFF" | "COMMLOST" => UpsStatus::Offline,
            _ => UpsStatus::Unknown,
        }
    }
}

impl fmt::Display for UpsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A UPS attached to (or monitored by) the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpsDevice {
    pub id: String,
    pub name: String,
    pub model: String,
    /// Status text exactly as reported.
    pub status: String,
    /// Battery charge percentage (0-100).
    pub battery_level: u32,
    /// Estimated runtime on battery, in seconds.
    pub runtime: u64,
    /// Battery health text (e.g. "Good", "Replace").
    pub battery_health: String,
    /// Input voltage in volts.
    pub input_voltage: f64,
    /// Output voltage in volts.
    pub output_voltage: f64,
    /// Load percentage (0-100).
    pub load_percentage: u32,
}

impl UpsDevice {
    /// Best-effort classification of [`UpsDevice::status`].
    #[must_use]
    pub fn known_status(&self) -> UpsStatus {
        UpsStatus::classify(&self.status)
    }
}
