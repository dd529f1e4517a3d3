//! Licence registration and boot flash drive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Licence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationType {
    Basic,
    Plus,
    Pro,
    Starter,
    Unleashed,
    Lifetime,
    Invalid,
    Trial,
}

impl RegistrationType {
    /// Returns the wire value of the licence tier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationType::Basic => "BASIC",
            RegistrationType::Plus => "PLUS",
            RegistrationType::Pro => "PRO",
            RegistrationType::Starter => "STARTER",
            RegistrationType::Unleashed => "UNLEASHED",
            RegistrationType::Lifetime => "LIFETIME",
            RegistrationType::Invalid => "INVALID",
            RegistrationType::Trial => "TRIAL",
        }
    }
}

impl fmt::Display for RegistrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Licence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationState {
    Registered,
    Unregistered,
    Expired,
    Blacklisted,
    Trial,
}

impl RegistrationState {
    /// Returns the wire value of the licence state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationState::Registered => "REGISTERED",
            RegistrationState::Unregistered => "UNREGISTERED",
            RegistrationState::Expired => "EXPIRED",
            RegistrationState::Blacklisted => "BLACKLISTED",
            RegistrationState::Trial => "TRIAL",
        }
    }
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server licence registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Registration {
    pub id: String,
    pub license_type: RegistrationType,
    pub state: RegistrationState,
    /// Licence expiration date, as reported.
    pub expiration: Option<String>,
    /// End of the update entitlement, as reported.
    pub update_expiration: Option<String>,
}

/// The USB flash drive the server boots from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Flash {
    pub id: String,
    /// GUID the licence is bound to.
    pub guid: String,
    pub vendor: String,
    pub product: String,
}
