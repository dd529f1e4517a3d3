use crate::core::domain::model::registration::{RegistrationState, RegistrationType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RegistrationQuery {
    pub registration: RegistrationEntry,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub license_type: RegistrationType,
    pub state: RegistrationState,
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub update_expiration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlashQuery {
    pub flash: FlashEntry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlashEntry {
    pub id: String,
    pub guid: String,
    pub vendor: String,
    pub product: String,
}
