mod api_key;
mod prefixed_id;
pub(crate) mod serde_helpers;
mod server_url;

pub use api_key::ApiKey;
pub use prefixed_id::PrefixedId;
pub use server_url::ServerUrl;
