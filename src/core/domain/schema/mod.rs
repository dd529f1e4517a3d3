//! Response shapes for every operation in the catalog.
//!
//! These types mirror the wire format field for field, using the server's
//! camelCase names via serde renames. Decoding a `data` payload into one of
//! them is the validation step: a missing required field, a wrong type, or a
//! value outside a closed vocabulary fails with [`ValidationError::Schema`].
//! Nullable fields decode to `None` whether the key is null or absent.

pub(crate) mod array;
pub(crate) mod disk;
pub(crate) mod docker;
pub(crate) mod metrics;
pub(crate) mod parity_check;
pub(crate) mod registration;
pub(crate) mod server_info;
pub(crate) mod share;
pub(crate) mod ups;
pub(crate) mod vm;

use crate::core::domain::{
    error::{UnraidResult, ValidationError},
    query::Operation,
};
use serde::de::DeserializeOwned;

/// Decodes the `data` payload of `operation` into its response shape.
pub(crate) fn decode<T>(operation: &Operation, data: serde_json::Value) -> UnraidResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(data).map_err(|e| {
        ValidationError::Schema {
            operation: operation.name.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
