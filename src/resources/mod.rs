//! Domain operations of [`crate::UnraidClient`].
//!
//! Each submodule adds the methods for one area of the API and the
//! conversions from its response shapes into domain records.

mod docker;
mod server;
mod storage;
mod ups;
mod vm;
