pub mod array;
pub mod client_config;
pub mod disk;
pub mod docker;
pub mod metrics;
pub mod parity_check;
pub mod registration;
pub mod server_info;
pub mod share;
pub mod ups;
pub mod vm;
