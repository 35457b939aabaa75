// Adapters layer: concrete implementations of the domain ports (catalog backends, storage).

pub mod file_catalog;
pub mod local_storage;
pub mod memory;
pub mod postgrest;
pub mod snapshot;
