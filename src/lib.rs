pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    file_catalog::FileCatalog, local_storage::LocalStorage, memory::InMemoryCatalog,
    postgrest::PostgrestCatalog,
};
pub use config::AppConfig;
pub use crate::core::{generator::generate_names, service::BrandService};
pub use domain::model::{GeneratedResult, GenerationRequest, WordCount};
pub use utils::error::{BrandError, Result};
