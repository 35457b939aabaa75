use crate::adapters::file_catalog::FileCatalog;
use crate::adapters::local_storage::LocalStorage;
use crate::adapters::memory::InMemoryCatalog;
use crate::adapters::postgrest::PostgrestCatalog;
use crate::config::{AppConfig, BackendKind};
use crate::core::service::{BrandService, ServiceSettings};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::sync::Arc;
use std::time::Duration;

/// 依設定建立後端並組裝服務
pub async fn build_service(config: &AppConfig) -> Result<BrandService> {
    let settings = ServiceSettings {
        audit_limit: config.generator.audit_limit,
    };
    let backend = &config.backend;

    let service = match backend.kind {
        BackendKind::Memory => {
            tracing::info!("Using in-memory catalog");
            let catalog = Arc::new(InMemoryCatalog::new());
            BrandService::new(catalog.clone(), catalog, settings)
        }
        BackendKind::File => {
            let storage = LocalStorage::new(&backend.catalog_dir);
            tracing::info!(
                "Using catalog file {}",
                storage.resolve(&backend.catalog_file).display()
            );
            let catalog = Arc::new(FileCatalog::open(storage, backend.catalog_file.clone()).await?);
            BrandService::new(catalog.clone(), catalog, settings)
        }
        BackendKind::Postgrest => {
            let url = validate_required_field("backend.url", &backend.url)?;
            let api_key = validate_required_field("backend.api_key", &backend.api_key)?;
            tracing::info!("Using PostgREST catalog at {}", url);
            let catalog = Arc::new(PostgrestCatalog::new(
                url,
                api_key.clone(),
                Duration::from_secs(backend.timeout_seconds),
            )?);
            BrandService::new(catalog.clone(), catalog, settings)
        }
    };

    Ok(service)
}
