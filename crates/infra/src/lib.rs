//! Infrastructure layer: record stores, configuration and the catalog service.

pub mod catalog;
pub mod config;
pub mod record_store;

#[cfg(test)]
mod integration_tests;

pub use catalog::{CatalogError, CatalogService};
pub use config::StoreConfig;
pub use record_store::{InMemoryRecordStore, JsonFileStore, RecordStore, RecordStoreError};

pub use tokio_util::sync::CancellationToken;
