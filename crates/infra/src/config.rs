//! Store configuration.
//!
//! Defaults place `products.json` in a `Data` directory next to the running
//! executable. `SHELF_DATA_DIR` and `SHELF_DATA_FILE` override either part.

use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "Data";
pub const DEFAULT_FILE_NAME: &str = "products.json";

pub const DATA_DIR_ENV: &str = "SHELF_DATA_DIR";
pub const DATA_FILE_ENV: &str = "SHELF_DATA_FILE";

/// Where the product collection lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(dir) => config.data_dir = PathBuf::from(dir),
            None => tracing::debug!(
                "{DATA_DIR_ENV} not set; using {}",
                config.data_dir.display()
            ),
        }

        match lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            Some(file) => config.file_name = file,
            None => tracing::debug!("{DATA_FILE_ENV} not set; using {}", config.file_name),
        }

        config
    }

    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            data_dir: base.join(DEFAULT_DATA_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}
