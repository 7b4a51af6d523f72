//! JSON file record store.
//!
//! The collection is a single JSON array. Property names are matched
//! case-insensitively on read (keys are folded to lowercase before decoding)
//! and written pretty-printed with their canonical spelling.
//!
//! Writes go to a sibling `<file>.tmp` which is then renamed over the target,
//! so a reader sees either the old array or the new one, never a torn file.
//! If the process dies between the temp write and the rename, the stale
//! temp file is overwritten by the next write.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;

use shelf_products::Product;

use super::r#trait::{RecordStore, RecordStoreError};
use crate::config::StoreConfig;

/// File contents of an empty catalog.
pub const EMPTY_COLLECTION: &str = "[]";

/// Create `data_dir` and an empty collection file at `file_path` if missing.
///
/// Idempotent; existing files are left untouched.
pub fn ensure_initialized(data_dir: &Path, file_path: &Path) -> Result<(), RecordStoreError> {
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(RecordStoreError::io(data_dir))?;
        tracing::info!(dir = %data_dir.display(), "created data directory");
    }

    if !file_path.exists() {
        fs::write(file_path, EMPTY_COLLECTION).map_err(RecordStoreError::io(file_path))?;
        tracing::info!(path = %file_path.display(), "created empty product file");
    }

    Ok(())
}

/// Record store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    tmp_path: PathBuf,
}

impl JsonFileStore {
    /// Open the store described by `config`, initializing the file if needed.
    pub fn open(config: &StoreConfig) -> Result<Self, RecordStoreError> {
        let path = config.file_path();
        ensure_initialized(&config.data_dir, &path)?;
        Ok(Self::from_path(path))
    }

    /// Open the store at an explicit file path, initializing it if needed.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self, RecordStoreError> {
        let path = path.into();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_initialized(&dir, &path)?;
        Ok(Self::from_path(path))
    }

    fn from_path(path: PathBuf) -> Self {
        let mut tmp_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "products.json".into());
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);
        Self { path, tmp_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_read(&self) -> Result<Vec<Product>, RecordStoreError> {
        let bytes = fs::read(&self.path).map_err(RecordStoreError::io(&self.path))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_slice(&bytes)?;
        if value.is_null() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_value(fold_keys(value))?)
    }
}

/// Lowercase every object key, recursively. String values are left alone.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), fold_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

impl RecordStore for JsonFileStore {
    fn read_all(&self) -> Vec<Product> {
        match self.try_read() {
            Ok(products) => products,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "product file unreadable; treating catalog as empty"
                );
                Vec::new()
            }
        }
    }

    fn write_all(
        &self,
        products: &[Product],
        cancel: &CancellationToken,
    ) -> Result<(), RecordStoreError> {
        if cancel.is_cancelled() {
            return Err(RecordStoreError::Cancelled);
        }

        let bytes = serde_json::to_vec_pretty(products)?;
        fs::write(&self.tmp_path, bytes).map_err(RecordStoreError::io(&self.tmp_path))?;

        if cancel.is_cancelled() {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(RecordStoreError::Cancelled);
        }

        if let Err(source) = fs::rename(&self.tmp_path, &self.path) {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(RecordStoreError::Io {
                path: self.path.clone(),
                source,
            });
        }

        tracing::debug!(path = %self.path.display(), count = products.len(), "product file written");
        Ok(())
    }
}
