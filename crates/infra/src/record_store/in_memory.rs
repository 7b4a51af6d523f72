use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio_util::sync::CancellationToken;

use shelf_products::Product;

use super::r#trait::{RecordStore, RecordStoreError};

/// In-memory record store.
///
/// Intended for tests/dev. Writes can be switched to fail so callers can
/// exercise their persistence-error paths.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<Product>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `records`.
    pub fn with_records(records: Vec<Product>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current stored contents.
    pub fn snapshot(&self) -> Vec<Product> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn read_all(&self) -> Vec<Product> {
        self.snapshot()
    }

    fn write_all(
        &self,
        products: &[Product],
        cancel: &CancellationToken,
    ) -> Result<(), RecordStoreError> {
        if cancel.is_cancelled() {
            return Err(RecordStoreError::Cancelled);
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RecordStoreError::Storage("write rejected".to_string()));
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| RecordStoreError::Storage("record lock poisoned".to_string()))?;
        *records = products.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
