use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use shelf_products::Product;

/// Errors raised while writing the collection.
///
/// Reads never fail: see [`RecordStore::read_all`].
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The write was cancelled before it replaced the stored collection.
    #[error("write cancelled")]
    Cancelled,

    #[error("storage error: {0}")]
    Storage(String),
}

impl RecordStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Persistence primitive for the full product collection.
pub trait RecordStore: Send + Sync {
    /// Load every stored record, in stored order.
    ///
    /// Fail-soft: an empty, unreadable or malformed source yields an empty
    /// collection instead of an error, so a corrupt cache never takes the
    /// catalog down.
    fn read_all(&self) -> Vec<Product>;

    /// Replace the stored collection with `products`.
    ///
    /// All-or-nothing from the caller's point of view: readers observe either
    /// the previous collection or the new one. Cancellation is honoured up to
    /// the point where the new contents become visible.
    fn write_all(
        &self,
        products: &[Product],
        cancel: &CancellationToken,
    ) -> Result<(), RecordStoreError>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn read_all(&self) -> Vec<Product> {
        (**self).read_all()
    }

    fn write_all(
        &self,
        products: &[Product],
        cancel: &CancellationToken,
    ) -> Result<(), RecordStoreError> {
        (**self).write_all(products, cancel)
    }
}
