//! Catalog service: the in-memory owner of the product collection.
//!
//! ## Operation Flow
//!
//! ```text
//! request
//!   ↓
//! 1. Validate the form (pure, no load needed)
//!   ↓
//! 2. Ensure the collection is loaded (once per service lifetime)
//!   ↓
//! 3. Uniqueness check against the loaded collection
//!   ↓
//! 4. Mutate the in-memory collection
//!   ↓
//! 5. Write the whole collection through the record store
//! ```
//!
//! Every public operation answers with a [`QueryResult`]. Validation and
//! uniqueness failures come back as 400 envelopes, missing records as 404,
//! and persistence or cancellation failures as 500. No error type crosses
//! the service boundary.
//!
//! ## Concurrency
//!
//! Mutating operations take `&mut self`: a caller sharing one service
//! across threads must wrap it in a mutex, which serializes the whole
//! load-mutate-persist sequence of each call.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use shelf_core::{Entity, ProductId, QueryResult, Status};
use shelf_products::{
    check_uniqueness, names_match, Product, ProductRequest, ProductValidator, ValidationInput,
};

use crate::record_store::{RecordStore, RecordStoreError};

pub const NOT_FOUND_MESSAGE: &str = "Product not found";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
pub const CANCELLED_MESSAGE: &str = "Operation cancelled";

/// Internal failure of a catalog operation, mapped to a 500 envelope.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("operation cancelled")]
    Cancelled,

    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

impl<T> From<CatalogError> for QueryResult<T> {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Cancelled | CatalogError::Store(RecordStoreError::Cancelled) => {
                QueryResult::failure(Status::InternalError, CANCELLED_MESSAGE)
            }
            CatalogError::Store(e) => QueryResult::failure(Status::InternalError, e.to_string()),
        }
    }
}

/// Collection plus its load flag. Moves from unloaded to loaded exactly once.
#[derive(Debug, Default)]
struct CatalogState {
    products: Vec<Product>,
    loaded: bool,
}

impl CatalogState {
    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }

    fn contains_id(&self, id: &ProductId) -> bool {
        self.position(id).is_some()
    }
}

/// Product catalog over a [`RecordStore`].
///
/// The collection is read lazily on the first operation that needs it and
/// kept for the lifetime of the service; every successful mutation is
/// written through before the call returns.
#[derive(Debug)]
pub struct CatalogService<S> {
    store: S,
    state: CatalogState,
}

impl<S: RecordStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: CatalogState::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_loaded(&self) -> bool {
        self.state.loaded
    }

    /// Number of records held in memory (zero until loaded).
    pub fn len(&self) -> usize {
        self.state.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.products.is_empty()
    }

    fn ensure_loaded(&mut self, cancel: &CancellationToken) -> Result<(), CatalogError> {
        if self.state.loaded {
            return Ok(());
        }
        if cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }

        self.state.products = self.store.read_all();
        self.state.loaded = true;
        tracing::debug!(count = self.state.products.len(), "catalog loaded");
        Ok(())
    }

    /// Write the collection through. A write cancelled before it became
    /// visible restores `previous`, so memory and store still agree.
    fn persist(
        &mut self,
        previous: Vec<Product>,
        cancel: &CancellationToken,
    ) -> Result<(), CatalogError> {
        match self.store.write_all(&self.state.products, cancel) {
            Ok(()) => Ok(()),
            Err(RecordStoreError::Cancelled) => {
                self.state.products = previous;
                tracing::debug!("write cancelled; in-memory change rolled back");
                Err(CatalogError::Cancelled)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn fresh_id(&self) -> ProductId {
        loop {
            let id = ProductId::new();
            if !self.state.contains_id(&id) {
                return id;
            }
        }
    }

    /// All records, in insertion order.
    pub fn get_all(&mut self, cancel: &CancellationToken) -> QueryResult<Vec<Product>> {
        if let Err(err) = self.ensure_loaded(cancel) {
            return err.into();
        }
        QueryResult::ok(self.state.products.clone())
    }

    /// First record whose identifier equals `id`.
    ///
    /// A miss is reported as 404 with `success` still set.
    pub fn get_by_id(&mut self, id: &str, cancel: &CancellationToken) -> QueryResult<Product> {
        if let Err(err) = self.ensure_loaded(cancel) {
            return err.into();
        }
        self.find(|p| p.id == id)
    }

    /// First record whose name equals `name` exactly.
    ///
    /// A miss is reported as 404 with `success` still set.
    pub fn get_by_name(&mut self, name: &str, cancel: &CancellationToken) -> QueryResult<Product> {
        if let Err(err) = self.ensure_loaded(cancel) {
            return err.into();
        }
        self.find(|p| p.name == name)
    }

    fn find(&self, predicate: impl Fn(&Product) -> bool) -> QueryResult<Product> {
        match self.state.products.iter().find(|p| predicate(*p)) {
            Some(product) => QueryResult::ok(product.clone()),
            None => QueryResult {
                success: true,
                ..QueryResult::not_found(NOT_FOUND_MESSAGE)
            },
        }
    }

    /// Validate, assign an identifier, check uniqueness, append and persist.
    ///
    /// On success the 204 envelope carries the created record so callers
    /// learn its identifier. If the write fails the record stays in memory
    /// and the call reports 500; a cancelled write removes it again.
    pub fn create(
        &mut self,
        request: Option<&ProductRequest>,
        cancel: &CancellationToken,
    ) -> QueryResult<Product> {
        let validation = ProductValidator::validate_request(request);
        let request = match request {
            Some(request) if validation.success => request,
            _ => {
                tracing::debug!(error = ?validation.error, "create rejected by validation");
                return validation.into();
            }
        };

        if let Err(err) = self.ensure_loaded(cancel) {
            return err.into();
        }

        let product = Product::from_request(self.fresh_id(), request);
        let uniqueness = check_uniqueness(&self.state.products, &product, None);
        if !uniqueness.success {
            tracing::debug!(name = %product.name, "create rejected: duplicate");
            return uniqueness.into();
        }

        if cancel.is_cancelled() {
            return CatalogError::Cancelled.into();
        }

        let previous = self.state.products.clone();
        self.state.products.push(product.clone());
        if let Err(err) = self.persist(previous, cancel) {
            tracing::error!(id = %product.id, error = %err, "failed to persist created product");
            return err.into();
        }

        tracing::info!(id = %product.id, name = %product.name, "product created");
        QueryResult::no_content().with_content(product)
    }

    /// Overwrite every mutable field of the stored record with `product`'s.
    ///
    /// A rename (case-insensitive) is checked for uniqueness first. If the
    /// write fails the in-memory change stays and the call reports 500,
    /// unless the write was cancelled.
    pub fn update(
        &mut self,
        product: Option<&Product>,
        cancel: &CancellationToken,
    ) -> QueryResult<()> {
        let Some(product) = product else {
            return QueryResult::failure(Status::BadRequest, INVALID_INPUT_MESSAGE);
        };

        let validation = ProductValidator::validate_product(Some(product));
        if !validation.success {
            tracing::debug!(id = %product.id, "update rejected by validation");
            return validation.into();
        }

        if let Err(err) = self.ensure_loaded(cancel) {
            return err.into();
        }

        let Some(slot) = self.state.position(&product.id) else {
            return QueryResult::not_found(NOT_FOUND_MESSAGE);
        };

        if !names_match(&self.state.products[slot].name, &product.name) {
            let uniqueness = check_uniqueness(&self.state.products, product, Some(slot));
            if !uniqueness.success {
                tracing::debug!(id = %product.id, name = %product.name, "update rejected: duplicate");
                return uniqueness.into();
            }
        }

        if cancel.is_cancelled() {
            return CatalogError::Cancelled.into();
        }

        let previous = self.state.products.clone();
        self.state.products[slot].apply_changes(product);
        if let Err(err) = self.persist(previous, cancel) {
            tracing::error!(id = %product.id, error = %err, "failed to persist updated product");
            return err.into();
        }

        tracing::info!(id = %product.id, "product updated");
        QueryResult::no_content()
    }

    /// Remove every record sharing `product`'s identifier and persist.
    ///
    /// An absent input is a 500 (unlike create/update); an unknown
    /// identifier is a silent success.
    pub fn delete(
        &mut self,
        product: Option<&Product>,
        cancel: &CancellationToken,
    ) -> QueryResult<()> {
        let Some(product) = product else {
            return QueryResult::failure(Status::InternalError, NOT_FOUND_MESSAGE);
        };

        if let Err(err) = self.ensure_loaded(cancel) {
            return err.into();
        }
        if cancel.is_cancelled() {
            return CatalogError::Cancelled.into();
        }

        let previous = self.state.products.clone();
        self.state.products.retain(|p| !p.same_identity(product));
        let removed = previous.len() - self.state.products.len();

        if let Err(err) = self.persist(previous, cancel) {
            tracing::error!(id = %product.id, error = %err, "failed to persist deletion");
            return err.into();
        }

        tracing::info!(id = %product.id, removed, "product deleted");
        QueryResult::ok_empty()
    }

    /// Quick form check reporting only the first violated rule.
    pub fn verify_request(&self, request: Option<&ProductRequest>) -> QueryResult<()> {
        let Some(request) = request else {
            return QueryResult::failure(Status::BadRequest, INVALID_INPUT_MESSAGE);
        };

        match ProductValidator::first_violation(ValidationInput::Request(request)) {
            Some(violation) => QueryResult {
                field_errors: vec![violation.clone()],
                ..QueryResult::failure(Status::BadRequest, violation.message)
            },
            None => QueryResult::no_content(),
        }
    }
}
