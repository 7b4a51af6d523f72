//! Whole-collection persistence boundary.
//!
//! A record store reads the entire product collection at once and replaces it
//! entirely on write. There is no append, merge or partial update.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use json_file::{JsonFileStore, EMPTY_COLLECTION, ensure_initialized};
pub use r#trait::{RecordStore, RecordStoreError};
