//! `shelf-core` — catalog foundation building blocks.
//!
//! This crate contains **pure** primitives shared by the domain and infra
//! crates: identifiers, entity/value-object traits, the numeric status
//! vocabulary and the uniform result envelopes. No IO lives here.

pub mod entity;
pub mod envelope;
pub mod error;
pub mod id;
pub mod status;
pub mod value_object;

pub use entity::Entity;
pub use envelope::{FieldError, QueryResult, ValidationResult};
pub use error::CoreError;
pub use id::ProductId;
pub use status::Status;
pub use value_object::ValueObject;
