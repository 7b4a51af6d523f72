//! Products domain module.
//!
//! This crate contains the product record shapes and the business rules of
//! the catalog (field validation, uniqueness), implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod product;
pub mod uniqueness;
pub mod validation;

pub use product::{Category, Manufacturer, Product, ProductField, ProductRequest};
pub use uniqueness::{check_uniqueness, names_match};
pub use validation::{ProductValidator, ValidationInput, EMPTY_FORM_MESSAGE};

pub use rust_decimal::Decimal;
