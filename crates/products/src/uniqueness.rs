//! Uniqueness rules over a loaded collection.
//!
//! Identifiers must be unique, and names must be unique under case-insensitive
//! comparison. The checker reports in the same shape as the validator.

use shelf_core::{Entity, FieldError, ValidationResult};

use crate::product::{Product, ProductField};

/// Case-insensitive name equality used for the uniqueness rule.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Check `candidate` against `products`.
///
/// `own_slot` is the candidate's position in `products` when it is already
/// stored (an edit); that slot is skipped for the identifier comparison only.
/// Names are compared against every record, the candidate's own slot
/// included, so an edit must only be checked when its name actually changes.
pub fn check_uniqueness(
    products: &[Product],
    candidate: &Product,
    own_slot: Option<usize>,
) -> ValidationResult {
    let mut errors = Vec::new();

    let id_taken = products
        .iter()
        .enumerate()
        .any(|(slot, p)| Some(slot) != own_slot && p.same_identity(candidate));
    if id_taken {
        errors.push(FieldError::new(
            ProductField::Id,
            format!("A product with id '{}' already exists.", candidate.id),
        ));
    }

    if products.iter().any(|p| names_match(&p.name, &candidate.name)) {
        errors.push(FieldError::new(
            ProductField::Name,
            format!("A product named '{}' already exists.", candidate.name),
        ));
    }

    ValidationResult::from_field_errors(errors)
}
