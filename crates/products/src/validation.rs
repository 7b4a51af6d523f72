//! Field-rule validation for product forms.
//!
//! Validation is pure: it inspects one record or one creation request and
//! returns a [`ValidationResult`]. Every rule is evaluated independently and
//! all violations are collected in rule order; nothing short-circuits except
//! an absent form.

use rust_decimal::Decimal;

use shelf_core::{FieldError, ProductId, ValidationResult};

use crate::product::{Category, Manufacturer, Product, ProductField, ProductRequest};

/// Error summary for an absent form.
pub const EMPTY_FORM_MESSAGE: &str = "Product form is empty";

/// The two shapes a form can arrive in.
#[derive(Debug, Clone, Copy)]
pub enum ValidationInput<'a> {
    /// Full record (edit form); the identifier is checked too.
    Product(&'a Product),
    /// Creation request; there is no identifier yet.
    Request(&'a ProductRequest),
}

/// Borrowed view over either input shape.
struct FormFields<'a> {
    id: Option<&'a ProductId>,
    name: &'a str,
    description: &'a str,
    category: Option<&'a Category>,
    manufacturer: Option<&'a Manufacturer>,
    price: Decimal,
}

impl<'a> From<ValidationInput<'a>> for FormFields<'a> {
    fn from(input: ValidationInput<'a>) -> Self {
        match input {
            ValidationInput::Product(p) => Self {
                id: Some(&p.id),
                name: &p.name,
                description: &p.description,
                category: p.category.as_ref(),
                manufacturer: p.manufacturer.as_ref(),
                price: p.price,
            },
            ValidationInput::Request(r) => Self {
                id: None,
                name: &r.name,
                description: &r.description,
                category: r.category.as_ref(),
                manufacturer: r.manufacturer.as_ref(),
                price: r.price,
            },
        }
    }
}

/// Stateless rule checker for product forms.
pub struct ProductValidator;

impl ProductValidator {
    /// Validate either shape. `None` means the form itself is absent.
    pub fn validate(input: Option<ValidationInput<'_>>) -> ValidationResult {
        match input {
            None => ValidationResult::rejected(EMPTY_FORM_MESSAGE),
            Some(input) => ValidationResult::from_field_errors(collect_violations(&input.into())),
        }
    }

    pub fn validate_product(product: Option<&Product>) -> ValidationResult {
        Self::validate(product.map(ValidationInput::Product))
    }

    pub fn validate_request(request: Option<&ProductRequest>) -> ValidationResult {
        Self::validate(request.map(ValidationInput::Request))
    }

    /// First violated rule only, for callers that report one message at a time.
    ///
    /// Returns `None` when the input passes (an absent form is reported by
    /// [`ProductValidator::validate`], not here).
    pub fn first_violation(input: ValidationInput<'_>) -> Option<FieldError> {
        collect_violations(&input.into()).into_iter().next()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn collect_violations(form: &FormFields<'_>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.id.is_some_and(ProductId::is_blank) {
        errors.push(FieldError::new(ProductField::Id, "Product id is missing."));
    }

    if is_blank(form.name) {
        errors.push(FieldError::new(ProductField::Name, "Product name can't be empty."));
    }

    if is_blank(form.description) {
        errors.push(FieldError::new(
            ProductField::Description,
            "Product description can't be empty.",
        ));
    }

    if form.category.is_none_or(|c| is_blank(&c.name)) {
        errors.push(FieldError::new(ProductField::Category, "Product category can't be empty."));
    }

    if form.manufacturer.is_none_or(|m| is_blank(&m.name)) {
        errors.push(FieldError::new(
            ProductField::Manufacturer,
            "Product manufacturer can't be empty.",
        ));
    }

    if form.price < Decimal::ZERO {
        errors.push(FieldError::new(ProductField::Price, "Product price can't be negative."));
    }

    errors
}
