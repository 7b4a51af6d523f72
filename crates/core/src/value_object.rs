//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. In the catalog, a product's category and manufacturer are
//! value objects: each holds a single name and is always owned by exactly one
//! product (or creation request).

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Category { name: "Tools" }` is a value object
/// - `Product { id: ProductId(...), name: "..." }` is an entity
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Category {
///     name: String,
/// }
///
/// impl ValueObject for Category {}
///
/// let a = Category { name: "Tools".to_string() };
/// let b = Category { name: "Tools".to_string() };
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
