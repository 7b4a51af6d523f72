//! Entity trait: records that keep their identity while their fields change.

/// A record identified by a stable key.
///
/// Product records are entities: an edit rewrites every field except the
/// identifier, and lookups, uniqueness checks and deletes all key off it.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True when `other` carries the same identifier.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
