//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores look entities up by comparing `id()`; the identifier never changes
/// for the lifetime of the entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
