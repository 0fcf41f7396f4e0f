//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implementors compare equal when their ids are equal, regardless of the
/// rest of their state.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
