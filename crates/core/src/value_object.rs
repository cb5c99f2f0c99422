//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; to "modify" one,
/// create a new value with the new fields. `FilterState` is the canonical
/// example in this workspace: every reducer step returns a fresh value rather
/// than mutating in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
