//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value and replace the old one wholesale. `Item` and `Stock` are
/// value objects: the inventory swaps in a fresh `Stock` on every change
/// rather than editing one in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
