//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same attributes are interchangeable. To "modify" one, build a new
/// one with the new values.
///
/// Example: `Quality(4)` equals any other `Quality(4)`; there is no separate
/// identity to track across updates.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: compared by attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
