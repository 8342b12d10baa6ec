//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To "change"
/// one, construct a new one. Construction is where validation happens, so a value
/// object that exists is a valid value object.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Quantity(f64);
///
/// impl ValueObject for Quantity {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
