//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// amounts of `11 EUR` are the same amount, and two tax determinations with
/// the same amount and label are the same determination. To "modify" one,
/// build a new value.
///
/// Contrast with [`crate::Entity`], where equality follows the identifier
/// (an invoice stays the same invoice while lines are appended).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Tax {
///     amount: Money,
///     description: String,
/// }
///
/// impl ValueObject for Tax {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
