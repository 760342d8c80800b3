//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// A size variant is the typical example in this workspace: two variants with
/// the same name, quantity, reference, EAN and price describe the same sellable
/// option, whichever product happens to hold them.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are copied into the aggregates that own them
/// - **PartialEq**: compared by attribute values
/// - **Debug**: needed for logging and test assertions
///
/// ## Usage Pattern
///
/// ```
/// use feedkit_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price {
///     amount: f64,
///     currency: String,
/// }
///
/// impl ValueObject for Price {}
///
/// let p1 = Price { amount: 19.99, currency: "EUR".to_string() };
/// let p2 = Price { amount: 19.99, currency: "EUR".to_string() };
/// assert_eq!(p1, p2);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
