//! Value object trait: equality by value, not identity.
//!
//! Inventory rows have no identity of their own. Two items with the same name,
//! sell-in and quality are interchangeable.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: values are copied freely (snapshots, fixtures, reports)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Item {
///     name: String,
///     sell_in: i32,
///     quality: i32,
/// }
///
/// impl ValueObject for Item {}
///
/// let a = Item { name: "Aged Brie".into(), sell_in: 2, quality: 0 };
/// let b = Item { name: "Aged Brie".into(), sell_in: 2, quality: 0 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
