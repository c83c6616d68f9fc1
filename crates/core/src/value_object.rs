//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one from the old (the filter `Selection` works this way).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Selection {
///     name_query: String,
///     owner_id: Option<UserId>,
/// }
///
/// impl ValueObject for Selection {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
