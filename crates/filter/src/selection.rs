//! Filter selection state.
//!
//! Three independent axes (name text, owner, category). Each transition
//! returns a new `Selection`; nothing is mutated in place.
//!
//! The category axis is keyed by the category's owner: selecting it keeps
//! the products whose category is owned by the selected user.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use prodcat_core::{DomainError, DomainResult, UserId, ValueObject};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    /// Raw search text as typed. Empty means no text filter.
    pub name_query: String,
    pub owner_id: Option<UserId>,
    /// Compared against the owning user of each product's category.
    pub category_owner_id: Option<UserId>,
}

impl ValueObject for Selection {}

impl Selection {
    /// No active filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_query(self, query: impl Into<String>) -> Self {
        Self {
            name_query: query.into(),
            ..self
        }
    }

    pub fn clear_name_query(self) -> Self {
        self.with_name_query(String::new())
    }

    pub fn with_owner(self, owner_id: UserId) -> Self {
        Self {
            owner_id: Some(owner_id),
            ..self
        }
    }

    pub fn all_owners(self) -> Self {
        Self {
            owner_id: None,
            ..self
        }
    }

    pub fn with_category_owner(self, owner_id: UserId) -> Self {
        Self {
            category_owner_id: Some(owner_id),
            ..self
        }
    }

    pub fn all_categories(self) -> Self {
        Self {
            category_owner_id: None,
            ..self
        }
    }

    /// "Reset all filters": clears the owner and the name query. The
    /// category selection is kept.
    pub fn reset(self) -> Self {
        Self {
            name_query: String::new(),
            owner_id: None,
            ..self
        }
    }

    /// Clears every axis, category included.
    pub fn clear_all(self) -> Self {
        Self::default()
    }

    /// Whether the raw query is non-empty (the clear-search control is shown).
    pub fn has_name_query(&self) -> bool {
        !self.name_query.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.has_name_query() || self.owner_id.is_some() || self.category_owner_id.is_some()
    }

    /// Case-folded, trimmed query, or `None` when there is no text filter.
    ///
    /// A whitespace-only query yields `Some("")`, which matches every name.
    pub fn normalized_query(&self) -> Option<String> {
        if self.name_query.is_empty() {
            return None;
        }
        Some(self.name_query.trim().to_lowercase())
    }
}

/// Parse an identifier coming from a UI control.
///
/// An empty (or blank) string means "nothing selected".
pub fn parse_optional_id<T>(raw: &str) -> DomainResult<Option<T>>
where
    T: FromStr<Err = DomainError>,
{
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    use prodcat_core::CategoryId;

    #[test]
    fn default_selection_is_inactive() {
        let s = Selection::new();
        assert!(!s.is_active());
        assert!(!s.has_name_query());
        assert_eq!(s.normalized_query(), None);
    }

    #[test]
    fn transitions_touch_only_their_axis() {
        let s = Selection::new()
            .with_name_query("milk")
            .with_owner(UserId::new(1))
            .with_category_owner(UserId::new(2));

        let no_owner = s.clone().all_owners();
        assert_eq!(no_owner.owner_id, None);
        assert_eq!(no_owner.name_query, "milk");
        assert_eq!(no_owner.category_owner_id, Some(UserId::new(2)));

        let no_category = s.clone().all_categories();
        assert_eq!(no_category.category_owner_id, None);
        assert_eq!(no_category.owner_id, Some(UserId::new(1)));

        let no_query = s.clone().clear_name_query();
        assert!(!no_query.has_name_query());
        assert!(no_query.is_active());

        assert_eq!(s.clear_all(), Selection::new());
    }

    #[test]
    fn reset_keeps_category_selection() {
        let s = Selection::new()
            .with_name_query("milk")
            .with_owner(UserId::new(1))
            .with_category_owner(UserId::new(2));

        let reset = s.reset();
        assert_eq!(reset.name_query, "");
        assert_eq!(reset.owner_id, None);
        assert_eq!(reset.category_owner_id, Some(UserId::new(2)));
        assert!(reset.is_active());
    }

    #[test]
    fn normalized_query_trims_and_folds_case() {
        let s = Selection::new().with_name_query("  MiLk ");
        assert_eq!(s.normalized_query().as_deref(), Some("milk"));

        let blank = Selection::new().with_name_query("   ");
        assert!(blank.has_name_query());
        assert_eq!(blank.normalized_query().as_deref(), Some(""));
    }

    #[test]
    fn parse_optional_id_handles_empty_and_garbage() {
        assert_eq!(parse_optional_id::<UserId>("").unwrap(), None);
        assert_eq!(parse_optional_id::<UserId>("  ").unwrap(), None);
        assert_eq!(parse_optional_id::<UserId>("3").unwrap(), Some(UserId::new(3)));
        assert!(matches!(
            parse_optional_id::<CategoryId>("x1"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn deserializes_partial_selection() {
        let s: Selection = serde_json::from_str(r#"{"ownerId":999}"#).unwrap();
        assert_eq!(s, Selection::new().with_owner(UserId::new(999)));

        let empty: Selection = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Selection::new());
    }
}
