//! Display rows for the product table.
//!
//! A presentation layer prints these as-is; no markup is produced here.

use serde::Serialize;

use prodcat_catalog::Sex;
use prodcat_core::ProductId;

use crate::enriched::EnrichedProduct;

/// Shown instead of the table body when nothing matches.
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Text style for the user column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    Link,
    Danger,
}

impl From<Sex> for NameStyle {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => NameStyle::Link,
            Sex::Female => NameStyle::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    /// `"{icon} - {title}"`
    pub category: String,
    pub user: String,
    pub user_style: NameStyle,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(p: &EnrichedProduct) -> Self {
        Self {
            id: p.id(),
            name: p.name().to_string(),
            category: format!("{} - {}", p.category.icon, p.category.title),
            user: p.user.name.clone(),
            user_style: p.user.sex.into(),
        }
    }
}

/// `Some(NO_MATCHING_MESSAGE)` when `visible` is empty.
pub fn empty_message<T>(visible: &[T]) -> Option<&'static str> {
    visible.is_empty().then_some(NO_MATCHING_MESSAGE)
}
