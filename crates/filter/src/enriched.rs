use serde::Serialize;

use prodcat_catalog::{Category, Product, User};
use prodcat_core::{ProductId, UserId};

/// A product joined with its category and the user owning that category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn owner_id(&self) -> UserId {
        self.user.id
    }
}
