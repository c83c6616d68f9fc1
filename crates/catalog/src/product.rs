use serde::{Deserialize, Serialize};

use prodcat_core::{CategoryId, Entity, ProductId};

/// Catalog product. Belongs to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category_id: u32,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category_id: CategoryId::new(category_id),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }
}
