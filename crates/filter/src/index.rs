//! Id-keyed lookup over a loaded catalog.
//!
//! Built once from the static collections. Building validates every foreign
//! key, so a successfully built index can enrich any of its products without
//! further failure.

use std::collections::{HashMap, HashSet};

use prodcat_catalog::{Catalog, Category, Product, User};
use prodcat_core::{CategoryId, DomainError, DomainResult, Entity, UserId};

use crate::enriched::EnrichedProduct;
use crate::pipeline;
use crate::selection::Selection;

#[derive(Debug, Clone)]
pub struct CatalogIndex {
    users: HashMap<UserId, User>,
    categories: HashMap<CategoryId, Category>,
    enriched: Vec<EnrichedProduct>,
}

impl CatalogIndex {
    pub fn build(catalog: &Catalog) -> DomainResult<Self> {
        Self::from_parts(catalog.products(), catalog.categories(), catalog.users())
    }

    pub fn from_parts(
        products: &[Product],
        categories: &[Category],
        users: &[User],
    ) -> DomainResult<Self> {
        let user_map = index_by_id(users)?;
        let category_map = index_by_id(categories)?;

        for category in categories {
            if !user_map.contains_key(&category.owner_id) {
                return Err(DomainError::dangling(
                    Category::KIND,
                    category.id,
                    User::KIND,
                    category.owner_id,
                ));
            }
        }

        ensure_unique_ids(products)?;

        let enriched = products
            .iter()
            .map(|p| join(p, &category_map, &user_map))
            .collect::<DomainResult<Vec<_>>>()?;

        tracing::debug!(
            users = user_map.len(),
            categories = category_map.len(),
            products = enriched.len(),
            "catalog index built"
        );

        Ok(Self {
            users: user_map,
            categories: category_map,
            enriched,
        })
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Join a single product against this index.
    ///
    /// The product does not need to be one the index was built from, so this
    /// can still fail on a dangling category reference.
    pub fn enrich(&self, product: &Product) -> DomainResult<EnrichedProduct> {
        join(product, &self.categories, &self.users)
    }

    /// All products, enriched, in original order.
    pub fn enriched(&self) -> &[EnrichedProduct] {
        &self.enriched
    }

    #[tracing::instrument(skip(self), fields(total = self.enriched.len()))]
    pub fn visible(&self, selection: &Selection) -> Vec<EnrichedProduct> {
        pipeline::apply(&self.enriched, selection)
    }
}

fn index_by_id<T>(items: &[T]) -> DomainResult<HashMap<T::Id, T>>
where
    T: Entity + Clone,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        if map.insert(item.id(), item.clone()).is_some() {
            return Err(DomainError::duplicate(T::KIND, item.id()));
        }
    }
    Ok(map)
}

fn ensure_unique_ids<T: Entity>(items: &[T]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(DomainError::duplicate(T::KIND, item.id()));
        }
    }
    Ok(())
}

fn join(
    product: &Product,
    categories: &HashMap<CategoryId, Category>,
    users: &HashMap<UserId, User>,
) -> DomainResult<EnrichedProduct> {
    let category = categories.get(&product.category_id).ok_or_else(|| {
        DomainError::dangling(
            Product::KIND,
            product.id,
            Category::KIND,
            product.category_id,
        )
    })?;
    let user = users.get(&category.owner_id).ok_or_else(|| {
        DomainError::dangling(Category::KIND, category.id, User::KIND, category.owner_id)
    })?;

    Ok(EnrichedProduct {
        product: product.clone(),
        category: category.clone(),
        user: user.clone(),
    })
}
