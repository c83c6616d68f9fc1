//! The filter/join pipeline.

use prodcat_catalog::{Category, Product, User};
use prodcat_core::DomainResult;

use crate::enriched::EnrichedProduct;
use crate::index::CatalogIndex;
use crate::selection::Selection;

/// Join `products` to their category and owner, then keep the ones passing
/// every active filter of `selection`, in original order.
///
/// Fails with `DomainError::DataIntegrity` if any foreign key does not
/// resolve. No match is an empty `Vec`, not an error.
///
/// Callers re-filtering the same catalog repeatedly should build a
/// [`CatalogIndex`] once and use [`CatalogIndex::visible`].
#[tracing::instrument(
    skip(products, categories, users),
    fields(products = products.len()),
    err
)]
pub fn visible_products(
    products: &[Product],
    categories: &[Category],
    users: &[User],
    selection: &Selection,
) -> DomainResult<Vec<EnrichedProduct>> {
    let index = CatalogIndex::from_parts(products, categories, users)?;
    Ok(apply(index.enriched(), selection))
}

/// Filters already-enriched products. Conjunction of the active axes.
pub(crate) fn apply(enriched: &[EnrichedProduct], selection: &Selection) -> Vec<EnrichedProduct> {
    let query = selection.normalized_query();

    let visible: Vec<EnrichedProduct> = enriched
        .iter()
        .filter(|p| matches_name(p, query.as_deref()))
        .filter(|p| selection.owner_id.is_none_or(|owner| p.owner_id() == owner))
        .filter(|p| {
            selection
                .category_owner_id
                .is_none_or(|owner| p.category.owner_id == owner)
        })
        .cloned()
        .collect();

    tracing::debug!(visible = visible.len(), "filter applied");
    visible
}

fn matches_name(product: &EnrichedProduct, query: Option<&str>) -> bool {
    match query {
        None => true,
        Some(q) => product.name().to_lowercase().contains(q),
    }
}
