//! Filter pipeline: joins products to their category and owner, then applies
//! the active filters of a [`Selection`].
//!
//! Everything here is pure and deterministic (no IO). The presentation layer
//! calls [`visible_products`] (or [`CatalogIndex::visible`]) on every
//! selection change and renders the result.

pub mod enriched;
pub mod index;
pub mod pipeline;
pub mod row;
pub mod selection;

pub use enriched::EnrichedProduct;
pub use index::CatalogIndex;
pub use pipeline::visible_products;
pub use row::{NO_MATCHING_MESSAGE, NameStyle, ProductRow, empty_message};
pub use selection::{Selection, parse_optional_id};
