//! Catalog records and loaders.
//!
//! The catalog is three flat, read-only collections (users, categories,
//! products) loaded once at startup. Nothing here mutates them after load.

pub mod catalog;
pub mod category;
pub mod config;
pub mod product;
pub mod user;

pub use catalog::{Catalog, CatalogError, CatalogSource, EmbeddedCatalog, JsonDirCatalog};
pub use category::Category;
pub use config::{CatalogConfig, DATA_DIR_ENV, load_configured_catalog};
pub use product::Product;
pub use user::{Sex, User};
