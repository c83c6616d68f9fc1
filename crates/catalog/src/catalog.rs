//! The loaded catalog and the sources it can come from.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{Category, Product, User};

const USERS_FILE: &str = "users.json";
const CATEGORIES_FILE: &str = "categories.json";
const PRODUCTS_FILE: &str = "products.json";

/// Three read-only collections, kept in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can produce a [`Catalog`].
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// The seed catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let users = parse(USERS_FILE, include_str!("../data/users.json"))?;
        let categories = parse(CATEGORIES_FILE, include_str!("../data/categories.json"))?;
        let products = parse(PRODUCTS_FILE, include_str!("../data/products.json"))?;

        let catalog = Catalog::new(users, categories, products);
        log_loaded("embedded", &catalog);
        Ok(catalog)
    }
}

/// Reads `users.json`, `categories.json` and `products.json` from a directory.
#[derive(Debug, Clone)]
pub struct JsonDirCatalog {
    dir: PathBuf,
}

impl JsonDirCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, CatalogError> {
        let path = self.dir.join(file);
        let raw = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse { path, source })
    }
}

impl CatalogSource for JsonDirCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let users = self.read(USERS_FILE)?;
        let categories = self.read(CATEGORIES_FILE)?;
        let products = self.read(PRODUCTS_FILE)?;

        let catalog = Catalog::new(users, categories, products);
        log_loaded(&self.dir().display().to_string(), &catalog);
        Ok(catalog)
    }
}

fn parse<T: DeserializeOwned>(file: &str, raw: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
        path: PathBuf::from(file),
        source,
    })
}

fn log_loaded(origin: &str, catalog: &Catalog) {
    tracing::info!(
        origin,
        users = catalog.users.len(),
        categories = catalog.categories.len(),
        products = catalog.products.len(),
        "catalog loaded"
    );
}
