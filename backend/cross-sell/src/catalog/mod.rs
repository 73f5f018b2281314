//! Product Catalog
//!
//! Immutable list of cross-sell products shared by every app in the suite.
//! Loaded once at startup and handed to the ranker explicitly.

use crate::models::Product;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

const DEFAULT_CATALOG_JSON: &str = include_str!("default_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("Product {id} has rating {rating} outside 0..=5")]
    InvalidRating { id: String, rating: f64 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Read-only product list. Cloning shares the underlying storage.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Validate and wrap a product list.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if let Some(rating) = product.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(CatalogError::InvalidRating {
                        id: product.id.clone(),
                        rating,
                    });
                }
            }
        }

        Ok(Self {
            products: products.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            products: Arc::from(Vec::new()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), products = catalog.len(), "Loaded product catalog");
        Ok(catalog)
    }

    /// Catalog bundled with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("assistant").is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let products = vec![
            Product::new("a", "A", "ai"),
            Product::new("a", "A again", "finance"),
        ];

        match Catalog::new(products) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let products = vec![Product::new("a", "A", "ai").with_rating(5.5)];
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = Catalog::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn test_clone_shares_products() {
        let catalog = Catalog::new(vec![Product::new("a", "A", "ai")]).unwrap();
        let cloned = catalog.clone();
        assert!(std::ptr::eq(catalog.products(), cloned.products()));
    }
}
