//! Product catalog manifest
//!
//! The catalog is a read-only `[[products]]` TOML manifest supplied by the
//! surrounding application. Prices are decimal strings ("19.99"). Unlike
//! persisted cart/account state, a malformed manifest is a configuration
//! error and is reported, not defaulted away.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Product;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

/// Catalog manifest as parsed from TOML
#[derive(Debug, Deserialize)]
struct CatalogToml {
    #[serde(default)]
    products: Vec<Product>,
}

/// The fixed product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load a catalog from a TOML manifest file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let manifest: CatalogToml = toml::from_str(raw)?;
        Self::from_products(manifest.products)
    }

    /// Build a catalog from already-loaded products
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products })
    }

    /// Look up a product by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in manifest order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in the given category
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct non-empty categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
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
    use rust_decimal::Decimal;

    const MANIFEST: &str = r#"
        [[products]]
        id = "p1"
        name = "Wireless Mouse"
        price = "24.99"
        stock = 12
        category = "electronics"

        [[products]]
        id = "p2"
        name = "Notebook"
        price = "4.50"
        stock = 80
        category = "stationery"
        description = "A5, dotted"

        [[products]]
        id = "p3"
        name = "USB-C Cable"
        price = "9.99"
        stock = 0
        category = "electronics"
    "#;

    #[test]
    fn test_parse_manifest() {
        let catalog = Catalog::from_toml_str(MANIFEST).unwrap();
        assert_eq!(catalog.len(), 3);

        let mouse = catalog.get("p1").unwrap();
        assert_eq!(mouse.name, "Wireless Mouse");
        assert_eq!(mouse.price, Decimal::new(2499, 2));
        assert_eq!(mouse.stock, 12);
        // omitted optional fields default to empty
        assert_eq!(mouse.description, "");
        assert_eq!(mouse.image, "");
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = Catalog::from_toml_str(MANIFEST).unwrap();
        assert!(catalog.get("p99").is_none());
    }

    #[test]
    fn test_by_category_and_categories() {
        let catalog = Catalog::from_toml_str(MANIFEST).unwrap();
        assert_eq!(catalog.by_category("electronics").len(), 2);
        assert_eq!(catalog.by_category("stationery").len(), 1);
        assert_eq!(catalog.categories(), vec!["electronics", "stationery"]);
    }

    #[test]
    fn test_bad_price_is_a_parse_error() {
        let raw = r#"
            [[products]]
            id = "p1"
            name = "Broken"
            price = "not-a-number"
            stock = 1
        "#;
        assert!(matches!(
            Catalog::from_toml_str(raw),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"
            [[products]]
            id = "p1"
            name = "One"
            price = "1.00"
            stock = 1

            [[products]]
            id = "p1"
            name = "Two"
            price = "2.00"
            stock = 1
        "#;
        assert!(matches!(
            Catalog::from_toml_str(raw),
            Err(CatalogError::DuplicateId(id)) if id == "p1"
        ));
    }

    #[test]
    fn test_empty_manifest_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
