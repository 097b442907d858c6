//! Product Catalog
//!
//! Abstraction over the processor's catalog listing.

use async_trait::async_trait;

use crate::error::{CheckoutError, Result};
use crate::product::Product;

/// Catalog lookup seam, one implementation per processor.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch the full catalog snapshot, fully materialized.
    async fn all_products(&self) -> Result<Vec<Product>>;

    /// Resolve a SKU to a product by exact string match.
    ///
    /// Re-fetches the catalog on every call so the answer always
    /// reflects the current upstream state. An unknown SKU is an
    /// explicit [`CheckoutError::NotFound`], never a default product,
    /// and a failed snapshot propagates as-is.
    async fn find_by_sku(&self, sku: &str) -> Result<Product> {
        self.all_products()
            .await?
            .into_iter()
            .find(|product| product.sku == sku)
            .ok_or_else(|| CheckoutError::NotFound(sku.to_string()))
    }
}

/// Fixed in-memory catalog for tests and credential-less local runs.
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo storefront items.
    pub fn demo() -> Self {
        Self::new(vec![
            Product {
                name: "Mug".into(),
                sku: "mug".into(),
                cost: 500,
            },
            Product {
                name: "Towel".into(),
                sku: "towel".into(),
                cost: 1000,
            },
        ])
    }
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    async fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}
