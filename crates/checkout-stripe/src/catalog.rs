//! Stripe Catalog
//!
//! Resolves the sellable catalog by paging the price listing and
//! retrieving each price's parent product. The snapshot is rebuilt in
//! full on every call; there is no cache.

use async_trait::async_trait;
use stripe::{ListPrices, Price, PriceId, Product as StripeProduct};

use checkout_core::{CheckoutError, Product, ProductCatalog, Result};

use crate::client::StripeClient;

const PAGE_SIZE: u64 = 100;

#[async_trait]
impl ProductCatalog for StripeClient {
    async fn all_products(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut cursor: Option<PriceId> = None;

        loop {
            let mut params = ListPrices::new();
            params.active = Some(true);
            params.limit = Some(PAGE_SIZE);
            params.starting_after = cursor.clone();

            let page = Price::list(self.inner(), &params)
                .await
                .map_err(|err| CheckoutError::Upstream(format!("price listing failed: {err}")))?;

            for price in &page.data {
                if let Some(product) = self.resolve_price(price).await {
                    products.push(product);
                }
            }

            if !page.has_more {
                break;
            }
            cursor = page.data.last().map(|price| price.id.clone());
        }

        Ok(products)
    }
}

impl StripeClient {
    /// Map one price to a catalog product, or drop it.
    ///
    /// Entries whose parent product cannot be retrieved, or which carry
    /// no fixed amount, are left out of the snapshot and logged rather
    /// than failing the whole listing.
    async fn resolve_price(&self, price: &Price) -> Option<Product> {
        let Some(amount) = price.unit_amount else {
            tracing::warn!(price = %price.id, "skipping price without a fixed amount");
            return None;
        };
        let Some(parent) = price.product.as_ref() else {
            tracing::warn!(price = %price.id, "skipping price without a parent product");
            return None;
        };

        let parent_id = parent.id();
        match StripeProduct::retrieve(self.inner(), &parent_id, &[]).await {
            Ok(parent) => Some(Product {
                name: parent.name.unwrap_or_default(),
                sku: price.id.to_string(),
                cost: amount,
            }),
            Err(err) => {
                tracing::warn!(
                    price = %price.id,
                    error = %err,
                    "skipping price whose product fetch failed"
                );
                None
            }
        }
    }
}
