//! Catalog Product Model

use serde::{Deserialize, Serialize};

/// A sellable product, as resolved from the processor's catalog.
///
/// Transient: fetched fresh on every lookup, never cached or persisted.
/// Identity is SKU string equality, nothing more.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name of the parent product
    pub name: String,

    /// Stock-keeping unit identifier
    pub sku: String,

    /// Price in minor currency units (cents)
    pub cost: i64,
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.sku, self.name, self.cost)
    }
}
