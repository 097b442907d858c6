//! Payment Gateway
//!
//! Charge submission seam and the request/receipt types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::product::Product;

/// Fixed settlement currency.
pub const CURRENCY: &str = "usd";

/// A single charge to submit against a funding token.
///
/// Derived entirely from a resolved product and the caller's token; no
/// independent lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount in minor currency units
    pub amount: i64,

    /// ISO currency code (always [`CURRENCY`])
    pub currency: String,

    /// Human-readable statement line
    pub description: String,

    /// Opaque funding token supplied by the caller
    pub source_token: String,
}

impl ChargeRequest {
    /// Build the charge for a resolved product.
    pub fn for_product(product: &Product, token: &str) -> Self {
        Self {
            amount: product.cost,
            currency: CURRENCY.into(),
            description: format!("Charge for {}", product.name),
            source_token: token.to_string(),
        }
    }
}

/// Processor confirmation of a captured charge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChargeReceipt {
    /// Processor-assigned charge id
    pub id: String,

    /// Captured amount in minor currency units
    pub amount: i64,

    /// Settlement currency
    pub currency: String,
}

/// Charge submission seam.
#[async_trait]
pub trait ChargeGateway: Send + Sync {
    /// Submit a charge. No retries; the first processor answer is final.
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeReceipt>;
}
