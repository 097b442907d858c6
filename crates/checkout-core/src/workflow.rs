//! Checkout Workflow
//!
//! The sequential pipeline behind the payment endpoint: decode the
//! body, resolve the product, charge the token, pick the response.

use crate::catalog::ProductCatalog;
use crate::error::Result;
use crate::form::FormBody;
use crate::gateway::{ChargeGateway, ChargeRequest};

/// Successful checkout result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// No callback supplied: show the thank-you page.
    ThankYou,

    /// Redirect the buyer to their callback URL.
    Redirect(String),
}

/// Short-circuiting checkout pipeline over the catalog and gateway
/// seams. The first failing step aborts the rest; nothing after the
/// charge can fail, so a captured charge is never followed by an error
/// response.
pub struct CheckoutWorkflow<'a> {
    catalog: &'a dyn ProductCatalog,
    gateway: &'a dyn ChargeGateway,
}

impl<'a> CheckoutWorkflow<'a> {
    pub fn new(catalog: &'a dyn ProductCatalog, gateway: &'a dyn ChargeGateway) -> Self {
        Self { catalog, gateway }
    }

    /// Run one checkout over a raw url-encoded body.
    pub async fn process(&self, body: &str) -> Result<CheckoutOutcome> {
        let form = FormBody::parse(body)?;

        // An empty or missing token is not rejected here; the processor
        // is the authority on token validity.
        let token = form.get("stripeToken").unwrap_or_default();
        let sku = form.get("sku").unwrap_or_default();

        let product = self.catalog.find_by_sku(sku).await?;
        let receipt = self
            .gateway
            .charge(ChargeRequest::for_product(&product, token))
            .await?;

        tracing::info!(
            charge_id = %receipt.id,
            sku = %product.sku,
            amount = receipt.amount,
            "charge accepted"
        );

        // Literal absence (or an empty value) selects the thank-you
        // page; only a real callback produces a redirect.
        match form.get("callback") {
            Some(url) if !url.is_empty() => Ok(CheckoutOutcome::Redirect(url.to_string())),
            _ => Ok(CheckoutOutcome::ThankYou),
        }
    }
}
