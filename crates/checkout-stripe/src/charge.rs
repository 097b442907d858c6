//! Stripe Charges
//!
//! Submits token charges through the Stripe charge API.

use async_trait::async_trait;
use stripe::{Charge, ChargeSourceParams, CreateCharge, Currency, RequestStrategy, TokenId};
use uuid::Uuid;

use checkout_core::{ChargeGateway, ChargeReceipt, ChargeRequest, CheckoutError, Result};

use crate::client::StripeClient;

#[async_trait]
impl ChargeGateway for StripeClient {
    async fn charge(&self, request: ChargeRequest) -> Result<ChargeReceipt> {
        let token: TokenId = request
            .source_token
            .parse()
            .map_err(|_| CheckoutError::Charge("malformed payment token".into()))?;
        let currency: Currency = request.currency.parse().map_err(|_| {
            CheckoutError::Charge(format!("unsupported currency {}", request.currency))
        })?;

        let mut params = CreateCharge::new();
        params.amount = Some(request.amount);
        params.currency = Some(currency);
        params.description = Some(&request.description);
        params.source = Some(ChargeSourceParams::Token(token));

        // One idempotency key per submission attempt.
        let client = self
            .inner()
            .clone()
            .with_strategy(RequestStrategy::Idempotent(Uuid::new_v4().to_string()));

        let charge = Charge::create(&client, params)
            .await
            .map_err(|err| CheckoutError::Charge(err.to_string()))?;

        Ok(ChargeReceipt {
            id: charge.id.to_string(),
            amount: charge.amount,
            currency: charge.currency.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use checkout_core::Product;

    use super::*;

    #[tokio::test]
    async fn malformed_token_fails_before_any_upstream_call() {
        let stripe = StripeClient::new("sk_test_123");
        let product = Product {
            name: "Mug".into(),
            sku: "mug".into(),
            cost: 500,
        };

        let err = stripe
            .charge(ChargeRequest::for_product(&product, "not a token"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Charge(_)));
    }
}
