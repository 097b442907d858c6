//! # checkout-stripe
//!
//! Stripe-backed implementations of the checkout seams:
//!
//! - [`ProductCatalog`](checkout_core::ProductCatalog) — pages the price
//!   listing and retrieves each price's parent product
//! - [`ChargeGateway`](checkout_core::ChargeGateway) — token charges
//!   with per-submission idempotency keys
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::CheckoutWorkflow;
//! use checkout_stripe::StripeClient;
//!
//! let stripe = StripeClient::from_env()?;
//! let outcome = CheckoutWorkflow::new(&stripe, &stripe).process(body).await?;
//! ```

mod catalog;
mod charge;
mod client;

pub use client::{STRIPE_KEY_SECRET, StripeClient};
