//! Stripe Client Wrapper

use stripe::Client;

use checkout_core::{CheckoutError, Result};

/// Environment variable holding the processor secret key.
pub const STRIPE_KEY_SECRET: &str = "STRIPE_KEY_SECRET";

/// Thin wrapper around the Stripe SDK client.
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a client for the given secret key.
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from the process environment.
    ///
    /// Fails with a configuration error when `STRIPE_KEY_SECRET` is
    /// unset, before any upstream contact.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var(STRIPE_KEY_SECRET)
            .map_err(|_| CheckoutError::Config(format!("{STRIPE_KEY_SECRET} not set")))?;

        Ok(Self::new(&secret_key))
    }

    /// Get the underlying Stripe client.
    pub(crate) fn inner(&self) -> &Client {
        &self.client
    }
}
