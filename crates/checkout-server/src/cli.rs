//! Catalog CLI
//!
//! `checkout-server catalog` prints the fully resolved catalog to
//! stdout, one `sku name cost` line per product.

use checkout_core::ProductCatalog;
use checkout_stripe::StripeClient;

pub async fn print_catalog() -> anyhow::Result<()> {
    let stripe = match StripeClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let products = stripe.all_products().await?;
    for product in &products {
        println!("{product}");
    }

    Ok(())
}
