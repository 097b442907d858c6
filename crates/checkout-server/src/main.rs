//! libra-checkout HTTP Server
//!
//! One binary, three modes:
//!
//! - gateway mode (when the function host sets its marker variable):
//!   serve the checkout function over HTTP
//! - local dev server: build and serve the static site with a simulated
//!   checkout, no payment credentials required
//! - `catalog` CLI: print the resolved Stripe catalog and exit

mod cli;
mod dev;
mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{health_check, payment};

/// Set by the function host when running behind the event gateway.
const AWS_LAMBDA_FUNCTION_VERSION: &str = "AWS_LAMBDA_FUNCTION_VERSION";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    if std::env::args().nth(1).as_deref() == Some("catalog") {
        return cli::print_catalog().await;
    }

    if std::env::var_os(AWS_LAMBDA_FUNCTION_VERSION).is_some() {
        tracing::info!("gateway environment detected, serving the checkout function");
        serve_function().await
    } else {
        tracing::info!("no gateway environment, starting the local dev server");
        dev::run().await
    }
}

/// Serve the checkout function at the path the gateway exposes it under.
async fn serve_function() -> anyhow::Result<()> {
    if std::env::var_os(checkout_stripe::STRIPE_KEY_SECRET).is_some() {
        tracing::info!("✓ Stripe configured");
    } else {
        tracing::warn!(
            "⚠ {} not set - every checkout will fail",
            checkout_stripe::STRIPE_KEY_SECRET
        );
    }

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/.netlify/functions/payment", post(payment))
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 checkout function running on http://{}", addr);
    tracing::info!("  GET  /health                     - Health check");
    tracing::info!("  POST /.netlify/functions/payment - Checkout");

    axum::serve(listener, app).await?;

    Ok(())
}
