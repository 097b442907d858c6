//! Local Dev Server
//!
//! Developer loop without live payment credentials: build the static
//! site once, serve the build output, and fake the checkout outcome
//! with a redirect. Shares nothing with the real checkout workflow.

use axum::{Router, response::Response, routing::any};
use tokio::process::Command;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::redirect_response;

/// Fixed local address.
const DEV_ADDR: &str = "127.0.0.1:4000";

/// Static site build output, served at the root.
const BUILD_DIR: &str = "build";

pub async fn run() -> anyhow::Result<()> {
    build_site().await;

    let listener = tokio::net::TcpListener::bind(DEV_ADDR).await?;
    tracing::info!("listening at http://{DEV_ADDR}");

    axum::serve(listener, router()).await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/.netlify/functions/payment", any(simulated_payment))
        .fallback_service(ServeDir::new(BUILD_DIR))
        .layer(TraceLayer::new_for_http())
}

/// Stand-in for the checkout function: every purchase succeeds.
async fn simulated_payment() -> Response {
    redirect_response("/thanks")
}

/// Run the site generator once; failures are logged and ignored.
async fn build_site() {
    tracing::info!("building static site first");

    match Command::new("middleman").arg("build").status().await {
        Ok(status) if status.success() => tracing::info!("site build finished"),
        Ok(status) => tracing::warn!(%status, "site build failed"),
        Err(err) => tracing::warn!(error = %err, "site build could not be started"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn payment_route_redirects_to_thanks() {
        let request = Request::builder()
            .method("POST")
            .uri("/.netlify/functions/payment")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/thanks");
    }

    #[tokio::test]
    async fn payment_route_accepts_any_method() {
        let request = Request::builder()
            .method("GET")
            .uri("/.netlify/functions/payment")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
    }
}
