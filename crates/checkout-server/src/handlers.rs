//! HTTP Handlers
//!
//! The payment function and its response synthesis. Exactly three
//! responses can leave this module: an opaque 500, the thank-you page,
//! or a 302 to the caller's callback.

use axum::{
    Json,
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

use checkout_core::{CheckoutOutcome, CheckoutWorkflow, FormBody, Result};
use checkout_stripe::StripeClient;

const THANK_YOU_BODY: &str = "<h1>Thanks for your purchase</h1>";
const ERROR_BODY: &str = "Something went wrong";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: std::env::var_os(checkout_stripe::STRIPE_KEY_SECRET).is_some(),
    })
}

/// The checkout function: one url-encoded body in, one of three
/// responses out. Failures are logged with the request context and
/// never leak detail to the caller.
pub async fn payment(body: String) -> Response {
    log_request(&body);

    match process(&body).await {
        Ok(CheckoutOutcome::ThankYou) => thank_you_response(),
        Ok(CheckoutOutcome::Redirect(url)) => redirect_response(&url),
        Err(err) => {
            tracing::error!(error = %err, "checkout failed");
            error_response()
        }
    }
}

/// Resolve configuration, then run the workflow against live Stripe.
///
/// A missing secret key fails here, before any upstream contact.
async fn process(body: &str) -> Result<CheckoutOutcome> {
    let stripe = StripeClient::from_env()?;
    CheckoutWorkflow::new(&stripe, &stripe).process(body).await
}

/// Request logging with the payment token redacted.
fn log_request(body: &str) {
    match FormBody::parse(body) {
        Ok(form) => tracing::info!(
            sku = form.get("sku").unwrap_or("-"),
            callback = form.get("callback").unwrap_or("-"),
            token_present = form.get("stripeToken").is_some(),
            "handling checkout request"
        ),
        Err(_) => tracing::info!(
            bytes = body.len(),
            "handling checkout request with undecodable body"
        ),
    }
}

fn thank_you_response() -> Response {
    (StatusCode::OK, Html(THANK_YOU_BODY)).into_response()
}

fn error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY).into_response()
}

/// A 302 with an empty body pointing at `location`.
///
/// A callback that cannot be carried in a Location header degrades to
/// the opaque error response.
pub(crate) fn redirect_response(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::FOUND;
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        Err(_) => {
            tracing::error!(callback = %location, "callback is not a usable redirect target");
            error_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn thank_you_is_200_with_the_exact_body() {
        let response = thank_you_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "<h1>Thanks for your purchase</h1>");
    }

    #[tokio::test]
    async fn error_is_an_opaque_500() {
        let response = error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Something went wrong");
    }

    #[tokio::test]
    async fn redirect_is_302_with_location_and_an_empty_body() {
        let response = redirect_response("https://example.com/x");

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/x"
        );
        assert!(body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn unusable_callback_degrades_to_the_error_response() {
        let response = redirect_response("https://example.com/\nx");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn health_response_serializes_with_stripe_flag() {
        let health = HealthResponse {
            status: "healthy",
            version: "0.1.0",
            stripe_configured: false,
        };

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["stripe_configured"], false);
    }
}
