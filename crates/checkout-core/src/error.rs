//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout pipeline errors
///
/// Every variant is caught at the endpoint boundary and collapsed into
/// one opaque 500 response; the detail only ever reaches the logs.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Required configuration missing (secret key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// SKU has no match in the catalog
    #[error("sku {0} not found")]
    NotFound(String),

    /// Processor rejected or failed the charge
    #[error("Charge error: {0}")]
    Charge(String),

    /// Catalog or product retrieval failed
    #[error("Upstream error: {0}")]
    Upstream(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_sku() {
        let err = CheckoutError::NotFound("towel".into());
        assert_eq!(err.to_string(), "sku towel not found");
    }
}
