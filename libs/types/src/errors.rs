//! Boundary rejection taxonomy
//!
//! The engine itself never errors on business input: duplicate adds are
//! no-ops and unknown cancels return `false`. These errors exist for the
//! transport boundary, which must reject payloads the engine would otherwise
//! have to silently swallow.

use thiserror::Error;

/// Why an order submission was rejected before reaching the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderRejectError {
    #[error("invalid quantity: must be greater than zero")]
    InvalidQuantity,

    #[error("invalid price: limit orders require a non-zero price")]
    InvalidPrice,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_error_display() {
        assert_eq!(
            OrderRejectError::InvalidQuantity.to_string(),
            "invalid quantity: must be greater than zero"
        );
        assert!(OrderRejectError::MalformedPayload("bad json".into())
            .to_string()
            .contains("bad json"));
    }
}
