//! Domain error types.
//!
//! These errors represent contract violations reaching the pure fare and
//! classification functions. They are distinct from the user-facing
//! validation errors, which are accumulated rather than returned early.

/// Errors from the fare engine and the route classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// A trip input is outside the domain the engine accepts
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A route measurement cannot be classified
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FareError::InvalidInput("distance must be positive".into());
        assert_eq!(err.to_string(), "invalid input: distance must be positive");

        let err = FareError::InvalidMeasurement("route has no segments".into());
        assert_eq!(err.to_string(), "invalid measurement: route has no segments");
    }
}
