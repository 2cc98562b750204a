//! Fare computation engine.
//!
//! Turns a [`TripInput`] into an itemized [`FareBreakdown`]. Validation is
//! kept separate from computation: user-correctable problems are collected
//! by [`validate_inputs`], and [`compute_fare`] either fully succeeds or
//! returns a contract violation.

mod engine;
mod validate;

use crate::domain::{FareBreakdown, FareError, TripInput};

pub use engine::{
    FUEL_PRICE_STEP, FUEL_REFERENCE_PRICE, FUEL_SURCHARGE_PER_STEP, base_fare, compute_fare,
    fuel_adjustment,
};
pub use validate::{ValidationError, validate_inputs};

/// Error from quoting a trip end to end.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    /// The trip failed user-facing validation
    #[error("{} validation error(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    /// The engine rejected the trip
    #[error(transparent)]
    Fare(#[from] FareError),
}

/// Validate a trip and, if it passes, compute its fare.
pub fn quote(input: &TripInput) -> Result<FareBreakdown, QuoteError> {
    let errors = validate_inputs(input);
    if !errors.is_empty() {
        return Err(QuoteError::Invalid(errors));
    }
    Ok(compute_fare(input)?)
}
