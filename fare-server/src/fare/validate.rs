//! User-facing validation of trip inputs.
//!
//! Validation runs before the engine and reports every problem at once so
//! the user can correct the form in one pass.

use crate::domain::TripInput;

/// A user-correctable problem with the trip inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Distance is missing, zero or negative
    #[error("Please get route analysis first or enter a valid distance")]
    InvalidDistance,

    /// Fuel price is missing, zero or negative
    #[error("Please enter fuel price or get current price")]
    InvalidFuelPrice,

    /// No vehicle type selected
    #[error("Please select a vehicle type")]
    MissingVehicleType,

    /// Vehicle type not in the rate table
    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    /// No time of day selected
    #[error("Please select a time of day")]
    MissingTimeOfDay,

    /// Time of day not one of the known bands
    #[error("Unknown time of day: {0}")]
    UnknownTimeOfDay(String),

    /// Passenger count below one
    #[error("Number of passengers must be greater than 0")]
    InvalidPassengerCount,

    /// A numeric field could not be read
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
}

/// Check the user-correctable rules on a trip.
///
/// Returns an empty list when the trip can be quoted. Vehicle type and time
/// of day are typed, so they are checked where raw text becomes a
/// [`TripInput`]. Road and traffic factor bounds are enforced by the engine.
pub fn validate_inputs(input: &TripInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Negated comparisons also catch NaN
    if !(input.distance_km > 0.0) {
        errors.push(ValidationError::InvalidDistance);
    }

    if !(input.fuel_price_per_liter > 0.0) {
        errors.push(ValidationError::InvalidFuelPrice);
    }

    if input.passenger_count < 1 {
        errors.push(ValidationError::InvalidPassengerCount);
    }

    errors
}
