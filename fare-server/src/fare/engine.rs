//! Fare computation.
//!
//! Each step is a pure function of the trip input. Later steps scale the
//! base fare, so the base fare is always computed first.

use tracing::debug;

use crate::domain::{FareBreakdown, FareError, TripInput, TripSummary, VehicleType};

/// Fuel price at or below which no surcharge applies.
pub const FUEL_REFERENCE_PRICE: f64 = 100.0;

/// Price increase above the reference that adds one surcharge step.
pub const FUEL_PRICE_STEP: f64 = 50.0;

/// Fraction of the base fare added per fuel price step.
pub const FUEL_SURCHARGE_PER_STEP: f64 = 0.1;

/// Distance multiplied by the vehicle's rate.
pub fn base_fare(distance_km: f64, vehicle_type: VehicleType) -> Result<f64, FareError> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(FareError::InvalidInput(format!(
            "distance must be positive, got {distance_km}"
        )));
    }
    Ok(distance_km * vehicle_type.rate_per_km())
}

/// Surcharge for fuel priced above the reference price.
///
/// Grows linearly with the price: zero at the reference price, 10% of the
/// base fare at 150, with no upper cap.
pub fn fuel_adjustment(base_fare: f64, fuel_price_per_liter: f64) -> f64 {
    if fuel_price_per_liter > FUEL_REFERENCE_PRICE {
        let surcharge_rate = ((fuel_price_per_liter - FUEL_REFERENCE_PRICE) / FUEL_PRICE_STEP)
            * FUEL_SURCHARGE_PER_STEP;
        base_fare * surcharge_rate
    } else {
        0.0
    }
}

/// Surcharge for a condition multiplier that must be at least 1.0.
fn factor_adjustment(base_fare: f64, factor: f64, name: &str) -> Result<f64, FareError> {
    if !factor.is_finite() || factor < 1.0 {
        return Err(FareError::InvalidInput(format!(
            "{name} must be at least 1.0, got {factor}"
        )));
    }
    Ok(base_fare * (factor - 1.0))
}

/// Quote a trip.
///
/// Intended to be called once [`validate_inputs`](super::validate_inputs)
/// reports no errors. Contract violations that validation does not cover
/// (road or traffic factor below 1.0, negative levy) are rejected here.
pub fn compute_fare(input: &TripInput) -> Result<FareBreakdown, FareError> {
    let base_fare = base_fare(input.distance_km, input.vehicle_type)?;

    if !input.fuel_price_per_liter.is_finite() {
        return Err(FareError::InvalidInput(format!(
            "fuel price must be finite, got {}",
            input.fuel_price_per_liter
        )));
    }
    let fuel_adjustment = fuel_adjustment(base_fare, input.fuel_price_per_liter);

    let road_adjustment =
        factor_adjustment(base_fare, input.road_condition_factor, "road condition factor")?;

    let time_adjustment = base_fare * (input.time_of_day.multiplier() - 1.0);

    let traffic_adjustment = factor_adjustment(base_fare, input.traffic_factor, "traffic factor")?;

    if !input.union_levy.is_finite() || input.union_levy < 0.0 {
        return Err(FareError::InvalidInput(format!(
            "union levy must be non-negative, got {}",
            input.union_levy
        )));
    }

    if input.passenger_count == 0 {
        return Err(FareError::InvalidInput(
            "passenger count must be at least 1".to_string(),
        ));
    }

    let subtotal_per_passenger = base_fare
        + fuel_adjustment
        + road_adjustment
        + time_adjustment
        + traffic_adjustment
        + input.union_levy;
    let total_fare = subtotal_per_passenger * f64::from(input.passenger_count);

    debug!(
        vehicle = %input.vehicle_type,
        distance_km = input.distance_km,
        passengers = input.passenger_count,
        total_fare,
        "computed fare"
    );

    Ok(FareBreakdown {
        base_fare,
        fuel_adjustment,
        road_adjustment,
        time_adjustment,
        traffic_adjustment,
        union_levy: input.union_levy,
        subtotal_per_passenger,
        total_fare,
        trip: TripSummary::from(input),
    })
}
