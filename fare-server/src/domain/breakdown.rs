//! Itemized fare breakdown.

use serde::Serialize;

use super::{TimeOfDay, TripInput, VehicleType};

/// The result of quoting a trip.
///
/// Every component is populated even when it is zero, so a receipt can be
/// rendered without special-casing missing lines. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareBreakdown {
    /// Distance multiplied by the vehicle's rate.
    pub base_fare: f64,

    /// Surcharge for fuel above the reference price.
    pub fuel_adjustment: f64,

    /// Surcharge for road condition.
    pub road_adjustment: f64,

    /// Surcharge for the time-of-day band.
    pub time_adjustment: f64,

    /// Surcharge for traffic.
    pub traffic_adjustment: f64,

    /// Flat union levy.
    pub union_levy: f64,

    /// Fare payable by each passenger.
    pub subtotal_per_passenger: f64,

    /// Fare for the whole party.
    pub total_fare: f64,

    /// Echoed trip details for display.
    pub trip: TripSummary,
}

impl FareBreakdown {
    /// Sum of the four condition-driven adjustments.
    pub fn total_adjustments(&self) -> f64 {
        self.fuel_adjustment + self.road_adjustment + self.time_adjustment + self.traffic_adjustment
    }

    /// Whether more than one passenger shares the quote.
    pub fn is_group(&self) -> bool {
        self.trip.passenger_count > 1
    }
}

/// The trip fields a receipt shows alongside the fare lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub vehicle_type: VehicleType,
    pub rate_per_km: f64,
    pub distance_km: f64,
    pub fuel_price_per_liter: f64,
    pub time_of_day: TimeOfDay,
    pub road_condition_factor: f64,
    pub traffic_factor: f64,
    pub passenger_count: u32,
}

impl From<&TripInput> for TripSummary {
    fn from(input: &TripInput) -> Self {
        Self {
            vehicle_type: input.vehicle_type,
            rate_per_km: input.vehicle_type.rate_per_km(),
            distance_km: input.distance_km,
            fuel_price_per_liter: input.fuel_price_per_liter,
            time_of_day: input.time_of_day,
            road_condition_factor: input.road_condition_factor,
            traffic_factor: input.traffic_factor,
            passenger_count: input.passenger_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_echoes_trip() {
        let trip = TripInput::new(7.5, 140.0, VehicleType::Motorcycle, TimeOfDay::MorningPeak)
            .with_passenger_count(3)
            .with_road_condition_factor(1.2);

        let summary = TripSummary::from(&trip);

        assert_eq!(summary.vehicle_type, VehicleType::Motorcycle);
        assert_eq!(summary.rate_per_km, 8.0);
        assert_eq!(summary.distance_km, 7.5);
        assert_eq!(summary.fuel_price_per_liter, 140.0);
        assert_eq!(summary.time_of_day, TimeOfDay::MorningPeak);
        assert_eq!(summary.road_condition_factor, 1.2);
        assert_eq!(summary.traffic_factor, 1.0);
        assert_eq!(summary.passenger_count, 3);
    }
}
