//! Trip input value object.

use serde::Serialize;

use super::{TimeOfDay, VehicleType};

/// Flat levy added to every per-passenger subtotal unless overridden.
pub const DEFAULT_UNION_LEVY: f64 = 10.0;

/// Everything the fare engine needs to quote a single trip.
///
/// Built fresh for each quote and handed to the engine by reference; the
/// engine never mutates it.
///
/// # Examples
///
/// ```
/// use fare_server::domain::{TimeOfDay, TripInput, VehicleType};
///
/// let trip = TripInput::new(12.5, 160.0, VehicleType::Taxi, TimeOfDay::Night)
///     .with_traffic_factor(1.3)
///     .with_passenger_count(2);
///
/// assert_eq!(trip.road_condition_factor, 1.0);
/// assert_eq!(trip.union_levy, 10.0);
/// assert_eq!(trip.passenger_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripInput {
    /// Trip distance in kilometres.
    pub distance_km: f64,

    /// Fuel price per litre.
    pub fuel_price_per_liter: f64,

    /// Vehicle the trip is quoted for.
    pub vehicle_type: VehicleType,

    /// Road condition multiplier (1.0 = good roads).
    pub road_condition_factor: f64,

    /// Time-of-day band the trip starts in.
    pub time_of_day: TimeOfDay,

    /// Traffic multiplier (1.0 = free flow).
    pub traffic_factor: f64,

    /// Number of passengers sharing the quote.
    pub passenger_count: u32,

    /// Flat levy included in each passenger's subtotal.
    pub union_levy: f64,
}

impl TripInput {
    /// Create a trip with neutral road and traffic factors, one passenger
    /// and the default union levy.
    pub fn new(
        distance_km: f64,
        fuel_price_per_liter: f64,
        vehicle_type: VehicleType,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self {
            distance_km,
            fuel_price_per_liter,
            vehicle_type,
            road_condition_factor: 1.0,
            time_of_day,
            traffic_factor: 1.0,
            passenger_count: 1,
            union_levy: DEFAULT_UNION_LEVY,
        }
    }

    /// Set the road condition multiplier.
    pub fn with_road_condition_factor(mut self, factor: f64) -> Self {
        self.road_condition_factor = factor;
        self
    }

    /// Set the traffic multiplier.
    pub fn with_traffic_factor(mut self, factor: f64) -> Self {
        self.traffic_factor = factor;
        self
    }

    /// Set the passenger count.
    pub fn with_passenger_count(mut self, count: u32) -> Self {
        self.passenger_count = count;
        self
    }

    /// Set the union levy.
    pub fn with_union_levy(mut self, levy: f64) -> Self {
        self.union_levy = levy;
        self
    }
}
