//! Domain types for the fare quoting service.
//!
//! This module contains the value types flowing between the route
//! classifier and the fare engine. They carry no I/O and no shared state.

mod breakdown;
mod error;
mod route;
mod time_of_day;
mod trip;
mod vehicle;

pub use breakdown::{FareBreakdown, TripSummary};
pub use error::FareError;
pub use route::{
    RoadKind, RoadSegment, RoadTier, RouteConditions, RouteMeasurement, TrafficTier,
};
pub use time_of_day::{TimeOfDay, UnknownTimeOfDay};
pub use trip::{DEFAULT_UNION_LEVY, TripInput};
pub use vehicle::{UnknownVehicleType, VehicleType};
