//! Route condition classifier.
//!
//! Turns raw route telemetry into the traffic and road multipliers the fare
//! engine consumes. Both multipliers are quantized to discrete tiers so that
//! a quote stays stable under noisy measurements.

mod road;
mod tier;
mod traffic;

use tracing::debug;

use crate::domain::{FareError, RouteConditions, RouteMeasurement};

pub use road::{RoadShares, classify_road_quality};
pub use tier::{Bound, ROAD_TIERS, RouteMetric, TRAFFIC_TIERS, TierRule, TierTable, Tiered};
pub use traffic::classify_traffic;

/// Classify a measured route into traffic and road conditions.
pub fn classify_route(measurement: &RouteMeasurement) -> Result<RouteConditions, FareError> {
    let traffic = classify_traffic(
        measurement.duration_seconds,
        measurement.duration_in_traffic_seconds,
    )?;
    let road = classify_road_quality(&measurement.segments)?;

    debug!(
        traffic_factor = traffic.factor,
        road_factor = road.factor,
        segments = measurement.segments.len(),
        "classified route"
    );

    Ok(RouteConditions {
        traffic_factor: traffic.factor,
        traffic_tier: traffic.tier,
        road_factor: road.factor,
        road_tier: road.tier,
    })
}
