//! Traffic classification from free-flow and in-traffic durations.

use crate::domain::{FareError, TrafficTier};

use super::tier::{RouteMetric, TRAFFIC_TIERS, Tiered};

/// Classify traffic by the ratio of in-traffic to free-flow duration.
///
/// The factor is quantized to three tiers rather than using the raw ratio.
/// Fails if the free-flow duration is not strictly positive or either
/// duration is not a finite, non-negative number.
pub fn classify_traffic(
    duration_seconds: f64,
    duration_in_traffic_seconds: f64,
) -> Result<Tiered<TrafficTier>, FareError> {
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(FareError::InvalidMeasurement(format!(
            "duration must be positive, got {duration_seconds}"
        )));
    }

    if !duration_in_traffic_seconds.is_finite() || duration_in_traffic_seconds < 0.0 {
        return Err(FareError::InvalidMeasurement(format!(
            "duration in traffic must be non-negative, got {duration_in_traffic_seconds}"
        )));
    }

    let ratio = duration_in_traffic_seconds / duration_seconds;

    Ok(TRAFFIC_TIERS.classify(|metric| match metric {
        RouteMetric::CongestionRatio => ratio,
        _ => 0.0,
    }))
}
