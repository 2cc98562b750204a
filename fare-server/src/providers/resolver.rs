//! Route resolution with fallback.

use serde::Serialize;
use tracing::{info, warn};

use crate::classify::classify_route;
use crate::domain::{RouteConditions, RouteMeasurement};

use super::{MeasurementProvider, ProviderError};

/// Which provider produced a route analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// Measured by the primary provider.
    Live,
    /// Produced by the fallback after the primary was missing or failed.
    Estimated,
}

/// A resolved and classified route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnalysis {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub duration_mins: f64,
    pub duration_in_traffic_mins: f64,
    pub conditions: RouteConditions,
    pub source: RouteSource,
}

impl RouteAnalysis {
    fn new(
        origin: &str,
        destination: &str,
        measurement: &RouteMeasurement,
        conditions: RouteConditions,
        source: RouteSource,
    ) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance_km: measurement.distance_km(),
            duration_mins: measurement.duration_mins(),
            duration_in_traffic_mins: measurement.duration_in_traffic_seconds / 60.0,
            conditions,
            source,
        }
    }
}

/// Resolves routes from a primary provider, falling back to a secondary one.
///
/// The fallback is used when no primary is configured, when the primary
/// fails, or when its measurement cannot be classified.
pub struct RouteResolver<P, F> {
    primary: Option<P>,
    fallback: F,
}

impl<P: MeasurementProvider, F: MeasurementProvider> RouteResolver<P, F> {
    pub fn new(primary: Option<P>, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Measure and classify the route between two places.
    pub async fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteAnalysis, ProviderError> {
        if let Some(primary) = &self.primary {
            match primary.measure(origin, destination).await {
                Ok(measurement) => match classify_route(&measurement) {
                    Ok(conditions) => {
                        info!(origin, destination, "resolved live route");
                        return Ok(RouteAnalysis::new(
                            origin,
                            destination,
                            &measurement,
                            conditions,
                            RouteSource::Live,
                        ));
                    }
                    Err(e) => {
                        warn!(origin, destination, error = %e, "live route unusable, using estimate");
                    }
                },
                Err(e) => {
                    warn!(origin, destination, error = %e, "route lookup failed, using estimate");
                }
            }
        }

        let measurement = self.fallback.measure(origin, destination).await?;
        let conditions = classify_route(&measurement)?;

        info!(origin, destination, "resolved estimated route");
        Ok(RouteAnalysis::new(
            origin,
            destination,
            &measurement,
            conditions,
            RouteSource::Estimated,
        ))
    }
}
