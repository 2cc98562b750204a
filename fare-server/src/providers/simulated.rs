//! Simulated route measurements for when no directions provider is available.

use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::prelude::*;

use crate::domain::{RoadKind, RoadSegment, RouteMeasurement};

use super::{MeasurementProvider, ProviderError};

/// In-traffic duration as a multiple of free-flow duration.
const CONGESTION_RANGE: RangeInclusive<f64> = 1.0..=1.8;

const ROAD_KINDS: [RoadKind; 4] = [
    RoadKind::Highway,
    RoadKind::MajorStreet,
    RoadKind::MinorStreet,
    RoadKind::Unclassified,
];

/// Produces plausible random routes.
///
/// Distances fall between 5 and 55 km, free-flow time is 2.5 minutes per
/// kilometre and congestion adds up to 80%, enough to reach every traffic
/// tier. Seed it for reproducible measurements.
pub struct SimulatedRouteProvider {
    rng: Mutex<StdRng>,
}

impl SimulatedRouteProvider {
    /// Create a provider with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a provider seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Draw a random route measurement.
    pub fn draw(&self) -> RouteMeasurement {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let distance_km: f64 = rng.gen_range(5.0..55.0);
        let duration_seconds = distance_km * 2.5 * 60.0;
        let congestion: f64 = rng.gen_range(CONGESTION_RANGE);

        let segment_count = rng.gen_range(1..=6);
        let weights: Vec<f64> = (0..segment_count).map(|_| rng.gen_range(0.2..1.0)).collect();
        let weight_sum: f64 = weights.iter().sum();
        let distance_meters = distance_km * 1000.0;

        let segments = weights
            .iter()
            .map(|w| {
                let kind = ROAD_KINDS[rng.gen_range(0..ROAD_KINDS.len())];
                RoadSegment::new(distance_meters * w / weight_sum, kind)
            })
            .collect();

        RouteMeasurement {
            distance_meters,
            duration_seconds,
            duration_in_traffic_seconds: duration_seconds * congestion,
            segments,
        }
    }
}

impl Default for SimulatedRouteProvider {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MeasurementProvider for SimulatedRouteProvider {
    async fn measure(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> Result<RouteMeasurement, ProviderError> {
        Ok(self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_route;
    use crate::domain::TrafficTier;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_route() {
        let a = SimulatedRouteProvider::with_seed(42);
        let b = SimulatedRouteProvider::with_seed(42);
        assert_eq!(a.draw(), b.draw());
        assert_eq!(a.draw(), b.draw());
    }

    #[test]
    fn draws_are_within_ranges() {
        let provider = SimulatedRouteProvider::with_seed(7);
        for _ in 0..200 {
            let m = provider.draw();
            assert!((5_000.0..55_000.0).contains(&m.distance_meters));
            assert!((m.duration_seconds - m.distance_km() * 150.0).abs() < 1e-6);
            assert!(m.duration_in_traffic_seconds >= m.duration_seconds);
            assert!(m.duration_in_traffic_seconds <= m.duration_seconds * 1.8 + 1e-6);
            assert!((1..=6).contains(&m.segments.len()));

            let total: f64 = m.segments.iter().map(|s| s.length_meters).sum();
            assert!((total - m.distance_meters).abs() < 1e-6);
        }
    }

    #[test]
    fn draws_always_classify() {
        let provider = SimulatedRouteProvider::with_seed(99);
        for _ in 0..200 {
            assert!(classify_route(&provider.draw()).is_ok());
        }
    }

    #[test]
    fn every_traffic_tier_occurs() {
        let tiers: HashSet<TrafficTier> = (0..200)
            .map(|seed| {
                let m = SimulatedRouteProvider::with_seed(seed).draw();
                classify_route(&m).unwrap().traffic_tier
            })
            .collect();

        assert!(tiers.contains(&TrafficTier::Light));
        assert!(tiers.contains(&TrafficTier::Moderate));
        assert!(tiers.contains(&TrafficTier::Heavy));
    }

    #[tokio::test]
    async fn measure_ignores_place_names() {
        let a = SimulatedRouteProvider::with_seed(1);
        let b = SimulatedRouteProvider::with_seed(1);
        let from_a = a.measure("Ikeja, Lagos", "Abuja, FCT").await.unwrap();
        let from_b = b.measure("anywhere", "else").await.unwrap();
        assert_eq!(from_a, from_b);
    }
}
