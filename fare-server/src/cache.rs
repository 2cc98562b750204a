//! Caching layer for directions lookups.
//!
//! Route lookups are billed per request and the same origin/destination pairs
//! recur constantly, so measurements are cached for a short TTL. Traffic
//! changes over the day, which bounds how long an entry stays useful.
//!
//! Keys are normalised (trimmed, lowercased) place names, so "Ikeja, Lagos"
//! and " ikeja, lagos" share an entry.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::directions::{DirectionsClient, DirectionsError};
use crate::domain::RouteMeasurement;
use crate::providers::{MeasurementProvider, ProviderError};

/// Cache key for routes: (origin, destination), normalised.
type RouteKey = (String, String);

/// Cached route entry.
type RouteEntry = Arc<RouteMeasurement>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl CacheConfig {
    /// Set the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the maximum number of entries.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Normalise a pair of place names into a cache key.
fn route_key(origin: &str, destination: &str) -> RouteKey {
    (
        origin.trim().to_lowercase(),
        destination.trim().to_lowercase(),
    )
}

/// Cache for route measurements.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached route.
    pub async fn get(&self, origin: &str, destination: &str) -> Option<RouteEntry> {
        self.routes.get(&route_key(origin, destination)).await
    }

    /// Insert a route into the cache.
    pub async fn insert(&self, origin: &str, destination: &str, entry: RouteEntry) {
        self.routes
            .insert(route_key(origin, destination), entry)
            .await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }

    /// Flush pending maintenance so counts are current.
    pub async fn sync(&self) {
        self.routes.run_pending_tasks().await;
    }
}

/// Directions client with caching.
///
/// Wraps a `DirectionsClient` and caches route measurements. Failed lookups
/// are not cached.
pub struct CachedDirectionsClient {
    client: DirectionsClient,
    cache: RouteCache,
}

impl CachedDirectionsClient {
    /// Create a new cached client.
    pub fn new(client: DirectionsClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Get a route, using the cache if available.
    pub async fn get_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteEntry, DirectionsError> {
        if let Some(cached) = self.cache.get(origin, destination).await {
            debug!(origin, destination, "route cache hit");
            return Ok(cached);
        }

        let measurement = Arc::new(self.client.get_route(origin, destination).await?);
        self.cache
            .insert(origin, destination, measurement.clone())
            .await;

        Ok(measurement)
    }
}

impl MeasurementProvider for CachedDirectionsClient {
    async fn measure(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteMeasurement, ProviderError> {
        let entry = self.get_route(origin, destination).await?;
        Ok(RouteMeasurement::clone(&entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoadKind, RoadSegment};

    fn measurement(km: f64) -> RouteEntry {
        Arc::new(RouteMeasurement {
            distance_meters: km * 1000.0,
            duration_seconds: km * 150.0,
            duration_in_traffic_seconds: km * 180.0,
            segments: vec![RoadSegment::new(km * 1000.0, RoadKind::MajorStreet)],
        })
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn config_builders() {
        let config = CacheConfig::default()
            .with_ttl(Duration::from_secs(5))
            .with_max_capacity(10);
        assert_eq!(config.ttl, Duration::from_secs(5));
        assert_eq!(config.max_capacity, 10);
    }

    #[test]
    fn keys_are_normalised() {
        assert_eq!(
            route_key("  Ikeja, Lagos ", "ABUJA, FCT"),
            ("ikeja, lagos".to_string(), "abuja, fct".to_string())
        );
    }

    #[tokio::test]
    async fn cache_starts_empty() {
        let cache = RouteCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
        assert!(cache.get("a", "b").await.is_none());
    }

    #[tokio::test]
    async fn insert_then_get_ignores_case_and_whitespace() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert("Ikeja, Lagos", "Lekki", measurement(12.0)).await;

        let hit = cache.get(" ikeja, lagos", "LEKKI ").await.unwrap();
        assert_eq!(hit.distance_meters, 12_000.0);
    }

    #[tokio::test]
    async fn direction_matters() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert("Kano", "Kaduna", measurement(200.0)).await;

        assert!(cache.get("Kaduna", "Kano").await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears_entries() {
        let cache = RouteCache::new(&CacheConfig::default());
        cache.insert("a", "b", measurement(1.0)).await;
        cache.insert("c", "d", measurement(2.0)).await;
        cache.sync().await;
        assert_eq!(cache.entry_count(), 2);

        cache.invalidate_all();
        assert!(cache.get("a", "b").await.is_none());
    }
}
