//! Directions HTTP client.
//!
//! Provides async route lookups against the Google Directions API and
//! converts the result into a [`RouteMeasurement`].

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::RouteMeasurement;

use super::convert::convert_response;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Region bias for place names.
const DEFAULT_REGION: &str = "ng";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Region code biasing ambiguous place names
    pub region: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the region bias.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
///
/// Uses a semaphore to limit concurrent requests.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    region: String,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            region: config.region,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch a driving route with traffic-aware timing, departing now.
    pub async fn get_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteMeasurement, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::Api {
                status: "CLIENT".to_string(),
                message: "semaphore closed".to_string(),
            })?;

        let url = format!("{}/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("units", "metric"),
                ("departure_time", "now"),
                ("traffic_model", "best_guess"),
                ("region", self.region.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
            })?;

        debug!(
            origin,
            destination,
            status = %parsed.status,
            routes = parsed.routes.len(),
            "directions response"
        );

        interpret_response(&parsed, origin, destination)
    }
}

/// Map the API's status field to a measurement or an error.
fn interpret_response(
    response: &DirectionsResponse,
    origin: &str,
    destination: &str,
) -> Result<RouteMeasurement, DirectionsError> {
    match response.status.as_str() {
        "OK" => convert_response(response).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
        }),
        "ZERO_RESULTS" | "NOT_FOUND" => Err(DirectionsError::NoRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }),
        "REQUEST_DENIED" => Err(DirectionsError::Unauthorized),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => Err(DirectionsError::RateLimited),
        other => Err(DirectionsError::Api {
            status: other.to_string(),
            message: response.error_message.clone().unwrap_or_default(),
        }),
    }
}
