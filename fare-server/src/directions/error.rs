//! Directions client error types.

/// Errors from the directions HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },

    /// No route exists between the two places
    #[error("no route found between {origin:?} and {destination:?}")]
    NoRoute { origin: String, destination: String },

    /// Invalid API key or key not enabled for directions
    #[error("request denied: check GOOGLE_MAPS_API_KEY")]
    Unauthorized,

    /// Quota exhausted
    #[error("rate limited by directions API")]
    RateLimited,
}
