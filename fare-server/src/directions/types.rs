//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response. Only
//! the fields used to build a route measurement are modelled; the provider
//! omits `duration_in_traffic` when no departure time was requested.

use serde::Deserialize;

/// Top-level response from the `directions/json` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `NOT_FOUND`, `REQUEST_DENIED`, ...
    pub status: String,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,

    /// Extra detail accompanying a non-OK status.
    pub error_message: Option<String>,
}

/// A single route between origin and destination.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    pub summary: Option<String>,

    /// One leg per origin/waypoint/destination pair.
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// A leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub distance: TextValue,
    pub duration: TextValue,

    /// Present when the request asked for traffic-aware timing.
    pub duration_in_traffic: Option<TextValue>,

    pub start_address: Option<String>,
    pub end_address: Option<String>,

    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

/// A single manoeuvre within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsStep {
    pub distance: TextValue,

    /// Instruction text with HTML markup, e.g. `Turn <b>left</b> onto <b>Allen Avenue</b>`.
    #[serde(default)]
    pub html_instructions: String,
}

/// A measured value with its localized text form.
///
/// `value` is metres for distances and seconds for durations.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: f64,
    #[serde(default)]
    pub text: String,
}
