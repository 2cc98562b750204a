//! Directions provider client.
//!
//! Resolves an origin/destination pair into a [`RouteMeasurement`] using the
//! Google Directions API.
//!
//! Key characteristics of the API:
//! - Errors are reported in a `status` field of an HTTP 200 response
//! - Traffic-aware timing (`duration_in_traffic`) is only returned when a
//!   departure time is requested
//! - Step instructions are HTML; road categories are inferred from their text
//!
//! [`RouteMeasurement`]: crate::domain::RouteMeasurement

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{ConversionError, convert_leg, convert_response, strip_markup};
pub use error::DirectionsError;
pub use types::{DirectionsLeg, DirectionsResponse, DirectionsRoute, DirectionsStep, TextValue};
