//! Conversion from directions DTOs to route measurements.

use crate::domain::{RoadKind, RoadSegment, RouteMeasurement};

use super::types::{DirectionsLeg, DirectionsResponse};

/// Error converting a directions response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The response contained no routes
    #[error("response contains no routes")]
    NoRoutes,

    /// The first route contained no legs
    #[error("route contains no legs")]
    NoLegs,
}

/// Convert the first leg of the best route into a measurement.
pub fn convert_response(response: &DirectionsResponse) -> Result<RouteMeasurement, ConversionError> {
    let route = response.routes.first().ok_or(ConversionError::NoRoutes)?;
    let leg = route.legs.first().ok_or(ConversionError::NoLegs)?;
    Ok(convert_leg(leg))
}

/// Convert a single leg into a measurement.
///
/// Missing traffic timing falls back to the free-flow duration. The
/// in-traffic duration is never reported below the free-flow duration.
pub fn convert_leg(leg: &DirectionsLeg) -> RouteMeasurement {
    let duration_seconds = leg.duration.value;
    let duration_in_traffic_seconds = leg
        .duration_in_traffic
        .as_ref()
        .map(|d| d.value)
        .unwrap_or(duration_seconds)
        .max(duration_seconds);

    let segments = leg
        .steps
        .iter()
        .map(|step| {
            let instruction = strip_markup(&step.html_instructions);
            RoadSegment::new(step.distance.value, RoadKind::from_instruction(&instruction))
        })
        .collect();

    RouteMeasurement {
        distance_meters: leg.distance.value,
        duration_seconds,
        duration_in_traffic_seconds,
        segments,
    }
}

/// Remove HTML tags and decode the few entities the provider emits.
///
/// Tags are replaced by a space so that adjacent words stay separate.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
        .replace("&quot;", "\"");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
