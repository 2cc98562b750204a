//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_UNION_LEVY, TimeOfDay, TripInput, VehicleType};
use crate::fare::{ValidationError, validate_inputs};

/// A numeric field as submitted.
///
/// JSON clients send numbers; HTML forms send text. Both shapes are
/// accepted so one request type serves both endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// The numeric value, `None` for blank text, or the unparseable text.
    fn value(&self) -> Result<Option<f64>, String> {
        match self {
            NumberOrText::Number(n) => Ok(Some(*n)),
            NumberOrText::Text(s) if s.trim().is_empty() => Ok(None),
            NumberOrText::Text(s) => s.trim().parse().map(Some).map_err(|_| s.clone()),
        }
    }
}

/// Request to quote a fare, from the JSON API or the HTML form.
///
/// Every field is optional at this level so that missing values can be
/// reported as validation errors instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteRequest {
    /// Trip distance in kilometres
    #[serde(default)]
    pub distance_km: Option<NumberOrText>,

    /// Fuel price per litre
    #[serde(default)]
    pub fuel_price_per_liter: Option<NumberOrText>,

    /// Vehicle type name, e.g. "Taxi"
    #[serde(default)]
    pub vehicle_type: Option<String>,

    /// Time-of-day band, e.g. "Morning_Peak"
    #[serde(default)]
    pub time_of_day: Option<String>,

    /// Road condition multiplier (defaults to 1.0)
    #[serde(default)]
    pub road_condition_factor: Option<NumberOrText>,

    /// Traffic multiplier (defaults to 1.0)
    #[serde(default)]
    pub traffic_factor: Option<NumberOrText>,

    /// Number of passengers (defaults to 1)
    #[serde(default)]
    pub passenger_count: Option<NumberOrText>,

    /// Union levy (defaults to 10)
    #[serde(default)]
    pub union_levy: Option<NumberOrText>,

    /// Origin, echoed on receipts
    #[serde(default)]
    pub origin: Option<String>,

    /// Destination, echoed on receipts
    #[serde(default)]
    pub destination: Option<String>,
}

impl QuoteRequest {
    /// Convert the raw request into a trip, collecting every problem.
    ///
    /// Missing distance and fuel price read as zero and are then reported by
    /// the usual validation rules. Fractional passenger counts are truncated.
    pub fn to_trip_input(&self) -> Result<TripInput, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let distance_km = read_number(&self.distance_km, "distance_km", 0.0, &mut errors);
        let fuel_price = read_number(
            &self.fuel_price_per_liter,
            "fuel_price_per_liter",
            0.0,
            &mut errors,
        );
        let road_factor = read_number(
            &self.road_condition_factor,
            "road_condition_factor",
            1.0,
            &mut errors,
        );
        let traffic_factor = read_number(&self.traffic_factor, "traffic_factor", 1.0, &mut errors);
        let passengers = read_number(&self.passenger_count, "passenger_count", 1.0, &mut errors);
        let union_levy = read_number(
            &self.union_levy,
            "union_levy",
            DEFAULT_UNION_LEVY,
            &mut errors,
        );

        let vehicle_type = match non_blank(&self.vehicle_type) {
            None => {
                errors.push(ValidationError::MissingVehicleType);
                None
            }
            Some(name) => VehicleType::parse(name)
                .map_err(|e| errors.push(ValidationError::UnknownVehicleType(e.name().into())))
                .ok(),
        };

        let time_of_day = match non_blank(&self.time_of_day) {
            None => {
                errors.push(ValidationError::MissingTimeOfDay);
                None
            }
            Some(name) => TimeOfDay::parse(name)
                .map_err(|e| errors.push(ValidationError::UnknownTimeOfDay(e.name().into())))
                .ok(),
        };

        let passenger_count = if passengers >= 1.0 {
            passengers.min(u32::MAX as f64) as u32
        } else {
            0
        };

        // Numeric rules do not depend on the vehicle or band, so a missing
        // choice still gets its numbers checked.
        let trip = TripInput::new(
            distance_km,
            fuel_price,
            vehicle_type.unwrap_or(VehicleType::Bus),
            time_of_day.unwrap_or(TimeOfDay::Afternoon),
        )
        .with_road_condition_factor(road_factor)
        .with_traffic_factor(traffic_factor)
        .with_passenger_count(passenger_count)
        .with_union_levy(union_levy);

        errors.extend(validate_inputs(&trip));

        if errors.is_empty() {
            Ok(trip)
        } else {
            Err(errors)
        }
    }

    /// Origin and destination for display, if both were given.
    pub fn route_label(&self) -> Option<String> {
        match (non_blank(&self.origin), non_blank(&self.destination)) {
            (Some(from), Some(to)) => Some(format!("{from} → {to}")),
            _ => None,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn read_number(
    field: &Option<NumberOrText>,
    name: &'static str,
    default: f64,
    errors: &mut Vec<ValidationError>,
) -> f64 {
    match field.as_ref().map(NumberOrText::value) {
        None | Some(Ok(None)) => default,
        Some(Ok(Some(n))) => n,
        Some(Err(value)) => {
            errors.push(ValidationError::NotANumber { field: name, value });
            default
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Validation failure response body.
#[derive(Debug, Serialize)]
pub struct ValidationErrorsResponse {
    pub errors: Vec<String>,
}

/// Current fuel price.
#[derive(Debug, Serialize)]
pub struct FuelPriceResponse {
    pub price_per_liter: f64,
}

/// Request to search place suggestions.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Search query (substring of a place name)
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 5)
    pub limit: Option<usize>,
}

/// Place suggestion results.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    pub locations: Vec<String>,
}

/// Request to analyze a route.
#[derive(Debug, Deserialize)]
pub struct RouteAnalyzeRequest {
    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,
}
