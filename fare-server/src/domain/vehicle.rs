//! Vehicle types and the per-kilometre rate table.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an unknown vehicle type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle type: {name}")]
pub struct UnknownVehicleType {
    name: String,
}

impl UnknownVehicleType {
    /// The text that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The kind of vehicle a fare is quoted for.
///
/// Each vehicle type has a fixed base rate in currency units per kilometre.
///
/// # Examples
///
/// ```
/// use fare_server::domain::VehicleType;
///
/// let taxi = VehicleType::parse("taxi").unwrap();
/// assert_eq!(taxi, VehicleType::Taxi);
/// assert_eq!(taxi.rate_per_km(), 15.0);
///
/// assert!(VehicleType::parse("Helicopter").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VehicleType {
    Bus,
    Taxi,
    Truck,
    Motorcycle,
    Tricycle,
}

impl VehicleType {
    /// All vehicle types, in form display order.
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Bus,
        VehicleType::Taxi,
        VehicleType::Truck,
        VehicleType::Motorcycle,
        VehicleType::Tricycle,
    ];

    /// Base rate in currency units per kilometre.
    pub const fn rate_per_km(self) -> f64 {
        match self {
            VehicleType::Bus => 5.0,
            VehicleType::Taxi => 15.0,
            VehicleType::Truck => 25.0,
            VehicleType::Motorcycle => 8.0,
            VehicleType::Tricycle => 12.0,
        }
    }

    /// Returns the vehicle type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            VehicleType::Bus => "Bus",
            VehicleType::Taxi => "Taxi",
            VehicleType::Truck => "Truck",
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Tricycle => "Tricycle",
        }
    }

    /// Parse a vehicle type from its name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, UnknownVehicleType> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownVehicleType {
                name: trimmed.to_string(),
            })
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_table() {
        assert_eq!(VehicleType::Bus.rate_per_km(), 5.0);
        assert_eq!(VehicleType::Taxi.rate_per_km(), 15.0);
        assert_eq!(VehicleType::Truck.rate_per_km(), 25.0);
        assert_eq!(VehicleType::Motorcycle.rate_per_km(), 8.0);
        assert_eq!(VehicleType::Tricycle.rate_per_km(), 12.0);
    }

    #[test]
    fn parse_valid_names() {
        assert_eq!(VehicleType::parse("Bus"), Ok(VehicleType::Bus));
        assert_eq!(VehicleType::parse("bus"), Ok(VehicleType::Bus));
        assert_eq!(VehicleType::parse("  TRUCK "), Ok(VehicleType::Truck));
        assert_eq!(VehicleType::parse("motorcycle"), Ok(VehicleType::Motorcycle));
        assert_eq!(VehicleType::parse("Tricycle"), Ok(VehicleType::Tricycle));
    }

    #[test]
    fn reject_unknown() {
        let err = VehicleType::parse("Keke Napep").unwrap_err();
        assert_eq!(err.name(), "Keke Napep");
        assert_eq!(err.to_string(), "unknown vehicle type: Keke Napep");

        assert!(VehicleType::parse("").is_err());
        assert!(VehicleType::parse("Buses").is_err());
    }

    #[test]
    fn display_matches_name() {
        for vehicle in VehicleType::ALL {
            assert_eq!(vehicle.to_string(), vehicle.as_str());
        }
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&VehicleType::Motorcycle).unwrap();
        assert_eq!(json, "\"Motorcycle\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing the display form of any vehicle returns the same vehicle,
        /// whatever the letter case.
        #[test]
        fn parse_display_roundtrip(idx in 0usize..5, upper in any::<bool>()) {
            let vehicle = VehicleType::ALL[idx];
            let text = if upper {
                vehicle.as_str().to_uppercase()
            } else {
                vehicle.as_str().to_lowercase()
            };
            prop_assert_eq!(VehicleType::parse(&text), Ok(vehicle));
        }

        /// Every base rate is strictly positive.
        #[test]
        fn rates_positive(idx in 0usize..5) {
            prop_assert!(VehicleType::ALL[idx].rate_per_km() > 0.0);
        }
    }
}
