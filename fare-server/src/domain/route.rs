//! Route measurements and the conditions derived from them.

use std::fmt;

use serde::Serialize;

/// Road category of a stretch of route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadKind {
    Highway,
    MajorStreet,
    MinorStreet,
    Unclassified,
}

impl RoadKind {
    /// Infer the road category from a plain-text turn instruction.
    ///
    /// Highways and expressways are `Highway`. Streets and roads are
    /// `MajorStreet` when described as main or major, otherwise
    /// `MinorStreet`. Anything else is `Unclassified`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_server::domain::RoadKind;
    ///
    /// assert_eq!(RoadKind::from_instruction("Merge onto Lagos-Ibadan Expressway"), RoadKind::Highway);
    /// assert_eq!(RoadKind::from_instruction("Turn left onto Main Street"), RoadKind::MajorStreet);
    /// assert_eq!(RoadKind::from_instruction("Continue on Ojo Road"), RoadKind::MinorStreet);
    /// assert_eq!(RoadKind::from_instruction("At the roundabout, take the 2nd exit"), RoadKind::Unclassified);
    /// ```
    pub fn from_instruction(instruction: &str) -> Self {
        let text = instruction.to_lowercase();

        if text.contains("highway") || text.contains("expressway") {
            RoadKind::Highway
        } else if text.contains("street") || text.contains("road") {
            if text.contains("main") || text.contains("major") {
                RoadKind::MajorStreet
            } else {
                RoadKind::MinorStreet
            }
        } else {
            RoadKind::Unclassified
        }
    }
}

/// A stretch of route of a single road category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoadSegment {
    pub length_meters: f64,
    pub kind: RoadKind,
}

impl RoadSegment {
    pub fn new(length_meters: f64, kind: RoadKind) -> Self {
        Self {
            length_meters,
            kind,
        }
    }
}

/// Raw telemetry for a resolved route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMeasurement {
    /// Route length in metres.
    pub distance_meters: f64,

    /// Free-flow travel time in seconds.
    pub duration_seconds: f64,

    /// Travel time given current traffic, in seconds.
    pub duration_in_traffic_seconds: f64,

    /// Road segments making up the route.
    pub segments: Vec<RoadSegment>,
}

impl RouteMeasurement {
    /// Route length in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Free-flow travel time in minutes.
    pub fn duration_mins(&self) -> f64 {
        self.duration_seconds / 60.0
    }
}

/// Traffic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficTier {
    Light,
    Moderate,
    Heavy,
}

impl TrafficTier {
    /// Tier implied by a manually supplied traffic factor.
    pub fn for_factor(factor: f64) -> Self {
        if factor >= 1.6 {
            TrafficTier::Heavy
        } else if factor >= 1.3 {
            TrafficTier::Moderate
        } else {
            TrafficTier::Light
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrafficTier::Light => "Light Traffic",
            TrafficTier::Moderate => "Moderate Traffic",
            TrafficTier::Heavy => "Heavy Traffic",
        }
    }
}

impl fmt::Display for TrafficTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Road quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadTier {
    Good,
    Average,
    Poor,
}

impl RoadTier {
    /// Tier implied by a manually supplied road condition factor.
    pub fn for_factor(factor: f64) -> Self {
        if factor >= 1.5 {
            RoadTier::Poor
        } else if factor >= 1.2 {
            RoadTier::Average
        } else {
            RoadTier::Good
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RoadTier::Good => "Good Road Conditions",
            RoadTier::Average => "Average Road Conditions",
            RoadTier::Poor => "Poor Road Conditions",
        }
    }
}

impl fmt::Display for RoadTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traffic and road multipliers derived from a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteConditions {
    pub traffic_factor: f64,
    pub traffic_tier: TrafficTier,
    pub road_factor: f64,
    pub road_tier: RoadTier,
}

impl RouteConditions {
    /// Conditions for manually supplied factors, with tiers inferred from
    /// the factor values.
    pub fn from_factors(traffic_factor: f64, road_factor: f64) -> Self {
        Self {
            traffic_factor,
            traffic_tier: TrafficTier::for_factor(traffic_factor),
            road_factor,
            road_tier: RoadTier::for_factor(road_factor),
        }
    }
}
