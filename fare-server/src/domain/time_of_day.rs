//! Time-of-day bands and their fare multipliers.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an unknown time-of-day band.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time of day: {name}")]
pub struct UnknownTimeOfDay {
    name: String,
}

impl UnknownTimeOfDay {
    /// The text that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The band of the day a trip starts in.
///
/// Peak bands carry a surcharge multiplier applied to the base fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    MorningPeak,
    Afternoon,
    EveningPeak,
    Night,
}

impl TimeOfDay {
    /// All bands, in form display order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::MorningPeak,
        TimeOfDay::Afternoon,
        TimeOfDay::EveningPeak,
        TimeOfDay::Night,
    ];

    /// Fare multiplier for this band.
    pub const fn multiplier(self) -> f64 {
        match self {
            TimeOfDay::MorningPeak => 1.25,
            TimeOfDay::Afternoon => 1.00,
            TimeOfDay::EveningPeak => 1.30,
            TimeOfDay::Night => 1.15,
        }
    }

    /// Stable identifier used in forms, e.g. `Morning_Peak`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::MorningPeak => "Morning_Peak",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::EveningPeak => "Evening_Peak",
            TimeOfDay::Night => "Night",
        }
    }

    /// Human-readable label including the clock hours covered.
    pub const fn label(self) -> &'static str {
        match self {
            TimeOfDay::MorningPeak => "Morning Peak (7-10 AM)",
            TimeOfDay::Afternoon => "Afternoon (10 AM - 4 PM)",
            TimeOfDay::EveningPeak => "Evening Peak (4-8 PM)",
            TimeOfDay::Night => "Night (8 PM - 7 AM)",
        }
    }

    /// Parse a band name.
    ///
    /// Case, underscores, hyphens and spaces are ignored, so `Morning_Peak`,
    /// `morning-peak`, `MorningPeak` and `morning peak` are all accepted.
    pub fn parse(s: &str) -> Result<Self, UnknownTimeOfDay> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "morningpeak" => Ok(TimeOfDay::MorningPeak),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "eveningpeak" => Ok(TimeOfDay::EveningPeak),
            "night" => Ok(TimeOfDay::Night),
            _ => Err(UnknownTimeOfDay {
                name: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
