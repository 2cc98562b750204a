//! Ordered tier tables.
//!
//! A tier table maps continuous route ratios to a quantized multiplier and
//! a tier label. Rules are evaluated top-down and the first admitted rule
//! wins; if none matches, the table's fallback applies.

use crate::domain::{RoadTier, TrafficTier};

/// A ratio measured on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMetric {
    /// Duration in traffic divided by free-flow duration.
    CongestionRatio,
    /// Share of route length on highways.
    HighwayShare,
    /// Share of route length on city streets.
    CityShare,
    /// Share of route length on rural roads.
    RuralShare,
}

/// Lower bound a metric must meet for a rule to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Inclusive: `value >= threshold`.
    AtLeast(f64),
    /// Exclusive: `value > threshold`.
    Above(f64),
}

impl Bound {
    /// Whether `value` satisfies this bound.
    pub fn admits(self, value: f64) -> bool {
        match self {
            Bound::AtLeast(threshold) => value >= threshold,
            Bound::Above(threshold) => value > threshold,
        }
    }
}

/// A quantized multiplier with its tier label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tiered<T> {
    pub factor: f64,
    pub tier: T,
}

/// One row of a tier table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRule<T> {
    pub metric: RouteMetric,
    pub bound: Bound,
    pub outcome: Tiered<T>,
}

/// Rules in priority order plus the outcome when none match.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<T: 'static> {
    pub rules: &'static [TierRule<T>],
    pub fallback: Tiered<T>,
}

impl<T: Copy> TierTable<T> {
    /// Evaluate the table, reading each rule's metric through `value_of`.
    pub fn classify(&self, value_of: impl Fn(RouteMetric) -> f64) -> Tiered<T> {
        self.rules
            .iter()
            .find(|rule| rule.bound.admits(value_of(rule.metric)))
            .map(|rule| rule.outcome)
            .unwrap_or(self.fallback)
    }
}

/// Traffic tiers, most severe first. Bounds are inclusive.
pub const TRAFFIC_TIERS: TierTable<TrafficTier> = TierTable {
    rules: &[
        TierRule {
            metric: RouteMetric::CongestionRatio,
            bound: Bound::AtLeast(1.6),
            outcome: Tiered {
                factor: 1.6,
                tier: TrafficTier::Heavy,
            },
        },
        TierRule {
            metric: RouteMetric::CongestionRatio,
            bound: Bound::AtLeast(1.3),
            outcome: Tiered {
                factor: 1.3,
                tier: TrafficTier::Moderate,
            },
        },
    ],
    fallback: Tiered {
        factor: 1.0,
        tier: TrafficTier::Light,
    },
};

/// Road quality tiers. A mostly-highway route is checked first so that it
/// classifies as good even when other shares are also high.
pub const ROAD_TIERS: TierTable<RoadTier> = TierTable {
    rules: &[
        TierRule {
            metric: RouteMetric::HighwayShare,
            bound: Bound::Above(0.7),
            outcome: Tiered {
                factor: 1.0,
                tier: RoadTier::Good,
            },
        },
        TierRule {
            metric: RouteMetric::CityShare,
            bound: Bound::Above(0.6),
            outcome: Tiered {
                factor: 1.2,
                tier: RoadTier::Average,
            },
        },
        TierRule {
            metric: RouteMetric::RuralShare,
            bound: Bound::Above(0.5),
            outcome: Tiered {
                factor: 1.5,
                tier: RoadTier::Poor,
            },
        },
    ],
    // Mixed profile
    fallback: Tiered {
        factor: 1.2,
        tier: RoadTier::Average,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn congestion(ratio: f64) -> impl Fn(RouteMetric) -> f64 {
        move |metric| match metric {
            RouteMetric::CongestionRatio => ratio,
            _ => 0.0,
        }
    }

    fn shares(highway: f64, city: f64, rural: f64) -> impl Fn(RouteMetric) -> f64 {
        move |metric| match metric {
            RouteMetric::HighwayShare => highway,
            RouteMetric::CityShare => city,
            RouteMetric::RuralShare => rural,
            RouteMetric::CongestionRatio => 0.0,
        }
    }

    #[test]
    fn bounds() {
        assert!(Bound::AtLeast(1.3).admits(1.3));
        assert!(!Bound::AtLeast(1.3).admits(1.2999));
        assert!(!Bound::Above(0.7).admits(0.7));
        assert!(Bound::Above(0.7).admits(0.7001));
        assert!(!Bound::AtLeast(1.0).admits(f64::NAN));
    }

    #[test]
    fn traffic_table_boundaries() {
        assert_eq!(TRAFFIC_TIERS.classify(congestion(1.0)).tier, TrafficTier::Light);
        assert_eq!(TRAFFIC_TIERS.classify(congestion(1.2999)).tier, TrafficTier::Light);
        assert_eq!(TRAFFIC_TIERS.classify(congestion(1.3)).tier, TrafficTier::Moderate);
        assert_eq!(TRAFFIC_TIERS.classify(congestion(1.5999)).tier, TrafficTier::Moderate);
        assert_eq!(TRAFFIC_TIERS.classify(congestion(1.6)).tier, TrafficTier::Heavy);
        assert_eq!(TRAFFIC_TIERS.classify(congestion(3.0)).factor, 1.6);
    }

    #[test]
    fn road_table_highway_takes_precedence() {
        // Shares checked independently: highway wins even with a high rural share.
        let result = ROAD_TIERS.classify(shares(0.75, 0.0, 0.6));
        assert_eq!(result.tier, RoadTier::Good);
        assert_eq!(result.factor, 1.0);
    }

    #[test]
    fn road_table_order() {
        assert_eq!(ROAD_TIERS.classify(shares(0.1, 0.65, 0.55)).tier, RoadTier::Average);
        assert_eq!(ROAD_TIERS.classify(shares(0.1, 0.3, 0.6)).factor, 1.5);
        assert_eq!(ROAD_TIERS.classify(shares(0.4, 0.3, 0.3)).factor, 1.2);
    }

    #[test]
    fn road_table_bounds_are_exclusive() {
        assert_eq!(ROAD_TIERS.classify(shares(0.7, 0.0, 0.3)).tier, RoadTier::Average);
        assert_eq!(ROAD_TIERS.classify(shares(0.0, 0.6, 0.4)).factor, 1.2);
        assert_eq!(ROAD_TIERS.classify(shares(0.0, 0.5, 0.5)).factor, 1.2);
    }
}
