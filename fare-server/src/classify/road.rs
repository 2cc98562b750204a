//! Road quality classification from the mix of road categories on a route.

use crate::domain::{FareError, RoadKind, RoadSegment, RoadTier};

use super::tier::{ROAD_TIERS, RouteMetric, Tiered};

/// Fraction of route length falling in each road bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadShares {
    pub highway: f64,
    pub city: f64,
    pub rural: f64,
}

impl RoadShares {
    /// Partition segment lengths into buckets.
    ///
    /// Major streets and unclassified segments count as city streets; minor
    /// streets count as rural roads.
    pub fn from_segments(segments: &[RoadSegment]) -> Result<Self, FareError> {
        if segments.is_empty() {
            return Err(FareError::InvalidMeasurement(
                "route has no road segments".to_string(),
            ));
        }

        let mut highway = 0.0;
        let mut city = 0.0;
        let mut rural = 0.0;

        for segment in segments {
            let length = segment.length_meters;
            if !length.is_finite() || length < 0.0 {
                return Err(FareError::InvalidMeasurement(format!(
                    "segment length must be non-negative, got {length}"
                )));
            }

            match segment.kind {
                RoadKind::Highway => highway += length,
                RoadKind::MajorStreet | RoadKind::Unclassified => city += length,
                RoadKind::MinorStreet => rural += length,
            }
        }

        let total = highway + city + rural;
        if total <= 0.0 {
            return Err(FareError::InvalidMeasurement(
                "total segment length must be positive".to_string(),
            ));
        }

        Ok(Self {
            highway: highway / total,
            city: city / total,
            rural: rural / total,
        })
    }

    fn get(&self, metric: RouteMetric) -> f64 {
        match metric {
            RouteMetric::HighwayShare => self.highway,
            RouteMetric::CityShare => self.city,
            RouteMetric::RuralShare => self.rural,
            RouteMetric::CongestionRatio => 0.0,
        }
    }
}

/// Classify road quality from the route's segments.
pub fn classify_road_quality(segments: &[RoadSegment]) -> Result<Tiered<RoadTier>, FareError> {
    let shares = RoadShares::from_segments(segments)?;
    Ok(ROAD_TIERS.classify(|metric| shares.get(metric)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(length: f64, kind: RoadKind) -> RoadSegment {
        RoadSegment::new(length, kind)
    }

    #[test]
    fn mostly_highway_is_good() {
        let result = classify_road_quality(&[
            seg(8000.0, RoadKind::Highway),
            seg(2000.0, RoadKind::MinorStreet),
        ])
        .unwrap();

        assert_eq!(result.factor, 1.0);
        assert_eq!(result.tier, RoadTier::Good);
    }

    #[test]
    fn highway_checked_before_rural() {
        let result = classify_road_quality(&[
            seg(750.0, RoadKind::Highway),
            seg(250.0, RoadKind::MinorStreet),
        ])
        .unwrap();
        assert_eq!(result.tier, RoadTier::Good);
    }

    #[test]
    fn mostly_city_is_average() {
        let result = classify_road_quality(&[
            seg(700.0, RoadKind::MajorStreet),
            seg(300.0, RoadKind::MinorStreet),
        ])
        .unwrap();
        assert_eq!(result.factor, 1.2);
        assert_eq!(result.tier, RoadTier::Average);
    }

    #[test]
    fn unclassified_counts_as_city() {
        let shares = RoadShares::from_segments(&[
            seg(400.0, RoadKind::Unclassified),
            seg(300.0, RoadKind::MajorStreet),
            seg(300.0, RoadKind::MinorStreet),
        ])
        .unwrap();
        assert!((shares.city - 0.7).abs() < 1e-12);
        assert!((shares.rural - 0.3).abs() < 1e-12);
        assert_eq!(shares.highway, 0.0);
    }

    #[test]
    fn mostly_rural_is_poor() {
        let result = classify_road_quality(&[
            seg(600.0, RoadKind::MinorStreet),
            seg(400.0, RoadKind::Highway),
        ])
        .unwrap();
        assert_eq!(result.factor, 1.5);
        assert_eq!(result.tier, RoadTier::Poor);
    }

    #[test]
    fn mixed_profile_falls_back_to_average() {
        let result = classify_road_quality(&[
            seg(400.0, RoadKind::Highway),
            seg(300.0, RoadKind::MajorStreet),
            seg(300.0, RoadKind::MinorStreet),
        ])
        .unwrap();
        assert_eq!(result.factor, 1.2);
        assert_eq!(result.tier, RoadTier::Average);
    }

    #[test]
    fn empty_segments_rejected() {
        let err = classify_road_quality(&[]).unwrap_err();
        assert!(matches!(err, FareError::InvalidMeasurement(_)));
    }

    #[test]
    fn zero_length_rejected() {
        assert!(classify_road_quality(&[seg(0.0, RoadKind::Highway)]).is_err());
    }

    #[test]
    fn negative_or_nan_length_rejected() {
        assert!(
            classify_road_quality(&[seg(-10.0, RoadKind::Highway), seg(100.0, RoadKind::Highway)])
                .is_err()
        );
        assert!(classify_road_quality(&[seg(f64::NAN, RoadKind::MinorStreet)]).is_err());
    }
}
