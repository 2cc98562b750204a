//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{FareBreakdown, RoadTier, RouteConditions, TimeOfDay, TrafficTier, VehicleType};
use crate::providers::{RouteAnalysis, RouteSource};

use super::dto::{NumberOrText, QuoteRequest};

/// Format an amount of naira for display.
pub fn naira(amount: f64) -> String {
    format!("₦{amount:.2}")
}

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the fare form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: FormView,
}

/// Quote result page: the form again, plus either a breakdown or errors.
#[derive(Template)]
#[template(path = "fare_result.html")]
pub struct FareResultTemplate {
    pub form: FormView,
    pub fare: Option<FareView>,
    pub errors: Vec<String>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// Standalone Templates (no base.html)
// ============================================================================

/// Printable receipt.
#[derive(Template)]
#[template(path = "receipt.html")]
pub struct ReceiptTemplate {
    pub fare: FareView,
    pub route: Option<String>,
    pub date: String,
    pub time: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route analysis fragment.
#[derive(Template)]
#[template(path = "route_info.html")]
pub struct RouteInfoTemplate {
    pub route: RouteView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A select option.
#[derive(Debug, Clone)]
pub struct ChoiceView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Form state, so a re-rendered form keeps what the user entered.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub origin: String,
    pub destination: String,
    pub distance_km: String,
    pub fuel_price_per_liter: String,
    pub road_condition_factor: String,
    pub traffic_factor: String,
    pub passenger_count: String,
    pub union_levy: String,
    pub vehicle_types: Vec<ChoiceView>,
    pub times_of_day: Vec<ChoiceView>,
}

impl FormView {
    /// An empty form with nothing selected.
    pub fn blank() -> Self {
        Self::with_selection(None, None)
    }

    /// A form with the given choices selected.
    pub fn with_selection(vehicle: Option<&str>, time_of_day: Option<&str>) -> Self {
        let vehicle = vehicle.and_then(|v| VehicleType::parse(v).ok());
        let time_of_day = time_of_day.and_then(|t| TimeOfDay::parse(t).ok());

        let vehicle_types = VehicleType::ALL
            .iter()
            .map(|v| ChoiceView {
                value: v.as_str().to_string(),
                label: format!("{} ({}/km)", v, naira(v.rate_per_km())),
                selected: vehicle == Some(*v),
            })
            .collect();

        let times_of_day = TimeOfDay::ALL
            .iter()
            .map(|t| ChoiceView {
                value: t.as_str().to_string(),
                label: t.label().to_string(),
                selected: time_of_day == Some(*t),
            })
            .collect();

        Self {
            vehicle_types,
            times_of_day,
            ..Default::default()
        }
    }

    /// The form as the user submitted it.
    pub fn from_request(req: &QuoteRequest) -> Self {
        let text = |field: &Option<NumberOrText>| match field {
            Some(NumberOrText::Number(n)) => n.to_string(),
            Some(NumberOrText::Text(s)) => s.clone(),
            None => String::new(),
        };

        Self {
            origin: req.origin.clone().unwrap_or_default(),
            destination: req.destination.clone().unwrap_or_default(),
            distance_km: text(&req.distance_km),
            fuel_price_per_liter: text(&req.fuel_price_per_liter),
            road_condition_factor: text(&req.road_condition_factor),
            traffic_factor: text(&req.traffic_factor),
            passenger_count: text(&req.passenger_count),
            union_levy: text(&req.union_levy),
            ..Self::with_selection(req.vehicle_type.as_deref(), req.time_of_day.as_deref())
        }
    }
}

/// Fare breakdown view model.
#[derive(Debug, Clone)]
pub struct FareView {
    pub vehicle_type: String,
    pub distance: String,
    pub time_of_day: String,
    pub passenger_count: u32,
    pub base_fare: String,
    pub base_fare_detail: String,
    pub fuel_adjustment: String,
    pub road_adjustment: String,
    pub time_adjustment: String,
    pub traffic_adjustment: String,
    pub union_levy: String,
    pub subtotal_per_passenger: String,
    pub total_fare: String,
    pub is_group: bool,
    pub traffic_label: String,
    pub traffic_factor: String,
    pub traffic_class: &'static str,
    pub road_label: String,
    pub road_factor: String,
    pub road_class: &'static str,
}

impl FareView {
    /// Create from a fare breakdown.
    ///
    /// Traffic and road status come from the quoted factors, so manually
    /// entered values get a tier too.
    pub fn from_breakdown(fare: &FareBreakdown) -> Self {
        let trip = &fare.trip;
        let c = RouteConditions::from_factors(trip.traffic_factor, trip.road_condition_factor);
        Self {
            vehicle_type: trip.vehicle_type.to_string(),
            distance: format!("{:.1} km", trip.distance_km),
            time_of_day: trip.time_of_day.label().to_string(),
            passenger_count: trip.passenger_count,
            base_fare: naira(fare.base_fare),
            base_fare_detail: format!(
                "{:.1} km × {}/km",
                trip.distance_km,
                naira(trip.rate_per_km)
            ),
            fuel_adjustment: naira(fare.fuel_adjustment),
            road_adjustment: naira(fare.road_adjustment),
            time_adjustment: naira(fare.time_adjustment),
            traffic_adjustment: naira(fare.traffic_adjustment),
            union_levy: naira(fare.union_levy),
            subtotal_per_passenger: naira(fare.subtotal_per_passenger),
            total_fare: naira(fare.total_fare),
            is_group: fare.is_group(),
            traffic_label: c.traffic_tier.label().to_string(),
            traffic_factor: format!("{:.1}x", c.traffic_factor),
            traffic_class: traffic_class(c.traffic_tier),
            road_label: c.road_tier.label().to_string(),
            road_factor: format!("{:.1}x", c.road_factor),
            road_class: road_class(c.road_tier),
        }
    }
}

/// Route analysis view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub origin: String,
    pub destination: String,
    pub distance: String,
    /// Unrounded distance for the form's hidden field.
    pub distance_value: String,
    pub duration: String,
    pub traffic_label: String,
    pub traffic_factor: String,
    pub traffic_factor_value: String,
    pub traffic_class: &'static str,
    pub road_label: String,
    pub road_factor: String,
    pub road_factor_value: String,
    pub road_class: &'static str,
    pub is_estimate: bool,
}

impl RouteView {
    /// Create from a route analysis.
    pub fn from_analysis(analysis: &RouteAnalysis) -> Self {
        let c = &analysis.conditions;
        Self {
            origin: analysis.origin.clone(),
            destination: analysis.destination.clone(),
            distance: format!("{:.1} km", analysis.distance_km),
            distance_value: analysis.distance_km.to_string(),
            duration: format!("{:.0} min", analysis.duration_in_traffic_mins),
            traffic_label: c.traffic_tier.label().to_string(),
            traffic_factor: format!("{:.1}x", c.traffic_factor),
            traffic_factor_value: c.traffic_factor.to_string(),
            traffic_class: traffic_class(c.traffic_tier),
            road_label: c.road_tier.label().to_string(),
            road_factor: format!("{:.1}x", c.road_factor),
            road_factor_value: c.road_factor.to_string(),
            road_class: road_class(c.road_tier),
            is_estimate: analysis.source == RouteSource::Estimated,
        }
    }
}

/// CSS status class for a traffic tier.
pub fn traffic_class(tier: TrafficTier) -> &'static str {
    match tier {
        TrafficTier::Light => "status-good",
        TrafficTier::Moderate => "status-average",
        TrafficTier::Heavy => "status-bad",
    }
}

/// CSS status class for a road tier.
pub fn road_class(tier: RoadTier) -> &'static str {
    match tier {
        RoadTier::Good => "status-good",
        RoadTier::Average => "status-average",
        RoadTier::Poor => "status-bad",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteConditions, TripInput};
    use crate::fare::compute_fare;

    fn group_fare() -> FareBreakdown {
        let trip = TripInput::new(10.0, 150.0, VehicleType::Bus, TimeOfDay::EveningPeak)
            .with_passenger_count(2);
        compute_fare(&trip).unwrap()
    }

    fn analysis(traffic: f64, road: f64, source: RouteSource) -> RouteAnalysis {
        RouteAnalysis {
            origin: "Ikeja, Lagos".into(),
            destination: "Lekki".into(),
            distance_km: 18.26,
            duration_mins: 30.0,
            duration_in_traffic_mins: 41.4,
            conditions: RouteConditions::from_factors(traffic, road),
            source,
        }
    }

    #[test]
    fn naira_formats_two_decimals() {
        assert_eq!(naira(210.0), "₦210.00");
        assert_eq!(naira(3.14159), "₦3.14");
        assert_eq!(naira(0.0), "₦0.00");
    }

    #[test]
    fn fare_view_formats_lines() {
        let view = FareView::from_breakdown(&group_fare());
        assert_eq!(view.vehicle_type, "Bus");
        assert_eq!(view.distance, "10.0 km");
        assert_eq!(view.time_of_day, TimeOfDay::EveningPeak.label());
        assert_eq!(view.base_fare, "₦50.00");
        assert_eq!(view.base_fare_detail, "10.0 km × ₦5.00/km");
        assert_eq!(view.fuel_adjustment, "₦5.00");
        assert_eq!(view.road_adjustment, "₦0.00");
        assert_eq!(view.time_adjustment, "₦15.00");
        assert_eq!(view.union_levy, "₦10.00");
        assert_eq!(view.subtotal_per_passenger, "₦80.00");
        assert_eq!(view.total_fare, "₦160.00");
        assert!(view.is_group);
    }

    #[test]
    fn fare_view_tiers_from_factors() {
        let view = FareView::from_breakdown(&group_fare());
        assert_eq!(view.traffic_label, "Light Traffic");
        assert_eq!(view.traffic_class, "status-good");
        assert_eq!(view.road_label, "Good Road Conditions");
        assert_eq!(view.road_class, "status-good");

        let trip = TripInput::new(10.0, 150.0, VehicleType::Taxi, TimeOfDay::Night)
            .with_traffic_factor(1.6)
            .with_road_condition_factor(1.5);
        let view = FareView::from_breakdown(&compute_fare(&trip).unwrap());
        assert_eq!(view.traffic_label, "Heavy Traffic");
        assert_eq!(view.traffic_factor, "1.6x");
        assert_eq!(view.traffic_class, "status-bad");
        assert_eq!(view.road_label, "Poor Road Conditions");
        assert_eq!(view.road_factor, "1.5x");
        assert_eq!(view.road_class, "status-bad");

        let html = ReceiptTemplate {
            fare: view,
            route: None,
            date: "2026-10-18".into(),
            time: "09:30:00".into(),
        }
        .render()
        .unwrap();
        assert!(html.contains("Heavy Traffic"));
        assert!(html.contains("info-card status-bad"));
        assert!(html.contains("Poor Road Conditions"));
    }

    #[test]
    fn route_view_keeps_measured_distance() {
        let view = RouteView::from_analysis(&analysis(1.0, 1.0, RouteSource::Live));
        assert_eq!(view.distance, "18.3 km");
        assert_eq!(view.distance_value, "18.26");

        let html = RouteInfoTemplate { route: view }.render().unwrap();
        assert!(html.contains("data-distance=\"18.26\""));
    }

    #[test]
    fn form_marks_selection() {
        let form = FormView::with_selection(Some("taxi"), Some("Night"));
        let selected: Vec<_> = form
            .vehicle_types
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(selected, vec!["Taxi"]);
        assert!(form.times_of_day.iter().any(|t| t.selected && t.value == "Night"));

        let blank = FormView::blank();
        assert_eq!(blank.vehicle_types.len(), VehicleType::ALL.len());
        assert!(blank.vehicle_types.iter().all(|c| !c.selected));
    }

    #[test]
    fn form_keeps_submitted_values() {
        let req = QuoteRequest {
            origin: Some("Ikeja, Lagos".into()),
            distance_km: Some(NumberOrText::Number(12.5)),
            fuel_price_per_liter: Some(NumberOrText::Text("abc".into())),
            vehicle_type: Some("Tricycle".into()),
            ..Default::default()
        };
        let form = FormView::from_request(&req);
        assert_eq!(form.origin, "Ikeja, Lagos");
        assert_eq!(form.distance_km, "12.5");
        assert_eq!(form.fuel_price_per_liter, "abc");
        assert_eq!(form.passenger_count, "");
        assert!(form
            .vehicle_types
            .iter()
            .any(|c| c.selected && c.value == "Tricycle"));
        assert!(form.times_of_day.iter().all(|c| !c.selected));
    }

    #[test]
    fn route_view_classes() {
        let view = RouteView::from_analysis(&analysis(1.7, 1.0, RouteSource::Live));
        assert_eq!(view.distance, "18.3 km");
        assert_eq!(view.duration, "41 min");
        assert_eq!(view.traffic_class, "status-bad");
        assert_eq!(view.traffic_label, "Heavy Traffic");
        assert_eq!(view.road_class, "status-good");
        assert!(!view.is_estimate);

        let view = RouteView::from_analysis(&analysis(1.3, 1.2, RouteSource::Estimated));
        assert_eq!(view.traffic_class, "status-average");
        assert_eq!(view.road_class, "status-average");
        assert_eq!(view.road_factor, "1.2x");
        assert!(view.is_estimate);
    }

    #[test]
    fn templates_render() {
        let html = IndexTemplate {
            form: FormView::blank(),
        }
        .render()
        .unwrap();
        assert!(html.contains("name=\"vehicle_type\""));

        let html = FareResultTemplate {
            form: FormView::blank(),
            fare: Some(FareView::from_breakdown(&group_fare())),
            errors: vec![],
        }
        .render()
        .unwrap();
        assert!(html.contains("₦160.00"));

        let html = FareResultTemplate {
            form: FormView::blank(),
            fare: None,
            errors: vec!["Please select a vehicle type".into()],
        }
        .render()
        .unwrap();
        assert!(html.contains("Please select a vehicle type"));

        let html = ReceiptTemplate {
            fare: FareView::from_breakdown(&group_fare()),
            route: Some("Ikeja → Lekki".into()),
            date: "2026-10-18".into(),
            time: "09:30:00".into(),
        }
        .render()
        .unwrap();
        assert!(html.contains("AUTOMATED ATOTOARERE TRANSPORT FARE RECEIPT"));
        assert!(html.contains("2026-10-18"));

        let html = RouteInfoTemplate {
            route: RouteView::from_analysis(&analysis(1.0, 1.5, RouteSource::Live)),
        }
        .render()
        .unwrap();
        assert!(html.contains("Poor Road Conditions"));
    }
}
