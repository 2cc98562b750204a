//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::fare::{QuoteError, quote};
use crate::locations::DEFAULT_SUGGESTION_LIMIT;
use crate::providers::{FuelPriceProvider, ProviderError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Upper bound on suggestions per request.
const MAX_SUGGESTION_LIMIT: usize = 10;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/locations/search", get(search_locations))
        .route("/api/fuel/price", get(fuel_price))
        .route("/route/analyze", get(analyze_route))
        .route("/api/fare/quote", post(quote_api))
        .route("/fare", post(quote_form))
        .route("/fare/receipt", post(receipt))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the fare form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate {
            form: FormView::blank(),
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Suggest places matching a partial name.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Json<LocationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .min(MAX_SUGGESTION_LIMIT);

    let locations = state
        .locations
        .search(&req.q, limit)
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(LocationSearchResponse { locations })
}

/// Current fuel price per litre.
async fn fuel_price(State(state): State<AppState>) -> Result<Json<FuelPriceResponse>, AppError> {
    let price_per_liter = state.fuel.current_price().await?;
    Ok(Json(FuelPriceResponse { price_per_liter }))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Measure and classify a route.
async fn analyze_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteAnalyzeRequest>,
) -> Result<Response, AppError> {
    let origin = req.origin.trim();
    let destination = req.destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "Please enter both origin and destination".to_string(),
        });
    }

    let analysis = state.routes.resolve(origin, destination).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteInfoTemplate {
            route: RouteView::from_analysis(&analysis),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(analysis).into_response())
    }
}

/// Quote a fare from a JSON request.
async fn quote_api(body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: QuoteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid quote JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let trip = req.to_trip_input().map_err(|errors| AppError::Unprocessable {
        errors: errors.iter().map(ToString::to_string).collect(),
    })?;
    let fare = quote(&trip)?;

    info!(
        vehicle = %trip.vehicle_type,
        distance_km = trip.distance_km,
        total = fare.total_fare,
        "quoted fare"
    );

    Ok(Json(fare).into_response())
}

/// Validate and quote a request, returning user-facing error messages.
fn quote_messages(req: &QuoteRequest) -> Result<FareView, Vec<String>> {
    let trip = req
        .to_trip_input()
        .map_err(|errors| errors.iter().map(ToString::to_string).collect::<Vec<_>>())?;

    match quote(&trip) {
        Ok(fare) => Ok(FareView::from_breakdown(&fare)),
        Err(QuoteError::Invalid(errors)) => Err(errors.iter().map(ToString::to_string).collect()),
        Err(QuoteError::Fare(e)) => Err(vec![e.to_string()]),
    }
}

/// Quote a fare from the HTML form.
async fn quote_form(Form(req): Form<QuoteRequest>) -> Result<Response, AppError> {
    let form = FormView::from_request(&req);

    let (status, template) = match quote_messages(&req) {
        Ok(fare) => (
            StatusCode::OK,
            FareResultTemplate {
                form,
                fare: Some(fare),
                errors: Vec::new(),
            },
        ),
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            FareResultTemplate {
                form,
                fare: None,
                errors,
            },
        ),
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok((status, Html(html)).into_response())
}

/// Printable receipt for a form quote.
async fn receipt(Form(req): Form<QuoteRequest>) -> Result<Response, AppError> {
    let (status, html) = match quote_messages(&req) {
        Ok(fare) => {
            let now = Local::now();
            let template = ReceiptTemplate {
                fare,
                route: req.route_label(),
                date: now.format("%d/%m/%Y").to_string(),
                time: now.format("%H:%M:%S").to_string(),
            };
            (StatusCode::OK, template.render())
        }
        Err(errors) => {
            let template = ErrorTemplate {
                title: "Nothing to print".to_string(),
                message: "Please calculate a valid fare first.".to_string(),
                details: Some(errors.join("\n")),
            };
            (StatusCode::UNPROCESSABLE_ENTITY, template.render())
        }
    };

    let html = html.map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok((status, Html(html)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { errors: Vec<String> },
    Internal { message: String },
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(e: QuoteError) -> Self {
        match e {
            QuoteError::Invalid(errors) => AppError::Unprocessable {
                errors: errors.iter().map(ToString::to_string).collect(),
            },
            QuoteError::Fare(e) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { message } => {
                warn!(status = 400, %message, "bad request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::Unprocessable { errors } => {
                warn!(status = 422, ?errors, "validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorsResponse { errors }),
                )
                    .into_response()
            }
            AppError::Internal { message } => {
                error!(status = 500, %message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response()
            }
        }
    }
}
