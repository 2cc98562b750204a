//! Measurement and fuel price providers.
//!
//! The fare core consumes already-resolved scalars. These traits are the
//! seams where live data sources, simulations and test doubles plug in.

mod fuel;
mod resolver;
mod simulated;

use crate::directions::DirectionsError;
use crate::domain::{FareError, RouteMeasurement};

pub use fuel::{FuelPriceSource, SIMULATED_FUEL_PRICE_RANGE};
pub use resolver::{RouteAnalysis, RouteResolver, RouteSource};
pub use simulated::SimulatedRouteProvider;

/// Error from a provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The directions API failed
    #[error(transparent)]
    Directions(#[from] DirectionsError),

    /// A measurement could not be classified
    #[error(transparent)]
    Measurement(#[from] FareError),

    /// The provider cannot serve the request
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Trait for resolving a route between two places.
///
/// This abstraction allows route resolution to be tested with
/// deterministic measurements. The returned future must be `Send` so
/// handlers can await it on the multi-threaded runtime; implementors may
/// still write `async fn`.
pub trait MeasurementProvider {
    /// Measure the route from `origin` to `destination`.
    fn measure(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<RouteMeasurement, ProviderError>> + Send;
}

/// Trait for obtaining the current fuel price per litre.
pub trait FuelPriceProvider {
    fn current_price(&self) -> impl Future<Output = Result<f64, ProviderError>> + Send;
}
