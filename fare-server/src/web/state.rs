//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectionsClient;
use crate::locations::LocationSuggestions;
use crate::providers::{FuelPriceSource, RouteResolver, SimulatedRouteProvider};

/// Route resolver used by the server: cached live directions, falling back
/// to simulation.
pub type ServerRouteResolver = RouteResolver<CachedDirectionsClient, SimulatedRouteProvider>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route lookup and classification
    pub routes: Arc<ServerRouteResolver>,

    /// Current fuel price
    pub fuel: Arc<FuelPriceSource>,

    /// Place suggestions for manual entry
    pub locations: Arc<LocationSuggestions>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        routes: ServerRouteResolver,
        fuel: FuelPriceSource,
        locations: LocationSuggestions,
    ) -> Self {
        Self {
            routes: Arc::new(routes),
            fuel: Arc::new(fuel),
            locations: Arc::new(locations),
        }
    }

    /// State with no live providers and seeded simulations.
    pub fn simulated(seed: u64) -> Self {
        Self::new(
            RouteResolver::new(None, SimulatedRouteProvider::with_seed(seed)),
            FuelPriceSource::simulated_with_seed(seed),
            LocationSuggestions::nigeria(),
        )
    }
}
