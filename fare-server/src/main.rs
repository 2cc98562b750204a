use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fare_server::cache::CachedDirectionsClient;
use fare_server::config::ServerConfig;
use fare_server::directions::{DirectionsClient, DirectionsConfig};
use fare_server::locations::LocationSuggestions;
use fare_server::providers::{FuelPriceSource, RouteResolver, SimulatedRouteProvider};
use fare_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "fare_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Live directions only when a key is configured
    let directions = match &config.directions_api_key {
        Some(key) => {
            let client = DirectionsClient::new(DirectionsConfig::new(key))?;
            Some(CachedDirectionsClient::new(client, &config.route_cache))
        }
        None => {
            warn!("GOOGLE_MAPS_API_KEY not set; route analysis will use estimates");
            None
        }
    };

    let (simulated_routes, fuel) = match config.simulation_seed {
        Some(seed) => (
            SimulatedRouteProvider::with_seed(seed),
            FuelPriceSource::simulated_with_seed(seed),
        ),
        None => (SimulatedRouteProvider::from_entropy(), FuelPriceSource::simulated()),
    };
    let fuel = match config.fixed_fuel_price {
        Some(price) => FuelPriceSource::Fixed(price),
        None => fuel,
    };

    let state = AppState::new(
        RouteResolver::new(directions, simulated_routes),
        fuel,
        LocationSuggestions::nigeria(),
    );

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "fare calculator listening");
    info!("open http://{} in your browser for the web interface", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
