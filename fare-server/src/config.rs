//! Server configuration loaded from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Environment variable names.
pub const BIND_ADDR_VAR: &str = "FARE_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "FARE_STATIC_DIR";
pub const DIRECTIONS_API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const FUEL_PRICE_VAR: &str = "FARE_FUEL_PRICE";
pub const SIMULATION_SEED_VAR: &str = "FARE_SIMULATION_SEED";
pub const ROUTE_CACHE_TTL_VAR: &str = "FARE_ROUTE_CACHE_TTL_SECS";

/// Error loading configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the fare server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Directions API key. Without one, routes are always simulated.
    pub directions_api_key: Option<String>,

    /// Fixed fuel price per litre. Without one, the price is simulated.
    pub fixed_fuel_price: Option<f64>,

    /// Seed for simulated routes and prices.
    pub simulation_seed: Option<u64>,

    /// Route cache settings.
    pub route_cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            directions_api_key: None,
            fixed_fuel_price: None,
            simulation_seed: None,
            route_cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to read each variable.
    ///
    /// Unset and blank variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(addr) = get(BIND_ADDR_VAR) {
            config.bind_addr = parse_var(BIND_ADDR_VAR, &addr)?;
        }
        if let Some(dir) = get(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(dir);
        }
        config.directions_api_key = get(DIRECTIONS_API_KEY_VAR);
        if let Some(price) = get(FUEL_PRICE_VAR) {
            let parsed: f64 = parse_var(FUEL_PRICE_VAR, &price)?;
            if !parsed.is_finite() || parsed <= 0.0 {
                return Err(ConfigError::Invalid {
                    var: FUEL_PRICE_VAR,
                    value: price,
                    reason: "must be a positive number".to_string(),
                });
            }
            config.fixed_fuel_price = Some(parsed);
        }
        if let Some(seed) = get(SIMULATION_SEED_VAR) {
            config.simulation_seed = Some(parse_var(SIMULATION_SEED_VAR, &seed)?);
        }
        if let Some(ttl) = get(ROUTE_CACHE_TTL_VAR) {
            let secs: u64 = parse_var(ROUTE_CACHE_TTL_VAR, &ttl)?;
            config.route_cache = config.route_cache.with_ttl(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the directions API key.
    pub fn with_directions_api_key(mut self, key: impl Into<String>) -> Self {
        self.directions_api_key = Some(key.into());
        self
    }

    /// Set a fixed fuel price.
    pub fn with_fixed_fuel_price(mut self, price: f64) -> Self {
        self.fixed_fuel_price = Some(price);
        self
    }

    /// Set the simulation seed.
    pub fn with_simulation_seed(mut self, seed: u64) -> Self {
        self.simulation_seed = Some(seed);
        self
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
