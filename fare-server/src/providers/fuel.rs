//! Fuel price sources.

use std::ops::Range;
use std::sync::Mutex;

use rand::prelude::*;

use super::{FuelPriceProvider, ProviderError};

/// Price range, per litre, the simulated source draws from.
pub const SIMULATED_FUEL_PRICE_RANGE: Range<f64> = 150.0..180.0;

/// Where the current fuel price comes from.
pub enum FuelPriceSource {
    /// A configured price that never changes.
    Fixed(f64),
    /// A random price in [`SIMULATED_FUEL_PRICE_RANGE`].
    Simulated(Mutex<StdRng>),
}

impl FuelPriceSource {
    /// Simulated source with a fixed seed.
    pub fn simulated_with_seed(seed: u64) -> Self {
        FuelPriceSource::Simulated(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Simulated source seeded from system entropy.
    pub fn simulated() -> Self {
        FuelPriceSource::Simulated(Mutex::new(StdRng::from_entropy()))
    }

    fn sample(&self) -> Result<f64, ProviderError> {
        match self {
            FuelPriceSource::Fixed(price) if price.is_finite() && *price > 0.0 => Ok(*price),
            FuelPriceSource::Fixed(price) => Err(ProviderError::Unavailable(format!(
                "configured fuel price {price} is not positive"
            ))),
            FuelPriceSource::Simulated(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                Ok(rng.gen_range(SIMULATED_FUEL_PRICE_RANGE))
            }
        }
    }
}

impl FuelPriceProvider for FuelPriceSource {
    async fn current_price(&self) -> Result<f64, ProviderError> {
        self.sample()
    }
}
