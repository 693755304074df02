//! Run configuration.
//!
//! Every value is a compiled-in constant; only the RPC endpoint may be
//! overridden through the `RPC_URL` environment variable (or a `.env` file).

use alloy_primitives::{address, Address};

use crate::error::ConfigError;
use crate::tick_math;
use crate::types::{PositionRange, TickWindow};

/// Local archive node; historical `eth_call`s need archive state
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8545";

/// USDC/WETH 0.05% pool on Uniswap V3
pub const POOL_ADDRESS: Address = address!("88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640");

pub const START_BLOCK: u64 = 17618642;
pub const END_BLOCK: u64 = 17618742;

pub const TICK_WINDOW_LOWER: i32 = 200530;
pub const TICK_WINDOW_UPPER: i32 = 200580;

pub const POSITION_TICK_LOWER: i32 = 200540;
pub const POSITION_TICK_UPPER: i32 = 200560;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: String,
    pub pool_address: Address,
    /// Block the liquidity distribution is sampled at
    pub start_block: u64,
    /// Block the fee distribution is sampled at
    pub end_block: u64,
    pub tick_window: TickWindow,
    pub position: PositionRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            pool_address: POOL_ADDRESS,
            start_block: START_BLOCK,
            end_block: END_BLOCK,
            tick_window: TickWindow::new(TICK_WINDOW_LOWER, TICK_WINDOW_UPPER),
            position: PositionRange::new(POSITION_TICK_LOWER, POSITION_TICK_UPPER),
        }
    }
}

impl Config {
    /// Defaults with the endpoint taken from `RPC_URL` when set
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Ok(url) = std::env::var("RPC_URL") {
            if !url.trim().is_empty() {
                config.endpoint_url = url;
            }
        }
        config
    }

    /// Check the sampling window. An empty position range is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let TickWindow { lower, upper } = self.tick_window;

        if self.tick_window.is_empty() {
            return Err(ConfigError::EmptyTickWindow { lower, upper });
        }
        for tick in [lower, upper] {
            if !tick_math::is_valid_tick(tick) {
                return Err(ConfigError::TickOutOfRange(tick));
            }
        }

        Ok(())
    }
}
