use std::collections::BTreeMap;

use alloy_primitives::{Address, B256, U256};
use serde::Serialize;

use crate::contracts::IUniswapV3Pool;
use crate::error::QueryError;
use crate::tick_math;

/// Per-tick sampled values, iterated in ascending tick order
pub type TickDistribution = BTreeMap<i32, i128>;

/// Inclusive, contiguous window of ticks that gets sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickWindow {
    pub lower: i32,
    pub upper: i32,
}

impl TickWindow {
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Ticks of the window in ascending order
    pub fn ticks(&self) -> impl Iterator<Item = i32> {
        self.lower..=self.upper
    }

    pub fn len(&self) -> usize {
        tick_math::tick_count(self.lower, self.upper)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inclusive tick range of a user position. May extend past the sampled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionRange {
    pub lower: i32,
    pub upper: i32,
}

impl PositionRange {
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }
}

/// A block resolved on the node, used to pin state calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockHandle {
    pub number: u64,
    pub hash: B256,
    pub timestamp: u64,
}

/// Which positional field of the `ticks()` record to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickField {
    /// Position 0: `liquidityGross`
    Liquidity,
    /// Position 1 of the record, charted as fee growth
    FeeGrowth,
}

/// Tick data for V3 pools, as returned by `ticks(int24)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickRecord {
    pub tick: i32,
    pub liquidity_gross: u128,
    pub liquidity_net: i128,
    pub fee_growth_outside_0_x128: U256,
    pub fee_growth_outside_1_x128: U256,
    pub tick_cumulative_outside: i64,
    pub seconds_per_liquidity_outside_x128: U256,
    pub seconds_outside: u32,
    pub initialized: bool,
}

impl TickRecord {
    /// Convert the ABI return tuple into native types
    pub fn from_call(tick: i32, ret: IUniswapV3Pool::ticksReturn) -> Self {
        Self {
            tick,
            liquidity_gross: ret.liquidityGross,
            liquidity_net: ret.liquidityNet,
            fee_growth_outside_0_x128: ret.feeGrowthOutside0X128,
            fee_growth_outside_1_x128: ret.feeGrowthOutside1X128,
            tick_cumulative_outside: ret.tickCumulativeOutside.as_i64(),
            seconds_per_liquidity_outside_x128: U256::from(ret.secondsPerLiquidityOutsideX128),
            seconds_outside: ret.secondsOutside,
            initialized: ret.initialized,
        }
    }

    /// Extract the selected field as a signed integer
    pub fn field(&self, field: TickField) -> Result<i128, QueryError> {
        match field {
            TickField::Liquidity => {
                i128::try_from(self.liquidity_gross).map_err(|_| QueryError::Overflow {
                    tick: self.tick,
                    field: "liquidityGross",
                })
            }
            TickField::FeeGrowth => Ok(self.liquidity_net),
        }
    }
}

/// Two-token balance of a position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionBalance {
    /// USDC for the configured pool
    pub quote_amount: f64,
    /// WETH for the configured pool
    pub base_amount: f64,
}

/// Complete output of one historical run
#[derive(Debug, Clone, Serialize)]
pub struct PoolHistoryReport {
    pub pool_address: Address,
    pub start_block: BlockHandle,
    pub end_block: BlockHandle,
    /// Aggregate in-range liquidity at the start block, if the call succeeded
    pub pool_liquidity: Option<u128>,
    pub liquidity: TickDistribution,
    pub fees: TickDistribution,
    pub position: PositionRange,
    pub balance: PositionBalance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::aliases::{I56, U160};

    #[test]
    fn test_tick_window_iterates_ascending() {
        let window = TickWindow::new(-2, 2);
        let ticks: Vec<i32> = window.ticks().collect();
        assert_eq!(ticks, vec![-2, -1, 0, 1, 2]);
        assert_eq!(window.len(), 5);
        assert!(!window.is_empty());
        assert!(TickWindow::new(3, 2).is_empty());
    }

    #[test]
    fn test_tick_record_from_call() {
        let ret = IUniswapV3Pool::ticksReturn {
            liquidityGross: 1_000,
            liquidityNet: -250,
            feeGrowthOutside0X128: U256::from(11u64),
            feeGrowthOutside1X128: U256::from(22u64),
            tickCumulativeOutside: I56::try_from(-42i64).unwrap(),
            secondsPerLiquidityOutsideX128: U160::from(7u64),
            secondsOutside: 99,
            initialized: true,
        };

        let record = TickRecord::from_call(200540, ret);

        assert_eq!(record.tick, 200540);
        assert_eq!(record.liquidity_gross, 1_000);
        assert_eq!(record.liquidity_net, -250);
        assert_eq!(record.tick_cumulative_outside, -42);
        assert_eq!(record.seconds_per_liquidity_outside_x128, U256::from(7u64));
        assert_eq!(record.seconds_outside, 99);
        assert!(record.initialized);
    }

    #[test]
    fn test_field_selection_is_positional() {
        let record = TickRecord {
            tick: 1,
            liquidity_gross: 500,
            liquidity_net: -20,
            ..Default::default()
        };

        assert_eq!(record.field(TickField::Liquidity).unwrap(), 500);
        assert_eq!(record.field(TickField::FeeGrowth).unwrap(), -20);
    }

    #[test]
    fn test_liquidity_overflow_is_an_error() {
        let record = TickRecord {
            tick: 5,
            liquidity_gross: u128::MAX,
            ..Default::default()
        };

        assert!(matches!(
            record.field(TickField::Liquidity),
            Err(QueryError::Overflow { tick: 5, .. })
        ));
    }
}
