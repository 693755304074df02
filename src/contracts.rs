/// Contract type definitions using Alloy sol! macro
/// These match the Uniswap V3 pool view functions used for historical state calls

use alloy::sol;

// UniswapV3 Pool interface
sol! {
    #[sol(rpc)]
    interface IUniswapV3Pool {
        /// In-range liquidity of the pool
        function liquidity() external view returns (uint128);

        /// Tick info stored in the ticks mapping
        function ticks(int24 tick) external view returns (
            uint128 liquidityGross,
            int128 liquidityNet,
            uint256 feeGrowthOutside0X128,
            uint256 feeGrowthOutside1X128,
            int56 tickCumulativeOutside,
            uint160 secondsPerLiquidityOutsideX128,
            uint32 secondsOutside,
            bool initialized
        );
    }
}

// The generated call types provide ABI encoding for eth_call and
// decoding of the returned tuple via alloy::sol_types
