/// Tick math utilities for UniswapV3 pools

/// Minimum and maximum tick values for full range
pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = 887272;

/// Whether a tick lies inside the pool's valid tick range
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Number of ticks in an inclusive range, zero when `lower > upper`
pub fn tick_count(lower: i32, upper: i32) -> usize {
    if lower > upper {
        return 0;
    }
    (i64::from(upper) - i64::from(lower) + 1) as usize
}
