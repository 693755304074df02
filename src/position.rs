//! Position balance from a sampled liquidity distribution.
//!
//! Each tick's liquidity is split between the two pool tokens with a fixed
//! weight. This is an approximation, not concentrated-liquidity math.

use crate::types::{PositionBalance, PositionRange, TickDistribution};

/// Share of each tick's liquidity allocated to the quote token; the rest
/// goes to the base token
pub const ALLOCATION_WEIGHT: f64 = 0.5;

/// Fold `distribution` over the inclusive range `[lower_tick, upper_tick]`.
///
/// Ticks missing from the distribution contribute nothing, and an inverted
/// range yields a zero balance.
pub fn compute_balance(
    distribution: &TickDistribution,
    lower_tick: i32,
    upper_tick: i32,
) -> PositionBalance {
    let mut balance = PositionBalance::default();

    for tick in lower_tick..=upper_tick {
        let liquidity = distribution.get(&tick).copied().unwrap_or(0) as f64;
        balance.quote_amount += liquidity * ALLOCATION_WEIGHT;
        balance.base_amount += liquidity * (1.0 - ALLOCATION_WEIGHT);
    }

    balance
}

/// [`compute_balance`] over a [`PositionRange`]
pub fn position_balance(distribution: &TickDistribution, range: PositionRange) -> PositionBalance {
    compute_balance(distribution, range.lower, range.upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(lower: i32, upper: i32, liquidity: i128) -> TickDistribution {
        (lower..=upper).map(|tick| (tick, liquidity)).collect()
    }

    #[test]
    fn test_uniform_liquidity() {
        let distribution = uniform(200540, 200560, 100);

        let balance = compute_balance(&distribution, 200540, 200560);

        assert_eq!(balance.quote_amount, 1050.0);
        assert_eq!(balance.base_amount, 1050.0);
    }

    #[test]
    fn test_empty_distribution() {
        let balance = compute_balance(&TickDistribution::new(), 200540, 200560);
        assert_eq!(balance, PositionBalance::default());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let distribution = uniform(0, 10, 100);

        let balance = compute_balance(&distribution, 10, 0);

        assert_eq!(balance.quote_amount, 0.0);
        assert_eq!(balance.base_amount, 0.0);
    }

    #[test]
    fn test_partial_overlap_counts_only_sampled_ticks() {
        // Window [200530, 200580] vs position [200570, 200600]: 11 overlapping ticks
        let distribution = uniform(200530, 200580, 10);

        let balance = position_balance(&distribution, PositionRange::new(200570, 200600));

        assert_eq!(balance.quote_amount, 55.0);
        assert_eq!(balance.base_amount, 55.0);
    }

    #[test]
    fn test_deterministic() {
        let distribution: TickDistribution =
            [(1, 3), (2, 1_000_000_007), (3, 0), (4, 12345)].into_iter().collect();

        let first = compute_balance(&distribution, 0, 5);
        let second = compute_balance(&distribution, 0, 5);

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_tick() {
        let distribution: TickDistribution = [(-7, 9)].into_iter().collect();

        let balance = compute_balance(&distribution, -7, -7);

        assert_eq!(balance.quote_amount, 4.5);
        assert_eq!(balance.base_amount, 4.5);
    }
}
