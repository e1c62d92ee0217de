//! Launch-pool sub-positions
//!
//! A launch pool's liquidity lives in three distinct roles: a narrow
//! quote-only fair-launch range, a token-only fair-launch range stretching
//! to the usable tick bound, and a bid-wall price floor. Each role is a
//! tagged variant so downstream code can attribute balances per role instead
//! of guessing from tick coordinates.

use ethers_core::types::U256;

use launchpool_amm::{nearest_usable_tick, MAX_USABLE_TICK, MIN_USABLE_TICK};

/// Tick boundaries of one range position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    /// Boundaries must be ordered; a reversed range is a derivation bug.
    pub fn new(lower: i32, upper: i32) -> Self {
        debug_assert!(lower < upper, "reversed tick range [{lower}, {upper}]");
        Self { lower, upper }
    }
}

/// One of a launch pool's liquidity roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPosition {
    /// Fair-launch range holding only the quote currency, one spacing wide.
    EthOnly(TickRange),
    /// Fair-launch range holding the launched token supply.
    MemeOnly(TickRange),
    /// Price-floor position; its amounts come precomputed from the hook
    /// contract rather than from liquidity math.
    BidWall { amount0: U256, amount1: U256 },
}

/// Range of the quote-only fair-launch position.
///
/// It starts one tick past the initial tick, rounded onto the spacing away
/// from the initial price, so it never overlaps the token-only range. Which
/// side of the initial tick it sits on follows the pool's currency order.
pub fn eth_only_range(initial_tick: i32, currency_flipped: bool, spacing: i32) -> TickRange {
    if currency_flipped {
        let upper = nearest_usable_tick(initial_tick - 1, spacing, true);
        TickRange::new(upper - spacing, upper)
    } else {
        let lower = nearest_usable_tick(initial_tick + 1, spacing, false);
        TickRange::new(lower, lower + spacing)
    }
}

/// Range of the token-only fair-launch position, from one tick past the
/// initial tick out to the usable tick bound on the opposite side of the
/// quote-only range.
pub fn meme_only_range(initial_tick: i32, currency_flipped: bool, spacing: i32) -> TickRange {
    if currency_flipped {
        let lower = nearest_usable_tick(initial_tick + 1, spacing, false);
        TickRange::new(lower, MAX_USABLE_TICK)
    } else {
        let upper = nearest_usable_tick(initial_tick - 1, spacing, true);
        TickRange::new(MIN_USABLE_TICK, upper)
    }
}
