//! # Launchpool AMM Library - Concentrated-Liquidity Mathematics
//!
//! ## Purpose
//!
//! Exact fixed-point math for concentrated-liquidity pools: tick to
//! sqrt-price conversion, tick-spacing rounding, and the conversion of a
//! liquidity magnitude over a price range into the two underlying token
//! amounts. Results are bit-exact against the reference pool manager so
//! derived balances agree with on-chain accounting.
//!
//! ## Integration Points
//!
//! - **Input Sources**: decoded pool/position state from `launchpool-state`
//! - **Output Destinations**: the position aggregator in
//!   `launchpool-positions`, reporting services
//! - **Precision**: 512-bit intermediates; no floating point anywhere

pub mod error;
pub mod liquidity_math;
pub mod tick_math;

pub use error::AmmError;
pub use liquidity_math::{
    amount0_for_liquidity, amount1_for_liquidity, amounts_for_liquidity, TokenAmounts,
};
pub use tick_math::{
    nearest_usable_tick, sqrt_price_x96_at_tick, tick_at_sqrt_price_x96, MAX_SQRT_PRICE_X96,
    MAX_TICK, MAX_USABLE_TICK, MIN_SQRT_PRICE_X96, MIN_TICK, MIN_USABLE_TICK, Q96,
};
