//! # Launchpool Positions Library - Sub-Position Aggregation
//!
//! ## Purpose
//!
//! Models a launch pool's liquidity as three tagged sub-positions (the
//! quote-only and token-only fair-launch ranges plus the bid-wall floor),
//! derives their tick geometry from the pool's launch parameters, and
//! aggregates their underlying token balances at the current price.
//!
//! ## Integration Points
//!
//! - **Input Sources**: pool geometry and a [`LiquiditySource`] backed by
//!   `launchpool-state` reads
//! - **Output Destinations**: reporting services
//! - **Guarantee**: totals are overflow-checked; lookup failures propagate

pub mod aggregator;
pub mod error;
pub mod sub_position;

pub use aggregator::{
    pool_wide_balances, sub_position_balances, sub_positions, underlying_balances,
    FairLaunchConfig, LiquiditySource, UnderlyingBalances,
};
pub use error::AggregateError;
pub use sub_position::{eth_only_range, meme_only_range, SubPosition, TickRange};
