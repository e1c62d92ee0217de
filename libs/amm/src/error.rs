//! Math-level errors
//!
//! The only failure mode in this crate is an input outside the valid tick or
//! sqrt-price domain. Everything else is total: decoded chain state always
//! produces an answer.

use ethers_core::types::U256;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// Tick outside the global conversion domain. Fatal to the single
    /// computation, not to the process.
    #[error("tick {tick} is outside the valid tick domain [-887272, 887272]")]
    TickOutOfRange { tick: i32 },

    /// Sqrt price outside [MIN_SQRT_PRICE_X96, MAX_SQRT_PRICE_X96).
    #[error("sqrt price {sqrt_price_x96} is outside the valid price domain")]
    SqrtPriceOutOfRange { sqrt_price_x96: U256 },
}
