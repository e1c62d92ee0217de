//! Token amounts backing a liquidity position
//!
//! Mirrors the reference range-math helpers: 512-bit intermediates, floor
//! division, and the reference's division order, so results agree with
//! on-chain accounting to the last unit.

use ethers_core::types::{U256, U512};

use crate::error::AmmError;
use crate::tick_math::sqrt_price_x96_at_tick;

/// Underlying token amounts for one position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenAmounts {
    pub amount0: U256,
    pub amount1: U256,
}

fn ordered(a: U256, b: U256) -> (U256, U256) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

fn into_u256(value: U512) -> U256 {
    let mut bytes = [0u8; 64];
    value.to_big_endian(&mut bytes);
    debug_assert!(
        bytes[..32].iter().all(|b| *b == 0),
        "amount exceeded 256 bits"
    );
    U256::from_big_endian(&bytes[32..])
}

/// Token0 owed for `liquidity` between two sqrt prices:
/// `(liquidity << 96) * (sb - sa) / sb / sa`.
///
/// Dividing by the upper bound before the lower matches the reference
/// implementation. Integer division is not associative, so the order decides
/// the final unit and is a conformance requirement, not a style choice.
pub fn amount0_for_liquidity(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> U256 {
    let (sa, sb) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if liquidity == 0 || sa.is_zero() || sa == sb {
        return U256::zero();
    }
    let shifted_liquidity = U512::from(liquidity) << 96;
    let diff = U512::from(sb - sa);
    let numerator = shifted_liquidity * diff / U512::from(sb);
    into_u256(numerator / U512::from(sa))
}

/// Token1 owed for `liquidity` between two sqrt prices:
/// `liquidity * (sb - sa) >> 96`.
pub fn amount1_for_liquidity(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> U256 {
    let (sa, sb) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if liquidity == 0 || sa == sb {
        return U256::zero();
    }
    into_u256((U512::from(liquidity) * U512::from(sb - sa)) >> 96)
}

/// Splits a position's liquidity into underlying token amounts relative to
/// the current price.
///
/// All comparisons run on sqrt prices derived from the ticks, never on the
/// raw ticks, so boundary rounding agrees with the per-token formulas.
pub fn amounts_for_liquidity(
    liquidity: u128,
    tick_lower: i32,
    tick_upper: i32,
    tick_current: i32,
) -> Result<TokenAmounts, AmmError> {
    let sqrt_current = sqrt_price_x96_at_tick(tick_current)?;
    let sqrt_lower = sqrt_price_x96_at_tick(tick_lower)?;
    let sqrt_upper = sqrt_price_x96_at_tick(tick_upper)?;

    let amounts = if sqrt_current <= sqrt_lower {
        // Price below the range: the position is held entirely in token0.
        TokenAmounts {
            amount0: amount0_for_liquidity(sqrt_lower, sqrt_upper, liquidity),
            amount1: U256::zero(),
        }
    } else if sqrt_current < sqrt_upper {
        TokenAmounts {
            amount0: amount0_for_liquidity(sqrt_current, sqrt_upper, liquidity),
            amount1: amount1_for_liquidity(sqrt_lower, sqrt_current, liquidity),
        }
    } else {
        // Price at or above the range: entirely token1.
        TokenAmounts {
            amount0: U256::zero(),
            amount1: amount1_for_liquidity(sqrt_lower, sqrt_upper, liquidity),
        }
    };
    Ok(amounts)
}
