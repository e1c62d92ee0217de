//! Decoded pool and position state
//!
//! Decoding is pure and total: any 256-bit word maps to field values, and a
//! never-written slot is indistinguishable from genuinely zero state. There
//! is deliberately no malformed-word error.

use ethers_core::types::U256;
use serde::{Deserialize, Serialize};

use crate::packed::PackedWord;

/// A pool's packed slot0 word, unpacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub protocol_fee: u32,
    pub lp_fee: u32,
}

/// One position's three consecutive state words, unpacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionState {
    pub liquidity: U256,
    pub fee_growth_inside0_x128: U256,
    pub fee_growth_inside1_x128: U256,
}

/// Unpacks slot0 from the low bits upward: sqrtPriceX96 (uint160), tick
/// (int24), protocolFee (uint24), lpFee (uint24). The remaining high bits
/// are reserved.
pub fn decode_pool_state(word: U256) -> PoolState {
    let mut fields = PackedWord::new(word);
    PoolState {
        sqrt_price_x96: fields.uint(160),
        tick: fields.int(24) as i32,
        protocol_fee: fields.uint(24).as_u32(),
        lp_fee: fields.uint(24).as_u32(),
    }
}

/// The liquidity slot holds a plain unsigned integer.
pub fn decode_liquidity(word: U256) -> U256 {
    word
}

/// Position words in slot order: liquidity, feeGrowthInside0LastX128,
/// feeGrowthInside1LastX128.
pub fn decode_position_state(words: [U256; 3]) -> PositionState {
    PositionState {
        liquidity: words[0],
        fee_growth_inside0_x128: words[1],
        fee_growth_inside1_x128: words[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_slot0(sqrt_price_x96: U256, tick: i32, protocol_fee: u32, lp_fee: u32) -> U256 {
        sqrt_price_x96
            | (U256::from((tick as u32) & 0x00FF_FFFF) << 160)
            | (U256::from(protocol_fee) << 184)
            | (U256::from(lp_fee) << 208)
    }

    #[test]
    fn unpacks_all_slot0_fields() {
        let sqrt_price = U256::from_dec_str("79228162514264337593543950336").unwrap();
        let state = decode_pool_state(pack_slot0(sqrt_price, 12_345, 400, 3_000));
        assert_eq!(
            state,
            PoolState {
                sqrt_price_x96: sqrt_price,
                tick: 12_345,
                protocol_fee: 400,
                lp_fee: 3_000,
            }
        );
    }

    #[test]
    fn recovers_negative_ticks() {
        let state = decode_pool_state(pack_slot0(U256::from(1u64), -205_032, 0, 500));
        assert_eq!(state.tick, -205_032);

        // All-ones tick field is -1, the sign-extension edge.
        let state = decode_pool_state(pack_slot0(U256::zero(), -1, 0, 0));
        assert_eq!(state.tick, -1);
    }

    #[test]
    fn zero_word_is_zero_state() {
        assert_eq!(decode_pool_state(U256::zero()), PoolState::default());
        assert_eq!(decode_liquidity(U256::zero()), U256::zero());
        assert_eq!(
            decode_position_state([U256::zero(); 3]),
            PositionState::default()
        );
    }

    #[test]
    fn position_words_map_in_slot_order() {
        let state = decode_position_state([
            U256::from(7u64),
            U256::from(11u64),
            U256::from(13u64),
        ]);
        assert_eq!(state.liquidity, U256::from(7u64));
        assert_eq!(state.fee_growth_inside0_x128, U256::from(11u64));
        assert_eq!(state.fee_growth_inside1_x128, U256::from(13u64));
    }
}
