//! Exact tick / sqrt-price conversion
//!
//! Reproduces the pool manager's fixed-point formula bit for bit. The amount
//! math downstream mixes prices derived here with prices decoded from chain
//! state, so an approximation would shift balances at the last unit.

use ethers_core::types::U256;
use once_cell::sync::Lazy;

use crate::error::AmmError;

/// Tick domain accepted by the conversion functions.
pub const MIN_TICK: i32 = -887_272;
pub const MAX_TICK: i32 = 887_272;

/// Widest ticks aligned to the launch pools' 60-tick spacing. Fair-launch
/// range derivation is bounded by these, not by the full conversion domain;
/// the two bounds are intentionally distinct.
pub const MIN_USABLE_TICK: i32 = -887_220;
pub const MAX_USABLE_TICK: i32 = 887_220;

/// Sqrt price at `MIN_TICK`.
pub static MIN_SQRT_PRICE_X96: Lazy<U256> = Lazy::new(|| U256::from(4_295_128_739u64));

/// Sqrt price at `MAX_TICK`. Exclusive upper bound for the inverse
/// conversion.
pub static MAX_SQRT_PRICE_X96: Lazy<U256> = Lazy::new(|| {
    U256::from_dec_str("1461446703485210103287273052203988822378723970342")
        .expect("constant fits in 256 bits")
});

/// 2^96, the fixed-point scale of SqrtPriceX96.
pub static Q96: Lazy<U256> = Lazy::new(|| U256::one() << 96);

/// Q128.128 values of sqrt(1.0001^-(2^n)) for n = 1..=19. Bit 0 of the tick
/// magnitude is folded into the ladder's starting value instead.
const SQRT_RATIO_MULTIPLIERS: [u128; 19] = [
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x09aa508b5b7a84e1c677de54f3e99bc9,
    0x05d6af8dedb81196699c329225ee604,
    0x02216e584f5fa1ea926041bedfe98,
    0x048a170391f7dc42444e8fa2,
];

/// Computes sqrt(1.0001^tick) * 2^96.
///
/// The ladder multiplies Q128.128 constants for each set bit of |tick|,
/// inverts for positive ticks, then rounds up into Q64.96.
pub fn sqrt_price_x96_at_tick(tick: i32) -> Result<U256, AmmError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(AmmError::TickOutOfRange { tick });
    }
    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(0xfffcb933bd6fad37aa2d162d1a594001u128)
    } else {
        U256::one() << 128
    };
    for (bit, multiplier) in SQRT_RATIO_MULTIPLIERS.iter().enumerate() {
        if abs_tick & (1u32 << (bit + 1)) != 0 {
            ratio = (ratio * U256::from(*multiplier)) >> 128;
        }
    }

    // The ladder computed the ratio for -|tick|; invert for positive ticks.
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so flooring the inverse conversion
    // lands back on the input tick.
    let shifted = ratio >> 32;
    if (ratio & ((U256::one() << 32) - U256::one())).is_zero() {
        Ok(shifted)
    } else {
        Ok(shifted + U256::one())
    }
}

/// Largest tick whose sqrt price is at most the input.
///
/// Binary search over the exact forward conversion: exact for on-grid
/// inputs, floor otherwise.
pub fn tick_at_sqrt_price_x96(sqrt_price_x96: U256) -> Result<i32, AmmError> {
    if sqrt_price_x96 < *MIN_SQRT_PRICE_X96 || sqrt_price_x96 >= *MAX_SQRT_PRICE_X96 {
        return Err(AmmError::SqrtPriceOutOfRange { sqrt_price_x96 });
    }
    let mut lo = MIN_TICK;
    let mut hi = MAX_TICK;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if sqrt_price_x96_at_tick(mid)? <= sqrt_price_x96 {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Ok(lo)
}

/// Rounds a tick to the pool's tick spacing with the pool manager's
/// floor-division convention. `round_down = false` selects the next aligned
/// tick above instead.
pub fn nearest_usable_tick(tick: i32, spacing: i32, round_down: bool) -> i32 {
    if tick % spacing == 0 {
        return tick;
    }

    // Rust integer division truncates toward zero; a misaligned negative
    // tick needs one more step down to match floor semantics.
    let mut rounded = (tick / spacing) * spacing;
    if tick < 0 {
        rounded -= spacing;
    }
    if !round_down {
        rounded += spacing;
    }
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tick_zero_is_exactly_q96() {
        assert_eq!(sqrt_price_x96_at_tick(0).unwrap(), *Q96);
        assert_eq!(
            sqrt_price_x96_at_tick(0).unwrap(),
            U256::from_dec_str("79228162514264337593543950336").unwrap()
        );
    }

    #[test]
    fn domain_edges_match_reference_values() {
        assert_eq!(sqrt_price_x96_at_tick(MIN_TICK).unwrap(), *MIN_SQRT_PRICE_X96);
        assert_eq!(sqrt_price_x96_at_tick(MAX_TICK).unwrap(), *MAX_SQRT_PRICE_X96);
    }

    #[test]
    fn out_of_domain_ticks_are_rejected() {
        assert_eq!(
            sqrt_price_x96_at_tick(MIN_TICK - 1),
            Err(AmmError::TickOutOfRange { tick: MIN_TICK - 1 })
        );
        assert_eq!(
            sqrt_price_x96_at_tick(MAX_TICK + 1),
            Err(AmmError::TickOutOfRange { tick: MAX_TICK + 1 })
        );
    }

    #[test]
    fn out_of_domain_prices_are_rejected() {
        assert!(tick_at_sqrt_price_x96(*MIN_SQRT_PRICE_X96 - U256::one()).is_err());
        // Upper bound is exclusive.
        assert!(tick_at_sqrt_price_x96(*MAX_SQRT_PRICE_X96).is_err());
    }

    #[test]
    fn usable_bound_is_spacing_aligned() {
        assert_eq!(MAX_USABLE_TICK % 60, 0);
        assert_eq!(MIN_USABLE_TICK, -MAX_USABLE_TICK);
        assert!(MAX_USABLE_TICK < MAX_TICK);
    }

    #[test]
    fn rounding_is_identity_on_aligned_ticks() {
        for tick in [-887_220, -60, 0, 60, 887_220] {
            assert_eq!(nearest_usable_tick(tick, 60, true), tick);
            assert_eq!(nearest_usable_tick(tick, 60, false), tick);
        }
    }

    #[test]
    fn rounding_floors_negative_ticks() {
        // Truncation alone would give -60; floor semantics demand -120.
        assert_eq!(nearest_usable_tick(-61, 60, true), -120);
        assert_eq!(nearest_usable_tick(-61, 60, false), -60);
        assert_eq!(nearest_usable_tick(-1, 60, true), -60);
        assert_eq!(nearest_usable_tick(-1, 60, false), 0);
    }

    #[test]
    fn rounding_truncates_positive_ticks() {
        assert_eq!(nearest_usable_tick(61, 60, true), 60);
        assert_eq!(nearest_usable_tick(61, 60, false), 120);
        assert_eq!(nearest_usable_tick(1, 60, true), 0);
        assert_eq!(nearest_usable_tick(1, 60, false), 60);
    }

    proptest! {
        #[test]
        fn sqrt_price_is_monotonic(a in MIN_TICK..MAX_TICK, b in MIN_TICK..MAX_TICK) {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(
                sqrt_price_x96_at_tick(lo).unwrap() <= sqrt_price_x96_at_tick(hi).unwrap()
            );
        }

        #[test]
        fn round_trip_recovers_the_tick(tick in MIN_TICK..MAX_TICK) {
            let sqrt_price = sqrt_price_x96_at_tick(tick).unwrap();
            let recovered = tick_at_sqrt_price_x96(sqrt_price).unwrap();
            prop_assert!((recovered - tick).abs() <= 1);
        }

        #[test]
        fn rounding_is_idempotent(tick in -887_220i32..=887_220, down: bool) {
            let rounded = nearest_usable_tick(tick, 60, down);
            prop_assert_eq!(nearest_usable_tick(rounded, 60, down), rounded);
        }
    }
}
