//! Packed storage-word field extraction
//!
//! Pool state is packed into single 256-bit words with fields right-aligned
//! from the low bit upward. `PackedWord` consumes those fields in order so
//! the mask/shift logic and the one subtle rule (two's-complement sign
//! extension) live in exactly one place.

use ethers_core::types::U256;

/// Low-to-high cursor over one 256-bit storage word.
#[derive(Debug, Clone, Copy)]
pub struct PackedWord {
    word: U256,
    offset: usize,
}

impl PackedWord {
    pub fn new(word: U256) -> Self {
        Self { word, offset: 0 }
    }

    /// Consumes the next `bits` as an unsigned field.
    pub fn uint(&mut self, bits: usize) -> U256 {
        debug_assert!(bits < 256 && self.offset + bits <= 256);
        let mask = (U256::one() << bits) - U256::one();
        let value = (self.word >> self.offset) & mask;
        self.offset += bits;
        value
    }

    /// Consumes the next `bits` as a two's-complement signed field.
    ///
    /// A raw value above 2^(bits-1) - 1 encodes a negative number and is
    /// shifted down by 2^bits.
    pub fn int(&mut self, bits: usize) -> i64 {
        debug_assert!(bits <= 63);
        let raw = self.uint(bits).as_u64();
        if raw > (1 << (bits - 1)) - 1 {
            raw as i64 - (1i64 << bits)
        } else {
            raw as i64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extends_negative_int24() {
        // All ones in a 24-bit field is -1.
        let mut word = PackedWord::new(U256::from(0xFFFFFFu64));
        assert_eq!(word.int(24), -1);
    }

    #[test]
    fn small_positive_int24_is_unchanged() {
        let mut word = PackedWord::new(U256::from(0x000001u64));
        assert_eq!(word.int(24), 1);
    }

    #[test]
    fn int24_domain_edges() {
        let mut word = PackedWord::new(U256::from(0x800000u64));
        assert_eq!(word.int(24), -8_388_608);

        let mut word = PackedWord::new(U256::from(0x7FFFFFu64));
        assert_eq!(word.int(24), 8_388_607);
    }

    #[test]
    fn fields_are_consumed_in_order() {
        // 8-bit fields 0x11, 0x22, 0x33 packed low to high.
        let mut word = PackedWord::new(U256::from(0x332211u64));
        assert_eq!(word.uint(8), U256::from(0x11u64));
        assert_eq!(word.uint(8), U256::from(0x22u64));
        assert_eq!(word.uint(8), U256::from(0x33u64));
    }

    #[test]
    fn zero_word_decodes_to_zero_fields() {
        let mut word = PackedWord::new(U256::zero());
        assert_eq!(word.uint(160), U256::zero());
        assert_eq!(word.int(24), 0);
    }
}
