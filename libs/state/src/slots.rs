//! Deterministic storage-slot derivation
//!
//! The pool manager exposes raw storage words; locating pool and position
//! state means reproducing Solidity's mapping-slot hashing,
//! `slot = keccak256(key ++ baseSlot)`, with struct fields at fixed offsets
//! from the hashed base.

use ethers_core::types::{Address, H256, U256};
use ethers_core::utils::keccak256;

/// Base slot of the pools mapping in the pool manager storage layout.
pub const POOLS_SLOT: u64 = 6;

/// Offset of the active-liquidity field within a pool's state struct.
pub const LIQUIDITY_OFFSET: u64 = 3;

/// Offset of the positions mapping within a pool's state struct.
pub const POSITIONS_OFFSET: u64 = 6;

fn slot_word(value: U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}

fn offset_slot(slot: H256, offset: u64) -> H256 {
    let base = U256::from_big_endian(slot.as_bytes());
    // Slot arithmetic wraps modulo 2^256, like the EVM's.
    H256::from(slot_word(base.overflowing_add(U256::from(offset)).0))
}

/// Storage slot of a pool's state struct:
/// `keccak256(poolId ++ POOLS_SLOT)`.
pub fn pool_state_slot(pool_id: H256) -> H256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(pool_id.as_bytes());
    buf[32..].copy_from_slice(&slot_word(U256::from(POOLS_SLOT)));
    H256::from(keccak256(buf))
}

/// Slot holding the pool's active liquidity.
pub fn liquidity_slot(state_slot: H256) -> H256 {
    offset_slot(state_slot, LIQUIDITY_OFFSET)
}

/// Identifying key of one liquidity position:
/// `keccak256(abi.encodePacked(owner, int24(lower), int24(upper), salt))`.
pub fn position_key(owner: Address, tick_lower: i32, tick_upper: i32, salt: H256) -> H256 {
    let mut buf = Vec::with_capacity(20 + 3 + 3 + 32);
    buf.extend_from_slice(owner.as_bytes());
    buf.extend_from_slice(&int24_bytes(tick_lower));
    buf.extend_from_slice(&int24_bytes(tick_upper));
    buf.extend_from_slice(salt.as_bytes());
    H256::from(keccak256(&buf))
}

/// Slot of the first of a position's three state words:
/// `keccak256(positionKey ++ (stateSlot + POSITIONS_OFFSET))`.
pub fn position_info_slot(state_slot: H256, position_key: H256) -> H256 {
    let positions_base = offset_slot(state_slot, POSITIONS_OFFSET);
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(position_key.as_bytes());
    buf[32..].copy_from_slice(positions_base.as_bytes());
    H256::from(keccak256(buf))
}

/// Position salt from a string, right-padded with zeros to 32 bytes. The
/// launch positions use the empty salt.
pub fn salt_from_str(salt: &str) -> H256 {
    let mut bytes = [0u8; 32];
    let raw = salt.as_bytes();
    let len = raw.len().min(32);
    bytes[..len].copy_from_slice(&raw[..len]);
    H256::from(bytes)
}

/// Big-endian two's-complement encoding of an int24, as abi.encodePacked
/// produces it.
fn int24_bytes(tick: i32) -> [u8; 3] {
    let be = ((tick as u32) & 0x00FF_FFFF).to_be_bytes();
    [be[1], be[2], be[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_id(byte: u8) -> H256 {
        H256::from([byte; 32])
    }

    #[test]
    fn pool_state_slot_is_deterministic() {
        assert_eq!(pool_state_slot(pool_id(0xAB)), pool_state_slot(pool_id(0xAB)));
        assert_ne!(pool_state_slot(pool_id(0xAB)), pool_state_slot(pool_id(0xAC)));
    }

    #[test]
    fn liquidity_slot_is_state_slot_plus_three() {
        let state_slot = pool_state_slot(pool_id(0x01));
        let base = U256::from_big_endian(state_slot.as_bytes());
        let derived = U256::from_big_endian(liquidity_slot(state_slot).as_bytes());
        assert_eq!(derived, base + U256::from(3u64));
    }

    #[test]
    fn position_key_depends_on_every_input() {
        let owner = Address::from([0x11; 20]);
        let base = position_key(owner, -60, 60, H256::zero());

        assert_ne!(base, position_key(Address::from([0x22; 20]), -60, 60, H256::zero()));
        assert_ne!(base, position_key(owner, -120, 60, H256::zero()));
        assert_ne!(base, position_key(owner, -60, 120, H256::zero()));
        assert_ne!(base, position_key(owner, -60, 60, H256::from([1u8; 32])));
    }

    #[test]
    fn position_key_encodes_negative_ticks_as_twos_complement() {
        // -60 and the unsigned tick that shares its low 24 bits must collide;
        // anything else means the int24 encoding is wrong.
        let owner = Address::from([0x11; 20]);
        let negative = position_key(owner, -60, 60, H256::zero());
        let aliased = position_key(owner, 0x00FF_FFC4, 60, H256::zero());
        assert_eq!(negative, aliased);
    }

    #[test]
    fn position_info_slot_differs_per_position() {
        let state_slot = pool_state_slot(pool_id(0x01));
        let owner = Address::from([0x11; 20]);
        let key_a = position_key(owner, -60, 60, H256::zero());
        let key_b = position_key(owner, -120, 120, H256::zero());
        assert_ne!(
            position_info_slot(state_slot, key_a),
            position_info_slot(state_slot, key_b)
        );
    }

    #[test]
    fn salt_is_right_padded() {
        assert_eq!(salt_from_str(""), H256::zero());

        let salt = salt_from_str("abc");
        assert_eq!(&salt.as_bytes()[..3], b"abc");
        assert!(salt.as_bytes()[3..].iter().all(|b| *b == 0));
    }
}
