//! # Launchpool State Library - Storage Addressing and Decoding
//!
//! ## Purpose
//!
//! Everything needed to locate and interpret a pool's raw on-chain state:
//! deterministic storage-slot derivation for the pool manager's layout,
//! packed-word field extraction, and typed decoding of pool and position
//! state. The transport that fetches the words is injected behind the
//! [`StateReader`] trait.
//!
//! ## Integration Points
//!
//! - **Input Sources**: raw 256-bit storage words from any `StateReader`
//! - **Output Destinations**: `launchpool-positions` aggregation, reporting
//! - **Guarantee**: decoding is pure and total; only transport reads fail

pub mod packed;
pub mod pool;
pub mod reader;
pub mod slots;

pub use packed::PackedWord;
pub use pool::{
    decode_liquidity, decode_pool_state, decode_position_state, PoolState, PositionState,
};
pub use reader::{pool_liquidity, pool_state, position_state, StateReader};
pub use slots::{
    liquidity_slot, pool_state_slot, position_info_slot, position_key, salt_from_str,
    LIQUIDITY_OFFSET, POOLS_SLOT, POSITIONS_OFFSET,
};
