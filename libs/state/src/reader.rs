//! Raw state-reading boundary
//!
//! The transport that actually fetches storage words is injected behind
//! `StateReader`; this module composes slot derivation and decoding on top
//! of it. Read failures propagate unmodified: substituting zero would make a
//! dead transport indistinguishable from an empty position and silently
//! corrupt aggregate totals.

use anyhow::{ensure, Result};
use async_trait::async_trait;
use ethers_core::types::{Address, H256, U256};
use tracing::debug;

use crate::pool::{
    decode_liquidity, decode_pool_state, decode_position_state, PoolState, PositionState,
};
use crate::slots::{liquidity_slot, pool_state_slot, position_info_slot, position_key};

/// Raw storage access on a contract.
///
/// Implementations should serve all reads of one computation from the same
/// block snapshot; mixing a fresh price with stale liquidity skews totals.
#[async_trait]
pub trait StateReader {
    async fn read_word(&self, contract: Address, slot: H256) -> Result<U256>;

    /// Reads `count` contiguous slots starting at `slot`.
    async fn read_words(&self, contract: Address, slot: H256, count: usize) -> Result<Vec<U256>>;
}

/// Fetches and decodes a pool's slot0 word.
pub async fn pool_state<R>(reader: &R, manager: Address, pool_id: H256) -> Result<PoolState>
where
    R: StateReader + ?Sized + Sync,
{
    let word = reader.read_word(manager, pool_state_slot(pool_id)).await?;
    let state = decode_pool_state(word);
    debug!(?pool_id, tick = state.tick, "decoded pool state");
    Ok(state)
}

/// Fetches the pool's active liquidity.
pub async fn pool_liquidity<R>(reader: &R, manager: Address, pool_id: H256) -> Result<U256>
where
    R: StateReader + ?Sized + Sync,
{
    let slot = liquidity_slot(pool_state_slot(pool_id));
    let word = reader.read_word(manager, slot).await?;
    Ok(decode_liquidity(word))
}

/// Fetches and decodes the three state words of one position.
#[allow(clippy::too_many_arguments)]
pub async fn position_state<R>(
    reader: &R,
    manager: Address,
    pool_id: H256,
    owner: Address,
    tick_lower: i32,
    tick_upper: i32,
    salt: H256,
) -> Result<PositionState>
where
    R: StateReader + ?Sized + Sync,
{
    let state_slot = pool_state_slot(pool_id);
    let key = position_key(owner, tick_lower, tick_upper, salt);
    let slot = position_info_slot(state_slot, key);
    let words = reader.read_words(manager, slot, 3).await?;
    ensure!(words.len() == 3, "expected 3 position words, got {}", words.len());
    debug!(?owner, tick_lower, tick_upper, "decoded position state");
    Ok(decode_position_state([words[0], words[1], words[2]]))
}
