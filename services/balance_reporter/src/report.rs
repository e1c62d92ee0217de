//! Balance report assembly
//!
//! Composes one pool's report from three reads taken as close together as
//! the transport allows: fair-launch parameters, the pool's current tick,
//! and the bid-wall holdings. Fair-launch liquidity is then resolved
//! per-position and valued at the current tick.

use anyhow::Result;
use ethers_core::types::{H256, U256};
use tracing::info;

use launchpool_positions::{
    sub_position_balances, FairLaunchConfig, SubPosition, UnderlyingBalances,
};
use launchpool_state::pool_state;

use crate::config::ReporterConfig;
use crate::rpc::{PositionSource, RpcClient};

/// A pool's underlying balances, broken out by role.
///
/// `pending_eth` is ETH the bid wall has collected but not yet placed; it
/// is reported alongside the totals but never added to them, since it is
/// not pool liquidity yet.
#[derive(Debug, Clone, Copy)]
pub struct BalanceReport {
    pub currency_flipped: bool,
    pub total: UnderlyingBalances,
    pub fair_launch: UnderlyingBalances,
    pub bid_wall: UnderlyingBalances,
    pub pending_eth: U256,
}

/// Builds the full underlying-balance report for one pool.
pub async fn underlying_pool_report(
    config: &ReporterConfig,
    client: &RpcClient,
    pool_id: H256,
    currency_flipped: bool,
) -> Result<BalanceReport> {
    let info = client.fair_launch_info(pool_id).await?;
    let state = pool_state(client, client.pool_manager(), pool_id).await?;
    let bid_wall = client.bid_wall_position(pool_id).await?;

    let cfg = FairLaunchConfig {
        initial_tick: info.initial_tick,
        currency_flipped,
        tick_spacing: config.tick_spacing,
        owner: client.fair_launch(),
    };
    let source = PositionSource::new(client, pool_id);
    let resolved = sub_position_balances(&cfg, state.tick, bid_wall.balances, &source).await?;

    let mut total = UnderlyingBalances::default();
    let mut fair_launch = UnderlyingBalances::default();
    for (position, balances) in &resolved {
        total = total.checked_add(*balances)?;
        if !matches!(position, SubPosition::BidWall { .. }) {
            fair_launch = fair_launch.checked_add(*balances)?;
        }
    }

    info!(
        ?pool_id,
        tick = state.tick,
        initial_tick = info.initial_tick,
        "assembled balance report"
    );
    Ok(BalanceReport {
        currency_flipped,
        total,
        fair_launch,
        bid_wall: bid_wall.balances,
        pending_eth: bid_wall.pending_eth,
    })
}
