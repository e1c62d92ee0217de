//! Underlying-balance aggregation across a launch pool's sub-positions
//!
//! The aggregator derives the pool's fair-launch ranges, resolves each
//! sub-position's liquidity through an injected [`LiquiditySource`], converts
//! liquidity to token amounts at the current tick, and sums the results with
//! overflow checks. Transport failures surface to the caller untouched.

use anyhow::Result;
use async_trait::async_trait;
use ethers_core::types::{Address, U256};
use tracing::debug;

use launchpool_amm::{amounts_for_liquidity, AmmError, TokenAmounts, MAX_TICK, MIN_TICK};

use crate::error::AggregateError;
use crate::sub_position::{eth_only_range, meme_only_range, SubPosition};

/// Resolves a range position's liquidity, typically by reading the pool
/// manager's position state over RPC.
#[async_trait]
pub trait LiquiditySource {
    async fn position_liquidity(
        &self,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<u128>;
}

/// Underlying reserves of one or more positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnderlyingBalances {
    pub amount0: U256,
    pub amount1: U256,
}

impl UnderlyingBalances {
    pub fn checked_add(self, other: Self) -> Result<Self, AggregateError> {
        let amount0 = self
            .amount0
            .checked_add(other.amount0)
            .ok_or(AggregateError::BalanceOverflow)?;
        let amount1 = self
            .amount1
            .checked_add(other.amount1)
            .ok_or(AggregateError::BalanceOverflow)?;
        Ok(Self { amount0, amount1 })
    }
}

impl From<TokenAmounts> for UnderlyingBalances {
    fn from(amounts: TokenAmounts) -> Self {
        Self {
            amount0: amounts.amount0,
            amount1: amounts.amount1,
        }
    }
}

/// Pool-level inputs that fix the fair-launch position geometry.
#[derive(Debug, Clone, Copy)]
pub struct FairLaunchConfig {
    /// Tick the pool was initialized at.
    pub initial_tick: i32,
    /// Whether the launched token is currency0 rather than currency1.
    pub currency_flipped: bool,
    pub tick_spacing: i32,
    /// Holder of the fair-launch positions in the pool manager.
    pub owner: Address,
}

/// Builds the pool's three sub-positions from its launch geometry and the
/// hook-reported bid-wall amounts.
pub fn sub_positions(cfg: &FairLaunchConfig, bid_wall: UnderlyingBalances) -> [SubPosition; 3] {
    [
        SubPosition::EthOnly(eth_only_range(
            cfg.initial_tick,
            cfg.currency_flipped,
            cfg.tick_spacing,
        )),
        SubPosition::MemeOnly(meme_only_range(
            cfg.initial_tick,
            cfg.currency_flipped,
            cfg.tick_spacing,
        )),
        SubPosition::BidWall {
            amount0: bid_wall.amount0,
            amount1: bid_wall.amount1,
        },
    ]
}

/// Resolves every sub-position to its underlying amounts at `current_tick`.
///
/// Range variants go through liquidity lookup and range math; the bid wall
/// passes its precomputed amounts straight through. All variants are handled
/// in one place so a new role cannot be added without deciding how it is
/// valued.
pub async fn sub_position_balances<S>(
    cfg: &FairLaunchConfig,
    current_tick: i32,
    bid_wall: UnderlyingBalances,
    source: &S,
) -> Result<Vec<(SubPosition, UnderlyingBalances)>>
where
    S: LiquiditySource + ?Sized + Sync,
{
    let mut resolved = Vec::with_capacity(3);
    for position in sub_positions(cfg, bid_wall) {
        let balances = match position {
            SubPosition::EthOnly(range) | SubPosition::MemeOnly(range) => {
                let liquidity = source
                    .position_liquidity(cfg.owner, range.lower, range.upper)
                    .await?;
                UnderlyingBalances::from(amounts_for_liquidity(
                    liquidity,
                    range.lower,
                    range.upper,
                    current_tick,
                )?)
            }
            SubPosition::BidWall { amount0, amount1 } => UnderlyingBalances { amount0, amount1 },
        };
        debug!(?position, ?balances, "resolved sub-position");
        resolved.push((position, balances));
    }
    Ok(resolved)
}

/// Total underlying reserves of the pool at `current_tick`: the checked sum
/// over all sub-positions.
pub async fn underlying_balances<S>(
    cfg: &FairLaunchConfig,
    current_tick: i32,
    bid_wall: UnderlyingBalances,
    source: &S,
) -> Result<UnderlyingBalances>
where
    S: LiquiditySource + ?Sized + Sync,
{
    let mut total = UnderlyingBalances::default();
    for (_, balances) in sub_position_balances(cfg, current_tick, bid_wall, source).await? {
        total = total.checked_add(balances)?;
    }
    Ok(total)
}

/// Underlying amounts of the pool's active liquidity treated as one
/// full-range position. A coarse whole-pool view that ignores per-position
/// ranges; useful as a sanity bound on the per-position totals.
pub fn pool_wide_balances(liquidity: u128, current_tick: i32) -> Result<UnderlyingBalances, AmmError> {
    Ok(UnderlyingBalances::from(amounts_for_liquidity(
        liquidity, MIN_TICK, MAX_TICK, current_tick,
    )?))
}
