//! RPC client for the pool manager and launch hook contracts
//!
//! Raw pool state goes through the pool manager's extsload entry points;
//! fair-launch parameters and bid-wall holdings come from the hook
//! contracts' view functions. All calls surface their failures to the
//! caller; a dead endpoint must never read as an empty pool.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ethers::abi::Abi;
use ethers::contract::Contract;
use ethers::providers::{Http, Provider};
use ethers_core::types::{Address, H256, U256};
use tracing::debug;

use launchpool_positions::{LiquiditySource, UnderlyingBalances};
use launchpool_state::{position_state, salt_from_str, StateReader};

use crate::config::ReporterConfig;

/// Pool manager ABI for single-slot reads
const EXTSLOAD_ABI: &str = r#"[{"inputs":[{"name":"slot","type":"bytes32"}],"name":"extsload","outputs":[{"name":"value","type":"bytes32"}],"stateMutability":"view","type":"function"}]"#;

/// Pool manager ABI for contiguous multi-slot reads. Kept separate from the
/// single-slot fragment so each contract handle has an unambiguous method.
const EXTSLOAD_BATCH_ABI: &str = r#"[{"inputs":[{"name":"startSlot","type":"bytes32"},{"name":"nSlots","type":"uint256"}],"name":"extsload","outputs":[{"name":"values","type":"bytes32[]"}],"stateMutability":"view","type":"function"}]"#;

/// Fair-launch hook ABI for fairLaunchInfo(). The on-chain function returns
/// a struct; its fields are listed flat here, which decodes identically.
const FAIR_LAUNCH_ABI: &str = r#"[{"inputs":[{"name":"_poolId","type":"bytes32"}],"name":"fairLaunchInfo","outputs":[{"name":"startsAt","type":"uint256"},{"name":"endsAt","type":"uint256"},{"name":"initialTick","type":"int24"},{"name":"revenue","type":"uint256"},{"name":"supply","type":"uint256"},{"name":"closed","type":"bool"}],"stateMutability":"view","type":"function"}]"#;

/// Bid-wall hook ABI for position()
const BID_WALL_ABI: &str = r#"[{"inputs":[{"name":"_poolId","type":"bytes32"}],"name":"position","outputs":[{"name":"amount0","type":"uint256"},{"name":"amount1","type":"uint256"},{"name":"pendingEth","type":"uint256"}],"stateMutability":"view","type":"function"}]"#;

/// Fair-launch parameters reported by the hook.
#[derive(Debug, Clone, Copy)]
pub struct FairLaunchInfo {
    pub starts_at: U256,
    pub ends_at: U256,
    pub initial_tick: i32,
    pub revenue: U256,
    pub supply: U256,
    pub closed: bool,
}

/// Bid-wall holdings reported by the hook: the placed amounts plus ETH
/// collected but not yet rolled into the wall.
#[derive(Debug, Clone, Copy)]
pub struct BidWallPosition {
    pub balances: UnderlyingBalances,
    pub pending_eth: U256,
}

pub struct RpcClient {
    provider: Arc<Provider<Http>>,
    pool_manager: Address,
    fair_launch: Address,
    bid_wall: Address,
}

impl RpcClient {
    pub fn new(config: &ReporterConfig) -> Result<Self> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .with_context(|| format!("invalid RPC endpoint {}", config.rpc_url))?;
        Ok(Self {
            provider: Arc::new(provider),
            pool_manager: parse_address(&config.addresses.pool_manager, "pool manager")?,
            fair_launch: parse_address(&config.addresses.fair_launch, "fair launch")?,
            bid_wall: parse_address(&config.addresses.bid_wall, "bid wall")?,
        })
    }

    pub fn pool_manager(&self) -> Address {
        self.pool_manager
    }

    /// The fair-launch hook owns the fair-launch positions in the pool
    /// manager, so its address doubles as the position owner.
    pub fn fair_launch(&self) -> Address {
        self.fair_launch
    }

    pub async fn fair_launch_info(&self, pool_id: H256) -> Result<FairLaunchInfo> {
        let contract = self.contract(self.fair_launch, FAIR_LAUNCH_ABI)?;
        let (starts_at, ends_at, initial_tick, revenue, supply, closed): (
            U256,
            U256,
            i32,
            U256,
            U256,
            bool,
        ) = contract
            .method("fairLaunchInfo", pool_id.to_fixed_bytes())?
            .call()
            .await
            .context("fairLaunchInfo call failed")?;
        debug!(?pool_id, initial_tick, closed, "fetched fair-launch info");
        Ok(FairLaunchInfo {
            starts_at,
            ends_at,
            initial_tick,
            revenue,
            supply,
            closed,
        })
    }

    pub async fn bid_wall_position(&self, pool_id: H256) -> Result<BidWallPosition> {
        let contract = self.contract(self.bid_wall, BID_WALL_ABI)?;
        let (amount0, amount1, pending_eth): (U256, U256, U256) = contract
            .method("position", pool_id.to_fixed_bytes())?
            .call()
            .await
            .context("bid wall position call failed")?;
        debug!(?pool_id, %pending_eth, "fetched bid-wall position");
        Ok(BidWallPosition {
            balances: UnderlyingBalances { amount0, amount1 },
            pending_eth,
        })
    }

    fn contract(&self, address: Address, abi_json: &str) -> Result<Contract<Provider<Http>>> {
        let abi: Abi = serde_json::from_str(abi_json).context("invalid embedded ABI")?;
        Ok(Contract::new(address, abi, Arc::clone(&self.provider)))
    }
}

#[async_trait]
impl StateReader for RpcClient {
    async fn read_word(&self, contract: Address, slot: H256) -> Result<U256> {
        let reader = self.contract(contract, EXTSLOAD_ABI)?;
        let word: [u8; 32] = reader
            .method("extsload", slot.to_fixed_bytes())?
            .call()
            .await
            .context("extsload call failed")?;
        Ok(U256::from_big_endian(&word))
    }

    async fn read_words(&self, contract: Address, slot: H256, count: usize) -> Result<Vec<U256>> {
        let reader = self.contract(contract, EXTSLOAD_BATCH_ABI)?;
        let words: Vec<[u8; 32]> = reader
            .method("extsload", (slot.to_fixed_bytes(), U256::from(count)))?
            .call()
            .await
            .context("batched extsload call failed")?;
        Ok(words.iter().map(|word| U256::from_big_endian(word)).collect())
    }
}

/// Liquidity lookup for one pool's positions, read straight from pool
/// manager storage. Launch positions all use the empty salt.
pub struct PositionSource<'a> {
    client: &'a RpcClient,
    pool_id: H256,
}

impl<'a> PositionSource<'a> {
    pub fn new(client: &'a RpcClient, pool_id: H256) -> Self {
        Self { client, pool_id }
    }
}

#[async_trait]
impl LiquiditySource for PositionSource<'_> {
    async fn position_liquidity(
        &self,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<u128> {
        let state = position_state(
            self.client,
            self.client.pool_manager,
            self.pool_id,
            owner,
            tick_lower,
            tick_upper,
            salt_from_str(""),
        )
        .await?;
        // Liquidity is a uint128 stored in its own slot; the high half of
        // the word is always zero.
        Ok(state.liquidity.low_u128())
    }
}

fn parse_address(raw: &str, label: &str) -> Result<Address> {
    raw.parse::<Address>()
        .map_err(|e| anyhow::anyhow!("invalid {label} address {raw}: {e}"))
}
