//! # Balance Reporter Service
//!
//! ## Purpose
//!
//! Reads a launch pool's on-chain state over RPC and reports the underlying
//! token balances held across its fair-launch and bid-wall positions:
//! per-role subtotals, the checked grand total, and the bid wall's pending
//! ETH.
//!
//! ## Integration Points
//!
//! - **Input Sources**: pool manager storage via extsload, hook view calls
//! - **Output Destinations**: CLI report, structured logs
//! - **Libraries**: `launchpool-state` for addressing and decoding,
//!   `launchpool-positions` for aggregation

pub mod config;
pub mod report;
pub mod rpc;

pub use config::{ChainAddresses, ReporterConfig};
pub use report::{underlying_pool_report, BalanceReport};
pub use rpc::{BidWallPosition, FairLaunchInfo, PositionSource, RpcClient};
