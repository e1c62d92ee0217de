//! Balance Reporter
//!
//! Command-line entry point: resolves the target deployment, reads one
//! pool's state, and prints the underlying balances per role.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use ethers::utils::format_ether;
use ethers_core::types::H256;
use tracing::info;

use balance_reporter::{underlying_pool_report, ReporterConfig, RpcClient};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Chain {
    Base,
    BaseSepolia,
}

#[derive(Debug, Parser)]
#[command(
    name = "balance_reporter",
    about = "Reports a launch pool's underlying token balances"
)]
struct Args {
    /// Pool id, 32-byte hex
    #[arg(long)]
    pool_id: String,

    /// Deployment to read from
    #[arg(long, value_enum, default_value_t = Chain::Base)]
    chain: Chain,

    /// Override the deployment's default RPC endpoint
    #[arg(long)]
    rpc_url: Option<String>,

    /// Set when the launched token is currency0 rather than currency1
    #[arg(long)]
    currency_flipped: bool,

    /// Tick spacing of the launch pool
    #[arg(long, default_value_t = 60)]
    tick_spacing: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("balance_reporter=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = match args.chain {
        Chain::Base => ReporterConfig::base(),
        Chain::BaseSepolia => ReporterConfig::base_sepolia(),
    };
    if let Some(rpc_url) = args.rpc_url {
        config.rpc_url = rpc_url;
    }
    config.tick_spacing = args.tick_spacing;

    let pool_id = args
        .pool_id
        .parse::<H256>()
        .map_err(|e| anyhow!("invalid pool id {}: {e}", args.pool_id))?;

    info!(rpc_url = %config.rpc_url, ?pool_id, "starting balance reporter");

    let client = RpcClient::new(&config)?;
    let report = underlying_pool_report(&config, &client, pool_id, args.currency_flipped).await?;

    println!("currency_flipped: {}", report.currency_flipped);
    println!(
        "total:        amount0 {}  amount1 {}",
        format_ether(report.total.amount0),
        format_ether(report.total.amount1)
    );
    println!(
        "fair launch:  amount0 {}  amount1 {}",
        format_ether(report.fair_launch.amount0),
        format_ether(report.fair_launch.amount1)
    );
    println!(
        "bid wall:     amount0 {}  amount1 {}  pending_eth {}",
        format_ether(report.bid_wall.amount0),
        format_ether(report.bid_wall.amount1),
        format_ether(report.pending_eth)
    );

    Ok(())
}
