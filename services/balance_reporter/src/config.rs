//! Configuration for the balance reporter

use serde::{Deserialize, Serialize};

/// Contract addresses of one deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainAddresses {
    /// Pool manager exposing raw storage via extsload
    pub pool_manager: String,

    /// Fair-launch hook; also the owner of the fair-launch positions
    pub fair_launch: String,

    /// Bid-wall hook
    pub bid_wall: String,
}

impl ChainAddresses {
    pub fn base() -> Self {
        Self {
            pool_manager: "0x498581fF718922c3f8e6A244956aF099B2652b2b".to_string(),
            fair_launch: "0xCc7A4A00072ccbeEEbd999edc812C0ce498Fb63B".to_string(),
            bid_wall: "0x66681f10BA90496241A25e33380004f30Dfd8aa8".to_string(),
        }
    }

    pub fn base_sepolia() -> Self {
        Self {
            pool_manager: "0x05E73354cFDd6745C338b50BcFDfA3Aa6fA03408".to_string(),
            fair_launch: "0x11A7F055DF05626cC6a1671161A4c51e4eb3B219".to_string(),
            bid_wall: "0xF077b0298c3e4348e80E8C7e19C991CD6dD8bd59".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// RPC endpoint
    pub rpc_url: String,

    /// Deployment to read from
    pub addresses: ChainAddresses,

    /// Tick spacing of launch pools
    pub tick_spacing: i32,
}

impl ReporterConfig {
    pub fn base() -> Self {
        Self {
            rpc_url: "https://mainnet.base.org".to_string(),
            addresses: ChainAddresses::base(),
            tick_spacing: 60,
        }
    }

    pub fn base_sepolia() -> Self {
        Self {
            rpc_url: "https://sepolia.base.org".to_string(),
            addresses: ChainAddresses::base_sepolia(),
            tick_spacing: 60,
        }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self::base()
    }
}
