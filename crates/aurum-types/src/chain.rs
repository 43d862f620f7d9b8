use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ethereum-family networks known to the wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default)]
pub enum ChainId {
    /// Ethereum mainnet
    #[display("mainnet")]
    #[default]
    Mainnet,
    /// Sepolia testnet
    #[display("sepolia")]
    Sepolia,
    /// Holesky testnet
    #[display("holesky")]
    Holesky,
    /// Hoodi testnet
    #[display("hoodi")]
    Hoodi,
    /// Polygon PoS
    #[display("polygon")]
    Polygon,
    /// Avalanche C-Chain
    #[display("avalanche")]
    Avalanche,
}

/// Chain parsing errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain: {0}")]
pub struct ParseChainError(pub String);

impl ChainId {
    /// The 0x-prefixed chain id as carried in wallet RPC payloads
    pub fn hex_id(&self) -> &'static str {
        match self {
            ChainId::Mainnet => "0x1",
            ChainId::Sepolia => "0xaa36a7",
            ChainId::Holesky => "0x4268",
            ChainId::Hoodi => "0x88bb0",
            ChainId::Polygon => "0x89",
            ChainId::Avalanche => "0xa86a",
        }
    }

    /// Decimal network id (the numeric form of the chain id)
    pub fn network_id(&self) -> u64 {
        match self {
            ChainId::Mainnet => 1,
            ChainId::Sepolia => 11_155_111,
            ChainId::Holesky => 17_000,
            ChainId::Hoodi => 560_048,
            ChainId::Polygon => 137,
            ChainId::Avalanche => 43_114,
        }
    }

    /// Parse the 0x-prefixed wire form back into a known chain
    pub fn from_hex_id(hex_id: &str) -> Option<ChainId> {
        ChainId::all()
            .into_iter()
            .find(|chain| chain.hex_id().eq_ignore_ascii_case(hex_id))
    }

    /// Check if this is a test network
    pub fn is_testnet(&self) -> bool {
        matches!(self, ChainId::Sepolia | ChainId::Holesky | ChainId::Hoodi)
    }

    /// All known chains
    pub const fn all() -> [ChainId; 6] {
        [
            ChainId::Mainnet,
            ChainId::Sepolia,
            ChainId::Holesky,
            ChainId::Hoodi,
            ChainId::Polygon,
            ChainId::Avalanche,
        ]
    }
}

impl FromStr for ChainId {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(ChainId::Mainnet),
            "sepolia" => Ok(ChainId::Sepolia),
            "holesky" => Ok(ChainId::Holesky),
            "hoodi" => Ok(ChainId::Hoodi),
            "polygon" => Ok(ChainId::Polygon),
            "avalanche" => Ok(ChainId::Avalanche),
            _ => Err(ParseChainError(s.to_string())),
        }
    }
}
