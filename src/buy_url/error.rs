use aurum_types::ChainId;
use thiserror::Error;

/// Buy URL resolution errors
#[derive(Debug, Error)]
pub enum BuyUrlError {
    #[error("no cryptocurrency exchange or faucet for chain: {0}")]
    UnsupportedChain(ChainId),

    #[error("unknown cryptocurrency exchange or faucet: \"{0}\"")]
    UnsupportedService(String),
}

/// Result type alias for buy URL resolution
pub type Result<T> = std::result::Result<T, BuyUrlError>;
