pub mod buy_url;
pub mod chains;

// Re-export types from our crates
pub use aurum_common::{setup_logging, AurumError, DEFAULT_BUY_URL_TIMEOUT};
pub use aurum_types::*;

// Re-export buy URL types
pub use buy_url::{
    error::{BuyUrlError, Result as BuyUrlResult},
    BuyUrlResolver, PurchaseRequest, Service,
};

/// Initialize the Aurum wallet library
pub fn init() -> aurum_common::Result<()> {
    aurum_common::setup_logging()?;
    tracing::info!("Aurum wallet library initialized");
    Ok(())
}
