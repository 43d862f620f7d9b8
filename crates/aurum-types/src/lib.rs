pub mod chain;
pub mod address;

pub use chain::{ChainId, ParseChainError};
pub use address::{Address, AddressError, validate_address};
