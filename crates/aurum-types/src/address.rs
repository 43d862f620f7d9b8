use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ethereum account address (0x-prefixed, 20 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Into, Serialize)]
pub struct Address(String);

/// Address validation errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Empty address string")]
    EmptyAddress,

    #[error("Address missing 0x prefix")]
    MissingPrefix,

    #[error("Invalid address format")]
    InvalidFormat,

    #[error("Address must encode 20 bytes, got {0}")]
    InvalidLength(usize),
}

impl Address {
    /// Create address from string with hex validation
    pub fn from_string(address_str: &str) -> Result<Self, AddressError> {
        let address_str = address_str.trim();
        if address_str.is_empty() {
            return Err(AddressError::EmptyAddress);
        }

        let hex_part = address_str
            .strip_prefix("0x")
            .ok_or(AddressError::MissingPrefix)?;

        let bytes = hex::decode(hex_part).map_err(|_| AddressError::InvalidFormat)?;
        if bytes.len() != 20 {
            return Err(AddressError::InvalidLength(bytes.len()));
        }

        Ok(Self(address_str.to_string()))
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_string(s)
    }
}

/// Validate an address string
pub fn validate_address(address_str: &str) -> Result<(), AddressError> {
    Address::from_string(address_str)?;
    Ok(())
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_string(&s).map_err(serde::de::Error::custom)
    }
}
