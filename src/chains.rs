use aurum_types::ChainId;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Wyre routing fields for a chain's native asset
#[derive(Debug, Clone, Copy)]
pub struct WyreMetadata {
    /// Wyre system resource name, e.g. "ethereum"
    pub srn: &'static str,
    pub currency_code: &'static str,
}

/// MoonPay currency codes for a chain
#[derive(Debug, Clone, Copy)]
pub struct MoonPayMetadata {
    pub default_currency_code: &'static str,
    /// Comma-joined list in MoonPay's own currency code format
    pub show_only_currencies: &'static str,
}

/// Per-chain static record of purchase provider metadata.
///
/// Providers read only the fields they need; chains without an entry
/// (the test networks) cannot be bought on and fall back to faucets.
#[derive(Debug, Clone, Copy)]
pub struct ChainMetadata {
    pub native_currency: &'static str,
    /// Network name Transak uses for this chain
    pub transak_network: &'static str,
    /// Currencies purchasable through Transak; never empty, the first
    /// entry is the default
    pub transak_currencies: &'static [&'static str],
    pub moonpay: MoonPayMetadata,
    pub wyre: WyreMetadata,
    /// Assets offered through Coinbase Pay
    pub coinbase_pay_currencies: &'static [&'static str],
}

const BUYABLE_CHAINS: &[(ChainId, ChainMetadata)] = &[
    (
        ChainId::Mainnet,
        ChainMetadata {
            native_currency: "ETH",
            transak_network: "ethereum",
            transak_currencies: &["ETH", "USDT", "USDC", "DAI"],
            moonpay: MoonPayMetadata {
                default_currency_code: "eth",
                show_only_currencies: "eth,usdt,usdc,dai",
            },
            wyre: WyreMetadata {
                srn: "ethereum",
                currency_code: "ETH",
            },
            coinbase_pay_currencies: &["ETH", "USDC", "DAI"],
        },
    ),
    (
        ChainId::Polygon,
        ChainMetadata {
            native_currency: "POL",
            transak_network: "polygon",
            transak_currencies: &["POL", "USDT", "USDC", "DAI"],
            moonpay: MoonPayMetadata {
                default_currency_code: "pol_polygon",
                show_only_currencies: "pol_polygon,usdc_polygon",
            },
            wyre: WyreMetadata {
                srn: "matic",
                currency_code: "MATIC",
            },
            coinbase_pay_currencies: &["POL", "USDC", "DAI"],
        },
    ),
    (
        ChainId::Avalanche,
        ChainMetadata {
            native_currency: "AVAX",
            transak_network: "avaxcchain",
            transak_currencies: &["AVAX"],
            moonpay: MoonPayMetadata {
                default_currency_code: "avax_cchain",
                show_only_currencies: "avax_cchain,usdc_cchain",
            },
            wyre: WyreMetadata {
                srn: "avalanchec",
                currency_code: "AVAX",
            },
            coinbase_pay_currencies: &["AVAX"],
        },
    ),
];

static BUYABLE_CHAIN_MAP: Lazy<HashMap<ChainId, ChainMetadata>> =
    Lazy::new(|| BUYABLE_CHAINS.iter().copied().collect());

/// Look up purchase provider metadata for a chain
pub fn buyable_chain(chain_id: ChainId) -> Option<&'static ChainMetadata> {
    BUYABLE_CHAIN_MAP.get(&chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_is_buyable() {
        let chain = buyable_chain(ChainId::Mainnet).unwrap();
        assert_eq!(chain.native_currency, "ETH");
        assert_eq!(chain.wyre.srn, "ethereum");
    }

    #[test]
    fn test_testnets_are_not_buyable() {
        assert!(buyable_chain(ChainId::Sepolia).is_none());
        assert!(buyable_chain(ChainId::Holesky).is_none());
        assert!(buyable_chain(ChainId::Hoodi).is_none());
    }

    #[test]
    fn test_transak_currency_lists_are_never_empty() {
        for (chain_id, chain) in BUYABLE_CHAINS {
            assert!(
                !chain.transak_currencies.is_empty(),
                "empty transak currency list for {chain_id}"
            );
            assert!(!chain.coinbase_pay_currencies.is_empty());
        }
    }

    #[test]
    fn test_default_transak_currency_is_native() {
        for (_, chain) in BUYABLE_CHAINS {
            assert_eq!(chain.transak_currencies[0], chain.native_currency);
        }
    }
}
