use std::time::Duration;

/// Wallet backend API serving signed on-ramp URLs
pub static ONRAMP_API_BASE_URL: &str = "https://onramp.aurum.app/v2";

/// Default timeout for on-ramp URL lookups
pub static DEFAULT_BUY_URL_TIMEOUT: Duration = Duration::from_secs(30);

/// Wyre hosted checkout, used when the on-ramp API is unreachable
pub static WYRE_PURCHASE_BASE_URL: &str = "https://pay.sendwyre.com/purchase";
pub static WYRE_ACCOUNT_ID: &str = "AC-F4GWA7EQ8JM";

/// Transak hosted widget
pub static TRANSAK_BASE_URL: &str = "https://global.transak.com/";
pub static TRANSAK_API_KEY: &str = "29f1b312-10e2-4f92-9c3c-6a65c54a3b0f";
pub static TRANSAK_HOST_URL: &str = "https://aurum.app";

/// MoonPay purchase page, wrapped by the backend signing endpoint
pub static MOONPAY_BUY_BASE_URL: &str = "https://buy.moonpay.com";
pub static MOONPAY_API_KEY: &str = "pk_live_DMRuVL6ACXWBhrUAH5bJKxHvd";

/// Coinbase Pay hosted flow
pub static COINBASE_PAY_BASE_URL: &str = "https://pay.coinbase.com/buy";
pub static COINBASE_PAY_APP_ID: &str = "b7f04fcd83dd2cdbd2ab0a34db8ddbf2";

/// Faucets for test networks
pub static SEPOLIA_FAUCET_URL: &str = "https://sepoliafaucet.com/";
pub static HOLESKY_FAUCET_URL: &str = "https://holesky-faucet.pk910.de/";
pub static HOODI_FAUCET_URL: &str = "https://hoodi-faucet.pk910.de/";
