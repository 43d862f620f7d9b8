pub mod error;

use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use aurum_common::consts::{
    COINBASE_PAY_APP_ID, COINBASE_PAY_BASE_URL, HOLESKY_FAUCET_URL, HOODI_FAUCET_URL,
    MOONPAY_API_KEY, MOONPAY_BUY_BASE_URL, ONRAMP_API_BASE_URL, SEPOLIA_FAUCET_URL,
    TRANSAK_API_KEY, TRANSAK_BASE_URL, TRANSAK_HOST_URL, WYRE_ACCOUNT_ID, WYRE_PURCHASE_BASE_URL,
};
use aurum_types::{Address, ChainId};

use crate::buy_url::error::{BuyUrlError, Result};
use crate::chains::{buyable_chain, ChainMetadata};

/// Attribution tag sent to providers that track the referring surface
const WALLET_CONTEXT_TAG: &str = "extension";

/// Purchase and faucet services the resolver can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Service {
    #[display("wyre")]
    Wyre,
    #[display("transak")]
    Transak,
    #[display("moonpay")]
    MoonPay,
    #[display("coinbase")]
    CoinbasePay,
    #[display("sepolia-faucet")]
    SepoliaFaucet,
    #[display("holesky-faucet")]
    HoleskyFaucet,
    #[display("hoodi-faucet")]
    HoodiFaucet,
}

impl Service {
    /// Default service for chains that have one: mainnet buys through
    /// Wyre, the test networks point at their faucets
    pub fn default_for_chain(chain_id: ChainId) -> Result<Self> {
        match chain_id {
            ChainId::Mainnet => Ok(Service::Wyre),
            ChainId::Sepolia => Ok(Service::SepoliaFaucet),
            ChainId::Holesky => Ok(Service::HoleskyFaucet),
            ChainId::Hoodi => Ok(Service::HoodiFaucet),
            _ => Err(BuyUrlError::UnsupportedChain(chain_id)),
        }
    }
}

impl FromStr for Service {
    type Err = BuyUrlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wyre" => Ok(Service::Wyre),
            "transak" => Ok(Service::Transak),
            "moonpay" => Ok(Service::MoonPay),
            "coinbase" => Ok(Service::CoinbasePay),
            "sepolia-faucet" => Ok(Service::SepoliaFaucet),
            "holesky-faucet" => Ok(Service::HoleskyFaucet),
            "hoodi-faucet" => Ok(Service::HoodiFaucet),
            _ => Err(BuyUrlError::UnsupportedService(s.to_string())),
        }
    }
}

/// A single buy URL request; not persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub chain_id: ChainId,
    pub address: Address,
    /// Explicit service name; when absent the chain's default is used
    pub service: Option<String>,
}

/// What a network-assisted provider yields when its lookup fails
enum UrlFallback {
    /// Statically built URL; resolution always yields a usable result
    Static(String),
    /// Empty string; callers see no navigable URL
    Empty,
}

/// Response body of the backend URL endpoints
#[derive(Debug, Deserialize)]
struct SignedUrlResponse {
    url: Option<String>,
}

/// Entry in the Coinbase Pay `destinationWallets` parameter
#[derive(Debug, Serialize)]
struct DestinationWallet<'a> {
    address: &'a str,
    assets: &'a [&'a str],
}

/// Resolves purchase and faucet URLs for a destination address.
///
/// Two providers (Wyre, MoonPay) fetch their URL from the wallet backend;
/// those lookups are bounded by the construction timeout and never fail the
/// call: Wyre falls back to a static checkout URL, MoonPay to an empty
/// string.
pub struct BuyUrlResolver {
    client: Client,
    api_base: String,
}

impl BuyUrlResolver {
    /// Create a resolver whose provider lookups are bounded by `timeout`
    pub fn new(timeout: Duration) -> eyre::Result<Self> {
        Self::with_api_base(timeout, ONRAMP_API_BASE_URL)
    }

    /// Create a resolver against a specific on-ramp API base URL
    pub fn with_api_base(timeout: Duration, api_base: impl Into<String>) -> eyre::Result<Self> {
        let api_base = api_base.into();
        let api_base = api_base.trim_end_matches('/').to_string();
        Url::parse(&api_base)?;

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_base })
    }

    /// Resolve the purchase or faucet URL for a request
    pub async fn resolve(&self, request: &PurchaseRequest) -> Result<String> {
        let service = match &request.service {
            Some(name) => name.parse::<Service>()?,
            None => Service::default_for_chain(request.chain_id)?,
        };

        match service {
            Service::Wyre => self.wyre_url(request.chain_id, &request.address).await,
            Service::Transak => transak_url(request.chain_id, &request.address),
            Service::MoonPay => self.moonpay_url(request.chain_id, &request.address).await,
            Service::CoinbasePay => coinbase_pay_url(request.chain_id, &request.address),
            Service::SepoliaFaucet => Ok(SEPOLIA_FAUCET_URL.to_string()),
            Service::HoleskyFaucet => Ok(HOLESKY_FAUCET_URL.to_string()),
            Service::HoodiFaucet => Ok(HOODI_FAUCET_URL.to_string()),
        }
    }

    /// Ask the backend for a Wyre checkout URL, falling back to the static
    /// hosted checkout built from the chain's Wyre metadata
    async fn wyre_url(&self, chain_id: ChainId, address: &Address) -> Result<String> {
        let chain = metadata(chain_id)?;

        let request_url = format!(
            "{}/networks/{}/fiatOnRampUrl?serviceName=wyre&destinationAddress={}",
            self.api_base,
            chain_id.network_id(),
            address
        );
        let fallback = format!(
            "{}?dest={}:{}&destCurrency={}&accountId={}&paymentMethod=debit-card",
            WYRE_PURCHASE_BASE_URL,
            chain.wyre.srn,
            address,
            chain.wyre.currency_code,
            WYRE_ACCOUNT_ID
        );

        Ok(self
            .fetch_signed_url(&request_url, UrlFallback::Static(fallback), "Wyre")
            .await)
    }

    /// Ask the backend to sign a MoonPay purchase URL; failure yields an
    /// empty string rather than a fallback
    async fn moonpay_url(&self, chain_id: ChainId, address: &Address) -> Result<String> {
        let chain = metadata(chain_id)?;

        let inner = Url::parse_with_params(
            MOONPAY_BUY_BASE_URL,
            [
                ("apiKey", MOONPAY_API_KEY),
                ("walletAddress", address.as_str()),
                ("defaultCurrencyCode", chain.moonpay.default_currency_code),
                ("showOnlyCurrencies", chain.moonpay.show_only_currencies),
            ],
        )
        .expect("static base url");

        let sign_url = Url::parse_with_params(
            &format!("{}/moonpaySign/", self.api_base),
            [("url", inner.as_str()), ("context", WALLET_CONTEXT_TAG)],
        )
        .expect("api base validated at construction");

        Ok(self
            .fetch_signed_url(sign_url.as_str(), UrlFallback::Empty, "MoonPay")
            .await)
    }

    /// GET a provider URL from the backend, masking any failure with the
    /// provider's fallback
    async fn fetch_signed_url(&self, url: &str, fallback: UrlFallback, provider: &str) -> String {
        match self.fetch_url_field(url).await {
            Ok(signed) => signed,
            Err(err) => {
                tracing::warn!(provider, error = %err, "failed to create a purchase URL");
                match fallback {
                    UrlFallback::Static(url) => url,
                    UrlFallback::Empty => String::new(),
                }
            }
        }
    }

    async fn fetch_url_field(&self, url: &str) -> eyre::Result<String> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            eyre::bail!("unexpected status {}", response.status());
        }

        let body: SignedUrlResponse = response.json().await?;
        match body.url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => eyre::bail!("response missing url field"),
        }
    }
}

/// Build the Transak widget URL; no network call involved
fn transak_url(chain_id: ChainId, address: &Address) -> Result<String> {
    let chain = metadata(chain_id)?;
    let currency_list = chain.transak_currencies.join(",");

    let url = Url::parse_with_params(
        TRANSAK_BASE_URL,
        [
            ("apiKey", TRANSAK_API_KEY),
            ("hostURL", TRANSAK_HOST_URL),
            ("cryptoCurrencyList", currency_list.as_str()),
            ("defaultCryptoCurrency", chain.transak_currencies[0]),
            ("networks", chain.transak_network),
            ("walletAddress", address.as_str()),
        ],
    )
    .expect("static base url");

    Ok(url.into())
}

/// Build the Coinbase Pay URL; no network call involved
fn coinbase_pay_url(chain_id: ChainId, address: &Address) -> Result<String> {
    let chain = metadata(chain_id)?;

    let wallets = serde_json::to_string(&[DestinationWallet {
        address: address.as_str(),
        assets: chain.coinbase_pay_currencies,
    }])
    .expect("string-only struct serializes");

    let url = Url::parse_with_params(
        COINBASE_PAY_BASE_URL,
        [
            ("appId", COINBASE_PAY_APP_ID),
            ("attribution", WALLET_CONTEXT_TAG),
            ("destinationWallets", wallets.as_str()),
        ],
    )
    .expect("static base url");

    Ok(url.into())
}

fn metadata(chain_id: ChainId) -> Result<&'static ChainMetadata> {
    buyable_chain(chain_id).ok_or(BuyUrlError::UnsupportedChain(chain_id))
}
