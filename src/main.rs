use clap::{Parser, Subcommand};
use std::time::Duration;

use aurum::chains::buyable_chain;
use aurum::{init, Address, BuyUrlResolver, ChainId, PurchaseRequest};

#[derive(Parser)]
#[command(name = "aurum")]
#[command(about = "A buy URL resolver CLI for testing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a purchase or faucet URL for an address
    BuyUrl {
        /// Destination address (0x-prefixed)
        address: String,
        /// Chain to buy on
        #[arg(long, default_value = "mainnet")]
        chain: String,
        /// Service override (wyre, transak, moonpay, coinbase, or a faucet)
        #[arg(long)]
        service: Option<String>,
        /// Timeout for provider lookups, in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },
    /// List known chains and their purchase support
    ListChains,
}

fn parse_chain(chain_str: &str) -> Result<ChainId, String> {
    chain_str.parse().map_err(|_| {
        format!(
            "Invalid chain: {}. Valid options: mainnet, sepolia, holesky, hoodi, polygon, avalanche",
            chain_str
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the library
    init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::BuyUrl {
            address,
            chain,
            service,
            timeout,
        } => {
            let chain_id = parse_chain(&chain)?;
            let address = Address::from_string(&address)?;
            let resolver = BuyUrlResolver::new(Duration::from_secs(timeout))?;

            let request = PurchaseRequest {
                chain_id,
                address,
                service,
            };

            let url = resolver.resolve(&request).await?;
            if url.is_empty() {
                println!("❌ No purchase URL available");
            } else {
                println!("🔗 {}", url);
            }
        }
        Commands::ListChains => {
            for chain in ChainId::all() {
                match buyable_chain(chain) {
                    Some(meta) => println!("{}: buy {}", chain, meta.native_currency),
                    None => println!("{}: faucet only", chain),
                }
            }
        }
    }

    Ok(())
}
