//! # Contract Deployment
//!
//! Publishes the collection contract to the configured network and prints its
//! address. Settings come from the environment (see [`config`]).
//!
//! ```text
//! GOERLI_RPC_URL=https://... PRIVATE_KEY=0x... cargo run -p deploy
//! ```

mod config;
mod factory;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, SOLIDITY_VERSION};
use factory::{ContractArtifact, ContractFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    config.validate()?;
    info!(
        network = %config.network.name,
        solidity = SOLIDITY_VERSION,
        artifact = %config.artifact_path.display(),
        "Loaded deployment config"
    );

    if config.network.accounts.is_empty() {
        warn!("PRIVATE_KEY is not set, no account can sign the deployment");
    }
    if config.etherscan_api_key.is_none() {
        warn!("ETHERSCAN_KEY is not set, the contract cannot be verified on the explorer");
    }

    let factory = ContractFactory::new(ContractArtifact::load(&config.artifact_path)?)?;
    let deployment = factory.deploy(&config).await?;

    info!(hash = %deployment.transaction_hash, deployer = %deployment.deployer, "Deployment confirmed");
    println!("{} deployed to: {}", factory.name(), deployment.address);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
