//! # Deployment Configuration
//!
//! Network and credential settings loaded from environment variables
//! (a `.env` file is read first by `main`).
//!
//! | Variable | Required | Meaning |
//! |---|---|---|
//! | `GOERLI_RPC_URL` | yes | JSON-RPC endpoint of the target network |
//! | `PRIVATE_KEY` | no | Deployer key; absent means no deployable account |
//! | `ETHERSCAN_KEY` | no | Block explorer API key |
//! | `DEPLOY_ARTIFACT` | no | Compiled contract artifact, defaults to [`DEFAULT_ARTIFACT`] |
//!
//! Empty values count as unset.

use std::env;
use std::path::PathBuf;

use alloy::signers::local::PrivateKeySigner;
use thiserror::Error;

/// Compiler version the contracts are built with.
pub const SOLIDITY_VERSION: &str = "0.8.17";

/// Name of the configured network.
pub const NETWORK_NAME: &str = "goerli";

/// Hardhat artifact of the collection contract.
pub const DEFAULT_ARTIFACT: &str = "artifacts/contracts/SougenGenesis.sol/SougenGenesis.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    MissingEnv(&'static str),

    #[error("{name} must be an http(s) URL, got {value}")]
    InvalidUrl { name: &'static str, value: String },

    #[error("Invalid private key for network {0}")]
    InvalidKey(String),
}

/// One deployable network.
#[derive(Clone)]
pub struct NetworkConfig {
    pub name: String,
    pub url: Option<String>,
    /// Raw private keys, in order. Empty when none is configured.
    pub accounts: Vec<String>,
}

impl NetworkConfig {
    /// Parsed signers for every configured key.
    pub fn signers(&self) -> Result<Vec<PrivateKeySigner>, ConfigError> {
        self.accounts
            .iter()
            .map(|key| {
                key.parse::<PrivateKeySigner>()
                    .map_err(|_| ConfigError::InvalidKey(self.name.clone()))
            })
            .collect()
    }
}

// Keys stay out of debug output
impl std::fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("accounts", &self.accounts.len())
            .finish()
    }
}

#[derive(Clone)]
pub struct Config {
    pub network: NetworkConfig,
    pub etherscan_api_key: Option<String>,
    pub artifact_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Never fails: missing values are reported by [`validate`](Self::validate).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let accounts = var("PRIVATE_KEY").into_iter().collect();

        Self {
            network: NetworkConfig {
                name: NETWORK_NAME.to_string(),
                url: var("GOERLI_RPC_URL"),
                accounts,
            },
            etherscan_api_key: var("ETHERSCAN_KEY"),
            artifact_path: var("DEPLOY_ARTIFACT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT)),
        }
    }

    /// Validate the values needed to deploy.
    ///
    /// A missing private key is not an error here: the account list is simply
    /// empty and deployment fails later with no signer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self
            .network
            .url
            .as_deref()
            .ok_or(ConfigError::MissingEnv("GOERLI_RPC_URL"))?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                name: "GOERLI_RPC_URL",
                value: url.to_string(),
            });
        }

        self.network.signers()?;
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("network", &self.network)
            .field("etherscan_api_key", &self.etherscan_api_key.as_ref().map(|_| "<set>"))
            .field("artifact_path", &self.artifact_path)
            .finish()
    }
}
