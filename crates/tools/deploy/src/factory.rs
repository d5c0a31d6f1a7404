//! # Contract Factory
//!
//! Loads a compiled Hardhat artifact and publishes it to the configured
//! network with the first configured account.
//!
//! ```text
//! artifacts/contracts/SougenGenesis.sol/SougenGenesis.json
//! {
//!   "contractName": "SougenGenesis",
//!   "abi": [...],
//!   "bytecode": "0x6080..."
//! }
//! ```

use std::fs;
use std::path::Path;

use alloy::json_abi::ContractObject;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::http::reqwest::Url;
use shared::utils::truncate_address;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, ConfigError};

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("No deployable account configured for network {0}")]
    NoAccounts(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Deployment transaction {0} has no contract address in its receipt")]
    MissingContractAddress(TxHash),
}

/// Compiled contract as written by the Hardhat compiler task.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub object: ContractObject,
}

impl ContractArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeployError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| DeployError::Artifact(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, DeployError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| DeployError::Artifact(format!("Failed to parse artifact: {}", e)))?;

        let contract_name = value
            .get("contractName")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| DeployError::Artifact("Artifact has no contractName".to_string()))?
            .to_string();

        // ContractObject deserializes map keys as borrowed `&str`, so it must
        // be read from the original string rather than from a `Value`.
        let object: ContractObject = serde_json::from_str(json)
            .map_err(|e| DeployError::Artifact(format!("Invalid artifact for {}: {}", contract_name, e)))?;

        Ok(Self {
            contract_name,
            object,
        })
    }

    /// Creation bytecode. Abstract contracts and interfaces have none.
    pub fn creation_code(&self) -> Result<Bytes, DeployError> {
        self.object
            .bytecode
            .clone()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| {
                DeployError::Artifact(format!(
                    "{} has no bytecode; it may be abstract or an interface",
                    self.contract_name
                ))
            })
    }
}

/// Result of a successful deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub deployer: Address,
}

pub struct ContractFactory {
    name: String,
    creation_code: Bytes,
}

impl ContractFactory {
    pub fn new(artifact: ContractArtifact) -> Result<Self, DeployError> {
        let creation_code = artifact.creation_code()?;
        debug!(
            contract = %artifact.contract_name,
            abi_items = artifact.object.abi.as_ref().map_or(0, |abi| abi.len()),
            code_size = creation_code.len(),
            "Loaded contract artifact"
        );
        Ok(Self {
            name: artifact.contract_name,
            creation_code,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contract creation transaction (no recipient, bytecode as input).
    pub fn deployment_request(&self) -> TransactionRequest {
        TransactionRequest::default().with_deploy_code(self.creation_code.clone())
    }

    /// Deploy with the first configured account and wait for the receipt.
    pub async fn deploy(&self, config: &Config) -> Result<Deployment, DeployError> {
        let network = &config.network;
        let signer = network
            .signers()?
            .into_iter()
            .next()
            .ok_or_else(|| DeployError::NoAccounts(network.name.clone()))?;

        let url: Url = network
            .url
            .as_deref()
            .ok_or(ConfigError::MissingEnv("GOERLI_RPC_URL"))?
            .parse::<Url>()
            .map_err(|e| DeployError::Rpc(format!("Invalid RPC URL: {}", e)))?;

        let deployer = signer.address();
        info!(
            contract = %self.name,
            network = %network.name,
            deployer = %truncate_address(&deployer.to_checksum(None)),
            "Deploying contract"
        );

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url);

        let pending = provider
            .send_transaction(self.deployment_request())
            .await
            .map_err(|e| DeployError::Rpc(e.to_string()))?;

        let transaction_hash = *pending.tx_hash();
        debug!(hash = %transaction_hash, "Deployment transaction sent");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| DeployError::Rpc(e.to_string()))?;

        let address = receipt
            .contract_address
            .ok_or(DeployError::MissingContractAddress(transaction_hash))?;

        Ok(Deployment {
            address,
            transaction_hash,
            deployer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxKind;
    use std::path::PathBuf;

    const ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "SougenGenesis",
        "sourceName": "contracts/SougenGenesis.sol",
        "abi": [{ "inputs": [], "stateMutability": "nonpayable", "type": "constructor" }],
        "bytecode": "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe",
        "deployedBytecode": "0x6080604052600080fdfe",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    fn temp_artifact(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("artifact-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn config_without_keys() -> Config {
        Config::from_lookup(|name| match name {
            "GOERLI_RPC_URL" => Some("http://127.0.0.1:8545".to_string()),
            _ => None,
        })
    }

    #[test]
    fn test_load_artifact() {
        let path = temp_artifact(ARTIFACT);
        let artifact = ContractArtifact::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(artifact.contract_name, "SougenGenesis");
        assert!(artifact.object.abi.as_ref().is_some_and(|abi| abi.constructor.is_some()));
        assert_eq!(artifact.creation_code().unwrap()[..2], [0x60, 0x80]);
    }

    #[test]
    fn test_missing_artifact_file() {
        let err = ContractArtifact::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, DeployError::Artifact(_)));
    }

    #[test]
    fn test_artifact_without_name() {
        let err = ContractArtifact::from_json(r#"{"abi":[],"bytecode":"0x6080"}"#).unwrap_err();
        assert!(matches!(err, DeployError::Artifact(ref msg) if msg.contains("contractName")));
    }

    #[test]
    fn test_interface_has_no_bytecode() {
        let artifact = ContractArtifact::from_json(
            r#"{"contractName":"IERC721","abi":[],"bytecode":"0x"}"#,
        )
        .unwrap();

        assert!(ContractFactory::new(artifact).is_err());
    }

    #[test]
    fn test_deployment_request_is_contract_creation() {
        let factory = ContractFactory::new(ContractArtifact::from_json(ARTIFACT).unwrap()).unwrap();
        let request = factory.deployment_request();

        assert_eq!(factory.name(), "SougenGenesis");
        assert_eq!(request.to, Some(TxKind::Create));
        assert_eq!(request.input.input(), Some(&factory.creation_code));
    }

    #[tokio::test]
    async fn test_deploy_without_accounts_fails_before_rpc() {
        let factory = ContractFactory::new(ContractArtifact::from_json(ARTIFACT).unwrap()).unwrap();

        let err = factory.deploy(&config_without_keys()).await.unwrap_err();
        assert!(matches!(err, DeployError::NoAccounts(ref network) if network == "goerli"));
    }
}
