//! # Wallet Provider Boundary
//!
//! The connect and mint flows talk to the wallet only through [`WalletProvider`].
//! The browser build implements it over `window.ethereum` (EIP-1193); tests use
//! an in-memory double.
//!
//! The trait is `?Send`: providers live on the single browser event loop and
//! hold JS handles.

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::dto::provider::{codes, EthTransactionRequest, ProviderErrorPayload};
use thiserror::Error;

/// Error reported by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}{}", .message, .code.map(|code| format!(" (code {})", code)).unwrap_or_default())]
pub struct ProviderError {
    /// EIP-1193 / JSON-RPC error code, when the provider supplied one
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// The error MetaMask and friends raise when a prompt is dismissed.
    pub fn user_rejected() -> Self {
        Self::with_code(codes::USER_REJECTED_REQUEST, "User rejected the request.")
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(codes::USER_REJECTED_REQUEST)
    }
}

impl From<ProviderErrorPayload> for ProviderError {
    fn from(payload: ProviderErrorPayload) -> Self {
        Self {
            code: payload.code,
            message: payload.message,
        }
    }
}

/// EIP-55 form of an address reported by the wallet.
///
/// Wallets usually answer `eth_accounts` in lowercase.
pub fn checksum_address(raw: &str) -> Result<String, ProviderError> {
    raw.trim()
        .parse::<Address>()
        .map(|address| address.to_checksum(None))
        .map_err(|e| ProviderError::new(format!("Wallet returned an invalid address {:?}: {}", raw, e)))
}

/// Capabilities the flows need from an injected wallet.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Whether a provider is present in the execution environment right now.
    ///
    /// Checked on every call: extensions may inject late.
    fn is_injected(&self) -> bool;

    /// `eth_requestAccounts`. May open a consent prompt and suspend until the
    /// user answers.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Address of the provider's active signer (first authorized account).
    async fn signer_address(&self) -> Result<String, ProviderError>;

    /// `eth_sendTransaction`. Returns the transaction hash once the wallet has
    /// signed and broadcast it.
    async fn send_transaction(&self, request: EthTransactionRequest) -> Result<String, ProviderError>;
}
