//! Injected Ethereum provider via wasm-bindgen
//!
//! JavaScript interop for `window.ethereum` (EIP-1193). Every call goes
//! through `request({ method, params })`; thrown errors are normalized to
//! `{ code, message, data }` before they cross into Rust.

use async_trait::async_trait;
use lib_core::{ProviderError, WalletProvider};
use serde::{de::DeserializeOwned, Serialize};
use shared::dto::provider::{EthTransactionRequest, ProviderErrorPayload, RpcRequest};
use wasm_bindgen::prelude::*;

// ============================================================================
// PROVIDER ACCESS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function isEthereumInjected() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function ethereumRequest(args) {
    if (!window.ethereum) {
        throw { message: 'No injected Ethereum provider' };
    }
    try {
        return await window.ethereum.request(args);
    } catch (error) {
        if (error && typeof error === 'object') {
            throw {
                code: typeof error.code === 'number' ? error.code : undefined,
                message: String(error.message ?? error),
                data: error.data,
            };
        }
        throw { message: String(error) };
    }
}
")]
extern "C" {
    fn isEthereumInjected() -> bool;

    #[wasm_bindgen(catch)]
    async fn ethereumRequest(args: JsValue) -> Result<JsValue, JsValue>;
}

// ============================================================================
// CONVERSIONS
// ============================================================================

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, ProviderError> {
    // Plain objects, not Maps, for the provider
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| ProviderError::new(format!("Failed to encode request: {}", e)))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, ProviderError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ProviderError::new(format!("Unexpected provider response: {}", e)))
}

fn provider_error(value: JsValue) -> ProviderError {
    match serde_wasm_bindgen::from_value::<ProviderErrorPayload>(value.clone()) {
        Ok(payload) => payload.into(),
        Err(_) => ProviderError::new(value.as_string().unwrap_or_else(|| format!("{:?}", value))),
    }
}

async fn request<T: DeserializeOwned>(request: RpcRequest) -> Result<T, ProviderError> {
    log::debug!("ethereum.request {}", request.method);
    let args = to_js(&request)?;
    let result = ethereumRequest(args).await.map_err(provider_error)?;
    from_js(result)
}

// ============================================================================
// WALLET PROVIDER
// ============================================================================

/// `window.ethereum`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserProvider;

#[async_trait(?Send)]
impl WalletProvider for BrowserProvider {
    fn is_injected(&self) -> bool {
        isEthereumInjected()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        request(RpcRequest::new("eth_requestAccounts")).await
    }

    async fn signer_address(&self) -> Result<String, ProviderError> {
        let accounts: Vec<String> = request(RpcRequest::new("eth_accounts")).await?;
        accounts
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::new("Wallet has no authorized account"))
    }

    async fn send_transaction(&self, transaction: EthTransactionRequest) -> Result<String, ProviderError> {
        let rpc = RpcRequest::new("eth_sendTransaction")
            .with_param(transaction)
            .map_err(|e| ProviderError::new(format!("Failed to encode transaction: {}", e)))?;
        request(rpc).await
    }
}
