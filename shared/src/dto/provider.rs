use serde::{Deserialize, Serialize};

/// EIP-1193 error codes reported by injected providers
pub mod codes {
    /// The user rejected the request
    pub const USER_REJECTED_REQUEST: i64 = 4001;
    /// The requested method and/or account has not been authorized by the user
    pub const UNAUTHORIZED: i64 = 4100;
    /// The provider does not support the requested method
    pub const UNSUPPORTED_METHOD: i64 = 4200;
    /// The provider is disconnected from all chains
    pub const DISCONNECTED: i64 = 4900;
    /// The provider is not connected to the requested chain
    pub const CHAIN_DISCONNECTED: i64 = 4901;
}

/// `eth_sendTransaction` parameter object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EthTransactionRequest {
    pub from: String,
    pub to: String,
    /// Hex quantity in wei
    pub value: String,
    /// Hex encoded calldata
    pub data: String,
    #[serde(rename = "chainId", skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
}

/// `{ method, params }` argument of `window.ethereum.request`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub method: String,
    pub params: Vec<serde_json::Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: impl Serialize) -> serde_json::Result<Self> {
        self.params.push(serde_json::to_value(param)?);
        Ok(self)
    }
}

/// Error object thrown by an injected provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ProviderErrorPayload {
    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(codes::USER_REJECTED_REQUEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_request_omits_chain_id() {
        let request = EthTransactionRequest {
            from: "0x01".to_string(),
            to: "0x02".to_string(),
            value: "0x0".to_string(),
            data: "0x".to_string(),
            chain_id: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("chainId").is_none());
        assert_eq!(json["value"], "0x0");
    }

    #[test]
    fn test_rpc_request_params() {
        let request = RpcRequest::new("eth_sendTransaction").with_param(EthTransactionRequest {
            from: "0x01".to_string(),
            to: "0x02".to_string(),
            value: "0x470de4df820000".to_string(),
            data: "0xa0712d68".to_string(),
            chain_id: Some("0x5".to_string()),
        })
        .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "eth_sendTransaction");
        assert_eq!(json["params"][0]["chainId"], "0x5");
        assert_eq!(json["params"][0]["to"], "0x02");
    }

    #[test]
    fn test_rpc_request_rejects_unserializable_param() {
        let mut params = std::collections::HashMap::new();
        params.insert(vec![1u8], "non-string key");

        assert!(RpcRequest::new("eth_call").with_param(params).is_err());
    }

    #[test]
    fn test_provider_error_user_rejection() {
        let payload: ProviderErrorPayload =
            serde_json::from_str(r#"{"code":4001,"message":"User rejected the request."}"#).unwrap();
        assert!(payload.is_user_rejection());

        let payload: ProviderErrorPayload =
            serde_json::from_str(r#"{"message":"insufficient funds for gas * price + value"}"#).unwrap();
        assert!(!payload.is_user_rejection());
        assert_eq!(payload.code, None);
    }
}
