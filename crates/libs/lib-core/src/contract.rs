//! # Contract Handle
//!
//! Binds the fixed collection contract address to its ABI and turns typed
//! calls into `eth_sendTransaction` payloads.
//!
//! Calls are declared with [`sol!`] and encoded by `alloy-sol-types`. The
//! bundled JSON ABI is the source of truth for what the deployed contract
//! accepts: a call whose selector is missing from it, or that attaches value
//! to a non-payable function, is refused before it reaches the wallet.
//!
//! ```rust
//! use alloy_primitives::U256;
//! use lib_core::contract::{mintCall, ContractHandle};
//!
//! let contract = ContractHandle::collection().unwrap();
//! let call = contract
//!     .encode_call(&mintCall { quantity: U256::from(1) }, U256::ZERO)
//!     .unwrap();
//! assert_eq!(&call.data[..4], &[0xa0, 0x71, 0x2d, 0x68]);
//! ```

use alloy_json_abi::{Function, JsonAbi, StateMutability};
use alloy_primitives::{address, hex, Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};
use shared::dto::provider::EthTransactionRequest;
use tracing::debug;

use crate::error::{AppError, Result};

/// Deployed collection contract.
pub const COLLECTION_ADDRESS: Address = address!("b40c270c3712D01e3cABf73fBCdbce5E5E01d921");

/// Interface description of the deployed collection contract.
pub const COLLECTION_ABI: &str = include_str!("../abi/RoboPunksNFT.json");

sol! {
    /// Mint `quantity` tokens to the caller, paying the unit price for each.
    function mint(uint256 quantity) external payable;
}

/// Encoded call against a contract, ready to hand to the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub data: Bytes,
    /// Native currency attached to the call, in wei
    pub value: U256,
}

impl ContractCall {
    /// JSON-RPC payload sent from `from`.
    pub fn to_request(&self, from: &str) -> EthTransactionRequest {
        EthTransactionRequest {
            from: from.to_string(),
            to: self.to.to_checksum(None),
            value: format!("0x{:x}", self.value),
            data: hex::encode_prefixed(&self.data),
            chain_id: None,
        }
    }
}

/// Contract address bound to its ABI.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    address: Address,
    abi: JsonAbi,
}

impl ContractHandle {
    pub fn new(address: Address, abi: JsonAbi) -> Self {
        Self { address, abi }
    }

    /// Handle for the deployed collection.
    pub fn collection() -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(COLLECTION_ABI)?;
        Ok(Self::new(COLLECTION_ADDRESS, abi))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// ABI entry matching the selector of `C`.
    pub fn function<C: SolCall>(&self) -> Option<&Function> {
        self.abi
            .functions()
            .find(|function| function.selector().0 == C::SELECTOR)
    }

    /// Encode `call` with `value` wei attached.
    pub fn encode_call<C: SolCall>(&self, call: &C, value: U256) -> Result<ContractCall> {
        let function = self
            .function::<C>()
            .ok_or_else(|| AppError::Contract(format!("No function {} in ABI", C::SIGNATURE)))?;

        if !value.is_zero() && function.state_mutability != StateMutability::Payable {
            return Err(AppError::Contract(format!(
                "Non-payable function {} cannot receive value",
                C::SIGNATURE
            )));
        }

        debug!(function = C::SIGNATURE, value = %value, "Encoded contract call");

        Ok(ContractCall {
            to: self.address,
            data: Bytes::from(call.abi_encode()),
            value,
        })
    }
}
