//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the mint frontend and the
//! browser-injected EIP-1193 wallet provider (`window.ethereum`).
//! All DTOs use JSON serialization via `serde`; the web crate moves them across
//! the wasm boundary with `serde-wasm-bindgen`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for provider communication
//!   - **[`dto::provider`]**: JSON-RPC transaction requests and provider errors
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Provider payloads follow the Ethereum JSON-RPC conventions:
//! - Quantities (`value`) are `0x`-prefixed hex without leading zeros
//! - Byte strings (`data`) are `0x`-prefixed hex
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::provider::EthTransactionRequest;
//! use shared::utils::truncate_address;
//!
//! let request = EthTransactionRequest {
//!     from: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
//!     to: "0xb40c270c3712D01e3cABf73fBCdbce5E5E01d921".to_string(),
//!     value: "0x470de4df820000".to_string(),
//!     data: "0xa0712d680000000000000000000000000000000000000000000000000000000000000001".to_string(),
//!     chain_id: None,
//! };
//!
//! assert_eq!(truncate_address(&request.to), "0xb40c...d921");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
