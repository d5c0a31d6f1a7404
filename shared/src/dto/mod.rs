//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the injected wallet provider through
//! `window.ethereum.request({ method, params })`.
//!
//! ## Module Organization
//!
//! - [`provider`] - `eth_sendTransaction` parameters and EIP-1193 error payloads
//!
//! ## Example JSON Communication
//!
//! ```text
//! request({
//!   "method": "eth_sendTransaction",
//!   "params": [{
//!     "from": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
//!     "to": "0xb40c270c3712D01e3cABf73fBCdbce5E5E01d921",
//!     "value": "0x8e1bc9bf040000",
//!     "data": "0xa0712d68...0002"
//!   }]
//! })
//! ```
//!
//! ```text
//! // rejected by the user
//! { "code": 4001, "message": "User rejected the request." }
//! ```

pub mod provider;

pub use provider::*;
