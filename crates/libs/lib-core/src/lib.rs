//! # Core Library
//!
//! Wallet connection and mint submission flow for the collection frontend.
//! Platform independent: the browser shell supplies a [`provider::WalletProvider`]
//! backed by `window.ethereum`, tests supply a double.
//!
//! - [`session`] - shared account list with observers
//! - [`connector`] - `connect()`
//! - [`minter`] - quantity stepper and `mint()`
//! - [`contract`] - fixed contract address, ABI and calldata encoding
//! - [`guard`] - in-flight guard for wallet round trips
//! - [`error`] - [`AppError`]

pub mod connector;
pub mod contract;
pub mod error;
pub mod guard;
pub mod minter;
pub mod provider;
pub mod session;

// Re-export commonly used types
pub use connector::Connector;
pub use error::{AppError, Result};
pub use minter::{MintQuantity, MintSubmitter, PendingMint};
pub use provider::{ProviderError, WalletProvider};
pub use session::{AccountList, SessionState};
