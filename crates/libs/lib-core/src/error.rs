//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] returned by the connect and
//! mint flows. It follows the `thiserror` pattern used across the workspace.
//!
//! ## Error Categories
//!
//! 1. **Provider errors** - failures reported by the injected wallet
//!    - [`ProviderAbsent`](AppError::ProviderAbsent) - no `window.ethereum`
//!    - [`ProviderRejection`](AppError::ProviderRejection) - account request declined or failed
//!    - [`SubmissionFailure`](AppError::SubmissionFailure) - mint transaction rejected,
//!      reverted, underfunded or lost on the network
//!
//! 2. **Flow errors** - raised by this crate
//!    - [`InFlight`](AppError::InFlight) - the same operation is already awaiting the wallet
//!    - [`Contract`](AppError::Contract) - ABI lookup or calldata encoding failure
//!
//! `connect()` and `mint()` never return `ProviderAbsent`: a missing provider
//! is a silent no-op there. The variant is used by callers that need the
//! provider unconditionally.
//!
//! There is no validation category for the mint quantity, which clamps
//! instead of rejecting.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//! use lib_core::provider::ProviderError;
//!
//! fn submit(rejected: bool) -> Result<()> {
//!     if rejected {
//!         return Err(AppError::SubmissionFailure(ProviderError::user_rejected()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(submit(true).unwrap_err().is_user_rejection());
//! ```

use thiserror::Error;

use crate::provider::ProviderError;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type for the wallet connection and mint submission flows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// No wallet provider is injected into the page.
    #[error("Wallet provider not found")]
    ProviderAbsent,

    /// The user declined the account access request, or the provider failed
    /// while answering it.
    #[error("Wallet provider rejected the request: {0}")]
    ProviderRejection(ProviderError),

    /// The mint transaction could not be submitted: user declined to sign,
    /// insufficient funds, contract revert or network error.
    #[error("Mint submission failed: {0}")]
    SubmissionFailure(ProviderError),

    /// The named operation is already waiting on the wallet.
    #[error("{0} request already in flight")]
    InFlight(&'static str),

    /// Contract ABI lookup or calldata encoding error.
    #[error("Contract error: {0}")]
    Contract(String),
}

impl AppError {
    /// The underlying provider error, if the wallet produced this failure.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            AppError::ProviderRejection(err) | AppError::SubmissionFailure(err) => Some(err),
            _ => None,
        }
    }

    /// True when the user dismissed a wallet prompt (EIP-1193 code 4001).
    pub fn is_user_rejection(&self) -> bool {
        self.provider_error()
            .is_some_and(ProviderError::is_user_rejection)
    }
}

/// Convert `serde_json::Error` (ABI parsing) to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Contract(format!("ABI JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AppError::ProviderRejection(ProviderError::user_rejected());
        assert_eq!(
            err.to_string(),
            "Wallet provider rejected the request: User rejected the request. (code 4001)"
        );

        let err = AppError::InFlight("mint");
        assert_eq!(err.to_string(), "mint request already in flight");
    }

    #[test]
    fn test_user_rejection_detection() {
        assert!(AppError::SubmissionFailure(ProviderError::user_rejected()).is_user_rejection());
        assert!(!AppError::SubmissionFailure(ProviderError::new("execution reverted")).is_user_rejection());
        assert!(!AppError::ProviderAbsent.is_user_rejection());
        assert!(AppError::Contract("x".to_string()).provider_error().is_none());
    }
}
