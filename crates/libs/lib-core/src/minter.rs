//! # Mint Submitter
//!
//! Owns the quantity stepper and submits `mint(quantity)` to the collection
//! contract with `quantity × 0.02 ether` attached.
//!
//! ## Quantity
//!
//! Bounded to `1..=3`, starts at 1, and clamps at both ends: stepping past a
//! bound is a no-op. It is never reset.
//!
//! ## Submission
//!
//! Each `mint()` builds a fresh contract handle and asks the provider for its
//! active signer. The signer is **not** taken from the session account list;
//! if the user switched accounts in the wallet after connecting, the mint is
//! signed by the wallet's current account. A mismatch is logged, not fixed.
//!
//! No confirmation wait, no balance refresh, no retry.

use std::cell::Cell;
use std::rc::Rc;

use alloy_primitives::U256;
use shared::utils::truncate_address;
use tracing::{debug, info, warn};

use crate::contract::{mintCall, ContractCall, ContractHandle};
use crate::error::{AppError, Result};
use crate::guard::InFlight;
use crate::provider::{checksum_address, WalletProvider};
use crate::session::SessionState;

/// Smallest quantity per mint.
pub const MIN_QUANTITY: u8 = 1;
/// Largest quantity per mint.
pub const MAX_QUANTITY: u8 = 3;

/// Price of one token: 0.02 ether.
pub const UNIT_PRICE_WEI: U256 = U256::from_limbs([20_000_000_000_000_000, 0, 0, 0]);

/// Quantity in `MIN_QUANTITY..=MAX_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MintQuantity(u8);

impl MintQuantity {
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1).min(MAX_QUANTITY))
    }

    pub fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_QUANTITY))
    }

    /// Total payment for this quantity, in wei.
    pub fn payment(self) -> U256 {
        UNIT_PRICE_WEI * U256::from(self.0)
    }
}

impl Default for MintQuantity {
    fn default() -> Self {
        Self(MIN_QUANTITY)
    }
}

impl TryFrom<u8> for MintQuantity {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self> {
        if (MIN_QUANTITY..=MAX_QUANTITY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::Contract(format!(
                "Mint quantity must be between {} and {}, got {}",
                MIN_QUANTITY, MAX_QUANTITY, value
            )))
        }
    }
}

/// The transaction the wallet accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMint {
    pub hash: String,
    pub signer: String,
    pub quantity: MintQuantity,
    pub call: ContractCall,
}

pub struct MintSubmitter {
    provider: Rc<dyn WalletProvider>,
    session: SessionState,
    quantity: Cell<MintQuantity>,
    in_flight: InFlight,
}

impl MintSubmitter {
    pub fn new(provider: Rc<dyn WalletProvider>, session: SessionState) -> Self {
        Self {
            provider,
            session,
            quantity: Cell::new(MintQuantity::default()),
            in_flight: InFlight::new("mint"),
        }
    }

    pub fn increment(&self) {
        self.quantity.set(self.quantity.get().incremented());
    }

    pub fn decrement(&self) {
        self.quantity.set(self.quantity.get().decremented());
    }

    pub fn current_quantity(&self) -> u8 {
        self.quantity.get().get()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Submit `mint(quantity)` through the injected wallet.
    ///
    /// Returns `Ok(None)` without doing anything when no provider is injected.
    /// Does not check whether an account is connected; the wallet prompts or
    /// fails on its own.
    pub async fn mint(&self) -> Result<Option<PendingMint>> {
        if !self.provider.is_injected() {
            debug!("No wallet provider injected, mint ignored");
            return Ok(None);
        }

        let _ticket = self.in_flight.begin()?;

        // Copied once: stepping while the wallet prompt is open does not change this request
        let quantity = self.quantity.get();
        let contract = ContractHandle::collection()?;
        let call = contract.encode_call(
            &mintCall {
                quantity: U256::from(quantity.get()),
            },
            quantity.payment(),
        )?;

        let signer = self
            .provider
            .signer_address()
            .await
            .and_then(|raw| checksum_address(&raw))
            .map_err(AppError::SubmissionFailure)?;

        if let Some(connected) = self.session.primary() {
            if !connected.eq_ignore_ascii_case(&signer) {
                warn!(
                    signer = %truncate_address(&signer),
                    connected = %truncate_address(&connected),
                    "Wallet signer differs from the connected account"
                );
            }
        }

        debug!(quantity = quantity.get(), value = %call.value, "Submitting mint");

        let hash = self
            .provider
            .send_transaction(call.to_request(&signer))
            .await
            .map_err(AppError::SubmissionFailure)?;

        info!(hash = %hash, quantity = quantity.get(), "Mint transaction submitted");

        Ok(Some(PendingMint {
            hash,
            signer,
            quantity,
            call,
        }))
    }
}
