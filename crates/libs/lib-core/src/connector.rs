//! # Connector
//!
//! Asks the injected wallet for account access and records the signer's
//! address in the session.

use std::rc::Rc;

use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::guard::InFlight;
use crate::provider::{checksum_address, WalletProvider};
use crate::session::SessionState;

pub struct Connector {
    provider: Rc<dyn WalletProvider>,
    session: SessionState,
    in_flight: InFlight,
}

impl Connector {
    pub fn new(provider: Rc<dyn WalletProvider>, session: SessionState) -> Self {
        Self {
            provider,
            session,
            in_flight: InFlight::new("connect"),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Request account access and store `[signer address]` in the session,
    /// in EIP-55 checksum form.
    ///
    /// A missing provider is a silent no-op. Provider failures, including the
    /// user closing the prompt, come back as [`AppError::ProviderRejection`]
    /// and leave the session untouched.
    pub async fn connect(&self) -> Result<()> {
        if !self.provider.is_injected() {
            debug!("No wallet provider injected, connect ignored");
            return Ok(());
        }

        let _ticket = self.in_flight.begin()?;

        let accounts = self
            .provider
            .request_accounts()
            .await
            .map_err(AppError::ProviderRejection)?;
        debug!(authorized = accounts.len(), "Account access granted");

        let address = self
            .provider
            .signer_address()
            .await
            .and_then(|raw| checksum_address(&raw))
            .map_err(AppError::ProviderRejection)?;

        info!(address = %address, "Wallet connected");
        self.session.replace(vec![address]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProvider;
    use crate::provider::ProviderError;
    use futures::{pin_mut, poll};

    const ACCOUNT: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
    const OTHER_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn new_connector(provider: MockProvider) -> (Connector, Rc<MockProvider>) {
        let provider = Rc::new(provider);
        let connector = Connector::new(provider.clone(), SessionState::new());
        (connector, provider)
    }

    #[tokio::test]
    async fn test_connect_stores_signer() {
        let (connector, provider) = new_connector(MockProvider::with_account(ACCOUNT));

        connector.connect().await.unwrap();

        assert_eq!(connector.session().read(), vec![ACCOUNT.to_string()]);
        assert!(connector.session().is_connected());
        assert_eq!(provider.account_requests.get(), 1);
    }

    #[tokio::test]
    async fn test_connect_without_provider_is_silent() {
        let (connector, provider) = new_connector(MockProvider::absent());

        assert_eq!(connector.connect().await, Ok(()));

        assert!(connector.session().read().is_empty());
        assert!(!connector.session().is_connected());
        assert_eq!(provider.account_requests.get(), 0);
    }

    #[tokio::test]
    async fn test_rejection_propagates_and_keeps_session() {
        let (connector, _) = new_connector(
            MockProvider::with_account(ACCOUNT).rejecting_accounts(ProviderError::user_rejected()),
        );

        let err = connector.connect().await.unwrap_err();

        assert_eq!(err, AppError::ProviderRejection(ProviderError::user_rejected()));
        assert!(err.is_user_rejection());
        assert!(connector.session().read().is_empty());
        assert!(!connector.is_busy());
    }

    #[tokio::test]
    async fn test_reconnect_replaces_account() {
        let provider = Rc::new(MockProvider::with_account(ACCOUNT).with_signer(OTHER_ACCOUNT));
        let session = SessionState::new();
        session.replace(vec![ACCOUNT.to_string()]);
        let connector = Connector::new(provider, session.clone());

        connector.connect().await.unwrap();

        assert_eq!(session.read(), vec![OTHER_ACCOUNT.to_string()]);
    }

    #[tokio::test]
    async fn test_connect_stores_checksummed_signer() {
        let (connector, _) = new_connector(
            MockProvider::with_account(ACCOUNT).with_signer("0x71c7656ec7ab88b098defb751b7401b5f6d8976f"),
        );

        connector.connect().await.unwrap();

        assert_eq!(connector.session().read(), vec![ACCOUNT.to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_signer_is_rejected() {
        let (connector, _) = new_connector(MockProvider::with_account(ACCOUNT).with_signer("0xDEF"));

        let err = connector.connect().await.unwrap_err();

        assert!(matches!(err, AppError::ProviderRejection(ref e) if e.code.is_none()));
        assert!(connector.session().read().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_connect_is_rejected() {
        let (provider, release) = MockProvider::with_account(ACCOUNT).gated();
        let (connector, provider) = new_connector(provider);

        let first = connector.connect();
        pin_mut!(first);
        assert!(poll!(first.as_mut()).is_pending());
        assert!(connector.is_busy());

        assert_eq!(connector.connect().await, Err(AppError::InFlight("connect")));
        assert_eq!(provider.account_requests.get(), 1);

        release.send(()).unwrap();
        first.await.unwrap();
        assert!(connector.session().is_connected());
        assert!(!connector.is_busy());
    }
}
