//! Session state management
//!
//! Mirrors the core [`SessionState`] into a Leptos signal so views re-render
//! when the account list is replaced.

use leptos::prelude::*;
use lib_core::session::{is_connected, SessionState};

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub accounts: RwSignal<Vec<String>>,
}

impl SessionContext {
    pub fn new(initial: Vec<String>) -> Self {
        Self {
            accounts: RwSignal::new(initial),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.accounts.with(|accounts| is_connected(accounts))
    }

    /// First account, as shown in the nav bar
    pub fn primary(&self) -> Option<String> {
        self.accounts.with(|accounts| accounts.first().cloned())
    }
}

/// Create the context, subscribe it to `session` and provide it to children.
pub fn provide_session_context(session: &SessionState) -> SessionContext {
    let context = SessionContext::new(session.read());
    let accounts = context.accounts;
    session.subscribe(move |list| accounts.set(list.to_vec()));

    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
