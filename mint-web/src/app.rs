//! Application shell
//!
//! Owns the session and the wallet services and hands them to the two panels.

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::{Connector, MintSubmitter, SessionState, WalletProvider};

use crate::components::{MainMint, NavBar};
use crate::services::ethereum::BrowserProvider;
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionState::new();
    provide_session_context(&session);

    let provider: Rc<dyn WalletProvider> = Rc::new(BrowserProvider);
    let connector = Rc::new(Connector::new(provider.clone(), session.clone()));
    let submitter = Rc::new(MintSubmitter::new(provider, session));

    view! {
        <div class="App">
            <NavBar connector=connector/>
            <MainMint submitter=submitter/>
        </div>
    }
}
