//! Navigation Bar Component
//!
//! Shows a Connect button until the session holds an account, then the
//! account address.

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::Connector;

use crate::state::session::use_session_context;
use crate::utils::task::spawn_unhandled;

#[component]
pub fn NavBar(connector: Rc<Connector>) -> impl IntoView {
    let session_ctx = use_session_context();

    let connect = move |_| {
        let connector = connector.clone();
        spawn_unhandled(async move { connector.connect().await });
    };

    view! {
        <nav>
            <div class="account" class:hidden=move || !session_ctx.is_connected()>
                {move || session_ctx.primary().unwrap_or_default()}
            </div>
            <button class:hidden=move || session_ctx.is_connected() on:click=connect>
                "Connect"
            </button>
        </nav>
    }
}
