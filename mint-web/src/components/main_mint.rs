//! Mint Panel Component
//!
//! Quantity stepper and Mint button. The button stays enabled whether or not
//! an account is connected; the wallet decides what happens.

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::MintSubmitter;

use crate::utils::task::spawn_unhandled;

#[component]
pub fn MainMint(submitter: Rc<MintSubmitter>) -> impl IntoView {
    let quantity = RwSignal::new(submitter.current_quantity());

    let incr = {
        let submitter = submitter.clone();
        move |_| {
            submitter.increment();
            quantity.set(submitter.current_quantity());
        }
    };

    let decr = {
        let submitter = submitter.clone();
        move |_| {
            submitter.decrement();
            quantity.set(submitter.current_quantity());
        }
    };

    let mint = move |_| {
        let submitter = submitter.clone();
        spawn_unhandled(async move {
            let pending = submitter.mint().await?;
            if let Some(pending) = &pending {
                log::info!("response {}", pending.hash);
            }
            Ok::<_, lib_core::AppError>(pending)
        });
    };

    view! {
        <div class="mint-panel">
            <button on:click=incr>"Incr"</button>
            <div class="mint-amount">{move || quantity.get()}</div>
            <button on:click=decr>"decr"</button>
            <button on:click=mint>"Mint"</button>
        </div>
    }
}
