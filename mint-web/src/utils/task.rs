//! Fire-and-forget tasks for click handlers
//!
//! Failures are not shown in the page. They reject the dropped promise, so
//! the browser reports them as unhandled rejections in the console.

use std::future::Future;

use lib_core::AppError;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::future_to_promise;

/// Run `task` on the browser event loop without awaiting it.
///
/// A click that lands while the same operation is still waiting on the wallet
/// is only logged.
pub fn spawn_unhandled<T, F>(task: F)
where
    F: Future<Output = lib_core::Result<T>> + 'static,
    T: 'static,
{
    let _ = future_to_promise(async move {
        match task.await {
            Ok(_) => Ok(JsValue::UNDEFINED),
            Err(AppError::InFlight(operation)) => {
                log::warn!("Ignored click: {} request already in flight", operation);
                Ok(JsValue::UNDEFINED)
            }
            Err(e) => Err(rejection(&e)),
        }
    });
}

fn rejection(error: &AppError) -> JsValue {
    let js_error = js_sys::Error::new(&error.to_string());
    if let Some(code) = error.provider_error().and_then(|e| e.code) {
        let _ = js_sys::Reflect::set(&js_error, &JsValue::from_str("code"), &JsValue::from_f64(code as f64));
    }
    js_error.into()
}
