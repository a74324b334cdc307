//! Report-Store HTTP Client
//!
//! Frontend bindings to the report-store REST endpoints.

mod report;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config;

// Re-export all public items
pub use report::*;

/// Issue one request against the backend. Status codes are not inspected:
/// any response the browser completes counts as success, only a failed or
/// aborted fetch is an error.
async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = &body {
        opts.set_body(&JsValue::from_str(json));
    }

    let url = format!("{}{}", config::backend_url(), path);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;
    response
        .dyn_into::<Response>()
        .map_err(|e| format!("{:?}", e))
}
