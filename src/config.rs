//! Backend Configuration
//!
//! The report-store base URL comes from the hosting environment, never from
//! call sites.

use wasm_bindgen::JsValue;

/// Resolve the report-store base URL.
///
/// Checked in order: a `window.BACKEND_URL` global injected by the hosting
/// page, then the compile-time `BACKEND_URL` environment variable. Falls back
/// to same-origin relative paths.
pub fn backend_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str("BACKEND_URL")) {
            if let Some(url) = value.as_string() {
                return url.trim_end_matches('/').to_string();
            }
        }
    }
    option_env!("BACKEND_URL")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}
