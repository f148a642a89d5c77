//! Backend address resolution.
//!
//! The base URL is an explicit injection point: a deployment can set
//! `window.__API_BASE__` before the wasm module loads. Without the override
//! the address is derived from the current window location, using port 8000
//! for the backend server.

use wasm_bindgen::JsValue;

/// Get the base URL for API requests, e.g. "http://localhost:8000".
///
/// Returns an empty string if window is not available.
pub fn api_base() -> String {
    if let Some(overridden) = configured_base() {
        return overridden;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

// `window.__API_BASE__`, if set to a non-empty string.
fn configured_base() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("__API_BASE__")).ok()?;
    let base = value.as_string()?;
    if base.is_empty() {
        None
    } else {
        Some(base.trim_end_matches('/').to_string())
    }
}
