//! Runtime Configuration
//!
//! The API base URL is resolved at startup: a `window.OMDEH_API_BASE`
//! global set by the host page wins, then a compile-time override,
//! then the local development default.

use wasm_bindgen::JsValue;

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Base URL for the REST backend, without a trailing slash.
pub fn api_base() -> String {
    if let Some(win) = web_sys::window() {
        if let Ok(value) = js_sys::Reflect::get(&win, &JsValue::from_str("OMDEH_API_BASE")) {
            if let Some(s) = value.as_string() {
                if !s.trim().is_empty() {
                    return normalize_base(&s);
                }
            }
        }
    }
    normalize_base(option_env!("OMDEH_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(normalize_base("https://api.omdeh.ir/api/"), "https://api.omdeh.ir/api");
        assert_eq!(normalize_base("  http://localhost:8000/api  "), "http://localhost:8000/api");
        assert_eq!(normalize_base("http://localhost:8000/api"), "http://localhost:8000/api");
    }
}
