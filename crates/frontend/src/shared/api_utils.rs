//! Helpers for talking to the platform API.

use crate::system::auth::storage;

/// Base URL for API requests.
///
/// Constructed from the current window location; the API server answers on
/// port 8080 next to the dev server, and on the same origin in production.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` header value for the signed-in user, if any.
pub fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}
