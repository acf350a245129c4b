//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and extracting
//! error bodies from failed responses.

use gloo_net::http::Response;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000/api" or "https://example.com:8000/api"
/// - Empty string if window is not available
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
    format!("{}//{}:8000/api", protocol, hostname)
}

/// Build a full API URL from a path relative to the base.
/// Paths keep the server's trailing slash convention: `offers/{id}/`.
pub fn api_url(path: &str) -> String {
    format!("{}/{}", api_base(), path)
}

/// Сообщение об ошибке из неуспешного ответа: тело JSON сервера
/// показывается как есть, пустое тело заменяется кодом HTTP
pub async fn error_from_response(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => format!("HTTP {}", status),
    }
}

/// Единое сообщение для сетевых сбоев (запрос не дошёл до сервера)
pub fn connectivity_error(err: gloo_net::Error) -> String {
    format!("Нет связи с сервером: {}", err)
}
