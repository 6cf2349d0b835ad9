//! Client configuration for frontend-backend communication

use contracts::shared::list_query::DEFAULT_PAGE_SIZE;

/// Port the backend listens on next to the console
pub const BACKEND_PORT: u16 = 3000;

/// Where the backend lives and how many rows a list page holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: usize,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, page_size: usize) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
        }
    }

    /// Config derived from the current window location
    pub fn from_window() -> Self {
        Self::new(api_base(), DEFAULT_PAGE_SIZE)
    }

    /// Full URL for an API path such as `/api/leads`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`BACKEND_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
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
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}
