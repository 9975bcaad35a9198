//! Client configuration.

use std::time::Duration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.affilia.io/";

/// Settings for an [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API.
    pub base_url: String,
    /// Timeout applied to each request.
    pub timeout: Duration,
    /// Initial value of the return-pixels fallback used by action calls
    /// that do not pass an explicit override. The live flag can be changed
    /// later through the client handle.
    pub return_pixels: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            return_pixels: true,
        }
    }
}

impl ClientConfig {
    /// Creates a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the initial return-pixels fallback.
    pub fn with_return_pixels(mut self, return_pixels: bool) -> Self {
        self.return_pixels = return_pixels;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.return_pixels);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://sandbox.affilia.io/")
            .with_timeout(Duration::from_secs(5))
            .with_return_pixels(false);
        assert_eq!(config.base_url, "https://sandbox.affilia.io/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.return_pixels);
    }
}
