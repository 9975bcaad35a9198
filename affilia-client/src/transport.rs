//! Request transport.
//!
//! The [`Transport`] trait is the seam between endpoint invocation and the
//! network. Production use goes through [`HttpTransport`]; tests substitute
//! an in-memory implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::endpoint::EndpointCall;
use crate::error::ApiError;

/// SDK user agent string sent with every request.
const USER_AGENT: &str = concat!("affilia-sdk/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Transport Trait
// ============================================================================

/// Sends one prepared endpoint call and returns the raw response body.
///
/// Implementations perform exactly one round-trip per call. Retries,
/// batching, and caching are out of scope at every layer of this SDK.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the call and returns the decoded JSON body.
    async fn send(&self, call: &EndpointCall) -> Result<Value, ApiError>;
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// Transport performing calls over HTTPS as JSON POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let inner = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        Ok(Self { inner, base_url })
    }

    /// Resolves the absolute URL for a call.
    fn url_for(&self, call: &EndpointCall) -> Result<Url, ApiError> {
        self.base_url
            .join(&call.path())
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, call), fields(path = %call.path()))]
    async fn send(&self, call: &EndpointCall) -> Result<Value, ApiError> {
        let url = self.url_for(call)?;
        debug!("POST request");

        let response = self.inner.post(url).json(&call.body).send().await?;
        let status = response.status();
        debug!(status = %status, "Response received");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthenticationFailed(
                "Invalid or expired credentials".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(ApiError::InvalidResponse(format!(
                "Unexpected status code: {status}"
            )));
        }

        Ok(response.json().await?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::EndpointFamily;

    #[test]
    fn test_url_resolution() {
        let config = ClientConfig::new("https://api.affilia.io/");
        let transport = HttpTransport::new(&config).unwrap();
        let call = EndpointCall {
            family: EndpointFamily::AffiliatePixel,
            operation: "pending",
            body: Value::Null,
        };
        assert_eq!(
            transport.url_for(&call).unwrap().as_str(),
            "https://api.affilia.io/affiliate/pixel/pending"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
