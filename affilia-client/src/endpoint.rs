//! Endpoint binding and the generic invocation path.
//!
//! Every remote operation in the SDK goes through [`Endpoint::invoke`]:
//! serialize the payload, send exactly one request through the client's
//! transport, unwrap the response envelope, and decode the result into the
//! declared response type. Models differ only in which payload they build
//! and which operation name they pass.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

// ============================================================================
// Endpoint Families
// ============================================================================

/// Remote operation groupings, one per resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFamily {
    /// Visitor action posting and reversal.
    AffiliateAction,
    /// Affiliate paycheck management.
    AffiliatePaycheck,
    /// Pending pixel lookup.
    AffiliatePixel,
    /// Affiliate commission policy management.
    CommissionPolicy,
    /// Platform user management.
    User,
}

impl EndpointFamily {
    /// Returns the URL path prefix for this family.
    pub fn path(&self) -> &'static str {
        match self {
            Self::AffiliateAction => "affiliate/action",
            Self::AffiliatePaycheck => "affiliate/paycheck",
            Self::AffiliatePixel => "affiliate/pixel",
            Self::CommissionPolicy => "affiliate/policy/commission",
            Self::User => "auth/user",
        }
    }
}

// ============================================================================
// Endpoint Call
// ============================================================================

/// One fully prepared remote call, ready for a transport.
#[derive(Debug, Clone)]
pub struct EndpointCall {
    /// Which resource family the operation belongs to.
    pub family: EndpointFamily,
    /// Operation name within the family.
    pub operation: &'static str,
    /// Serialized request payload.
    pub body: Value,
}

impl EndpointCall {
    /// Returns the URL path for this call, relative to the API base URL.
    pub fn path(&self) -> String {
        format!("{}/{}", self.family.path(), self.operation)
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Wire envelope wrapping every API response.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: EnvelopeStatus,
    #[serde(default)]
    data: Value,
}

/// Application-level status inside the envelope.
#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    code: i64,
    #[serde(default)]
    message: String,
}

impl EnvelopeStatus {
    /// 2xx-style envelope codes indicate success.
    fn is_ok(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

// ============================================================================
// Endpoint
// ============================================================================

/// An endpoint family bound to a specific API client.
#[derive(Debug, Clone)]
pub struct Endpoint {
    client: ApiClient,
    family: EndpointFamily,
}

impl Endpoint {
    /// Binds an endpoint family to the given client.
    pub fn bound(client: &ApiClient, family: EndpointFamily) -> Self {
        Self {
            client: client.clone(),
            family,
        }
    }

    /// Invokes one operation on this endpoint.
    ///
    /// Performs exactly one round-trip. Application-level failures reported
    /// in the envelope become [`ApiError::Api`]; transport and decode
    /// failures propagate from below.
    #[instrument(skip(self, payload), fields(family = ?self.family, operation = operation))]
    pub async fn invoke<P, R>(&self, operation: &'static str, payload: &P) -> Result<R, ApiError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let call = EndpointCall {
            family: self.family,
            operation,
            body: serde_json::to_value(payload)?,
        };
        debug!(path = %call.path(), "Dispatching API call");

        let raw = self.client.transport().send(&call).await?;
        let envelope: Envelope = serde_json::from_value(raw)?;

        if !envelope.status.is_ok() {
            debug!(code = envelope.status.code, "API reported failure");
            return Err(ApiError::Api {
                code: envelope.status.code,
                message: envelope.status.message,
            });
        }

        Ok(serde_json::from_value(envelope.data)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::config::ClientConfig;
    use crate::session::SessionContext;
    use crate::transport::Transport;
    use affilia_core::{BoolResponse, FidPayload};

    /// Transport returning one canned body for every call.
    struct StaticTransport(Value);

    #[async_trait]
    impl Transport for StaticTransport {
        async fn send(&self, _call: &EndpointCall) -> Result<Value, ApiError> {
            Ok(self.0.clone())
        }
    }

    fn client_with(body: Value) -> ApiClient {
        ApiClient::with_transport(
            ClientConfig::default(),
            SessionContext::default(),
            Arc::new(StaticTransport(body)),
        )
    }

    #[test]
    fn test_family_paths() {
        assert_eq!(EndpointFamily::AffiliateAction.path(), "affiliate/action");
        assert_eq!(
            EndpointFamily::CommissionPolicy.path(),
            "affiliate/policy/commission"
        );
        assert_eq!(EndpointFamily::User.path(), "auth/user");
    }

    #[test]
    fn test_call_path() {
        let call = EndpointCall {
            family: EndpointFamily::AffiliatePaycheck,
            operation: "bulkApprove",
            body: Value::Null,
        };
        assert_eq!(call.path(), "affiliate/paycheck/bulkApprove");
    }

    #[tokio::test]
    async fn test_invoke_decodes_envelope_data() {
        let client = client_with(json!({
            "status": {"code": 200, "message": "OK"},
            "data": {"result": true}
        }));
        let endpoint = Endpoint::bound(&client, EndpointFamily::User);
        let response: BoolResponse = endpoint
            .invoke("setPassword", &FidPayload::new("USER:1"))
            .await
            .unwrap();
        assert!(response.result);
    }

    #[tokio::test]
    async fn test_invoke_surfaces_application_failure() {
        let client = client_with(json!({
            "status": {"code": 404, "message": "Paycheck not found"}
        }));
        let endpoint = Endpoint::bound(&client, EndpointFamily::AffiliatePaycheck);
        let err = endpoint
            .invoke::<_, BoolResponse>("approve", &FidPayload::new("PAY:missing"))
            .await
            .unwrap_err();
        match err {
            ApiError::Api { code, message } => {
                assert_eq!(code, 404);
                assert_eq!(message, "Paycheck not found");
            }
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invoke_surfaces_decode_failure() {
        // Envelope data does not match the declared response type.
        let client = client_with(json!({
            "status": {"code": 200, "message": "OK"},
            "data": {"unexpected": 1}
        }));
        let endpoint = Endpoint::bound(&client, EndpointFamily::User);
        let err = endpoint
            .invoke::<_, BoolResponse>("setPassword", &FidPayload::new("USER:1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
