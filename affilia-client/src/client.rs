//! The shared API client handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, EndpointFamily};
use crate::error::ApiError;
use crate::session::SessionContext;
use crate::transport::{HttpTransport, Transport};

/// Handle encapsulating transport, session context, and configuration.
///
/// Cloning is cheap; all clones share one underlying state. The handle is
/// read-only from the models' perspective except for the return-pixels
/// fallback, which may be flipped at runtime and is read at call time.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    session: SessionContext,
    config: ClientConfig,
    return_pixels: AtomicBool,
}

impl ApiClient {
    /// Creates a client using the HTTP transport.
    pub fn new(config: ClientConfig, session: SessionContext) -> Result<Self, ApiError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, session, transport))
    }

    /// Creates a client with a custom transport implementation.
    pub fn with_transport(
        config: ClientConfig,
        session: SessionContext,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let return_pixels = AtomicBool::new(config.return_pixels);
        Self {
            inner: Arc::new(ClientInner {
                transport,
                session,
                config,
                return_pixels,
            }),
        }
    }

    /// Returns the session context this client was built with.
    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns the transport for endpoint invocation.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.inner.transport
    }

    /// Binds an endpoint family to this client.
    pub fn endpoint(&self, family: EndpointFamily) -> Endpoint {
        Endpoint::bound(self, family)
    }

    /// Current fallback for action calls without an explicit pixel override.
    pub fn return_pixels_default(&self) -> bool {
        self.inner.return_pixels.load(Ordering::Relaxed)
    }

    /// Changes the return-pixels fallback for all later action calls.
    ///
    /// `true` asks the platform to return pixels inline; `false` leaves them
    /// queued server-side for retrieval through the pending-pixel lookup.
    pub fn set_return_pixels_default(&self, value: bool) {
        self.inner.return_pixels.store(value, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.inner.config)
            .field("return_pixels", &self.return_pixels_default())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
