// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Affilia Client
//!
//! API client handle, endpoint binding, and request execution for the
//! Affilia SDK.
//!
//! Every model method follows the same linear path through this crate:
//!
//! 1. The model builds a payload from its arguments.
//! 2. [`Endpoint::bound`] scopes an endpoint family to the [`ApiClient`].
//! 3. [`Endpoint::invoke`] serializes the payload, performs one round-trip
//!    through the [`Transport`], and decodes the typed response.
//!
//! Failures propagate as [`ApiError`]; nothing is retried, cached, or
//! reinterpreted on the way up.
//!
//! ## Example
//!
//! ```ignore
//! let client = ApiClient::new(
//!     ClientConfig::new("https://api.affilia.io/"),
//!     SessionContext::new().with_client_ip("203.0.113.7"),
//! )?;
//! let endpoint = client.endpoint(EndpointFamily::AffiliatePaycheck);
//! let response: BoolResponse = endpoint.invoke("approve", &payload).await?;
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod session;
pub mod transport;

// Re-export the client surface
pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use endpoint::{Endpoint, EndpointCall, EndpointFamily};
pub use error::ApiError;
pub use session::SessionContext;
pub use transport::{HttpTransport, Transport};
