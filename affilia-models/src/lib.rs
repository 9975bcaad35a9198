// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Affilia Models
//!
//! Resource models for the Affilia SDK, one per resource family.
//!
//! Every model holds a clone of the shared
//! [`ApiClient`](affilia_client::ApiClient) and maps its methods onto remote
//! operations: build a payload, bind the endpoint family, invoke the
//! operation, return the typed response. Models perform no validation of
//! their own; business rules live server-side and surface as
//! [`ApiError`](affilia_client::ApiError).
//!
//! ## Models
//!
//! - [`PaycheckModel`] - affiliate paycheck management
//! - [`CommissionPolicyModel`] - commission policy management
//! - [`UserModel`] - platform user management
//! - [`Visitor`] - visitor action tracking, the one stateful model
//!
//! ## Example
//!
//! ```ignore
//! let client = ApiClient::new(config, session)?;
//!
//! let mut visitor = Visitor::new(&client);
//! visitor.set_visitor_id("v-9f2").alias("bob");
//! visitor
//!     .trigger_action("COMP:1", "acquisition", "order-1001", Default::default())
//!     .await?;
//! for pixel in visitor.get_pixels().await? {
//!     render(pixel);
//! }
//! visitor.clear_pixels();
//! ```

pub mod commission_policy;
pub mod paycheck;
pub mod user;
pub mod visitor;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the model surface
pub use commission_policy::{CommissionPolicyModel, ListOptions, NewCommissionPolicy};
pub use paycheck::{PaycheckFilter, PaycheckModel};
pub use user::UserModel;
pub use visitor::{ReverseActionOptions, TriggerActionOptions, Visitor};
