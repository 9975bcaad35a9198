// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Affilia Core
//!
//! Core types for the Affilia SDK.
//!
//! This crate declares the data contracts shared by the client and model
//! crates:
//!
//! - Request payload records, one per remote operation
//! - Typed response records
//! - Well-known platform constants (built-in actions, reversal reasons)
//! - Error types
//!
//! ## Key Types
//!
//! ### Payloads
//! - [`FidPayload`] / [`FidsPayload`] - address one or many resources
//! - [`PaginatedListPayload`] - paginated listings with platform defaults
//! - [`PostActionPayload`] / [`ReversalPayload`] - visitor action tracking
//!
//! ### Responses
//! - [`BoolResponse`] - bare success flag
//! - [`PostActionResponse`] / [`PixelsResponse`] - action results and pixels
//! - [`PaycheckListResponse`], [`CommissionPolicyListResponse`] - pages
//!
//! ### Constants
//! - [`BuiltInAction`] - platform-defined action keys
//! - [`ReversalReason`] - platform-defined reversal reasons

pub mod constants;
pub mod error;
pub mod payloads;
pub mod responses;

// Re-export error types
pub use error::CoreError;

// Re-export constants
pub use constants::{BuiltInAction, ReversalReason, SortDirection};

// Re-export payload types
pub use payloads::{
    ActionData,
    CreateCommissionPolicyPayload,
    FidPayload,
    FidsPayload,
    ListPaychecksPayload,
    MarkPaycheckPaidPayload,
    PaginatedListPayload,
    PostActionPayload,
    ReversalPayload,
    SetPasswordPayload,
    UpdateCommissionPolicyPayload,
    VisitorIdPayload,
};

// Re-export response types
pub use responses::{
    BoolResponse,
    CommissionPolicy,
    CommissionPolicyListResponse,
    CreateCommissionPolicyResponse,
    Paycheck,
    PaycheckListResponse,
    PaycheckTransaction,
    PaycheckTransactionsResponse,
    Pixel,
    PixelsResponse,
    PostActionResponse,
    PrintPaycheckResponse,
};
