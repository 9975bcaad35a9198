//! Well-known platform constants.
//!
//! The platform recognizes a fixed set of built-in affiliate actions and
//! reversal reasons. Custom action keys are allowed by the API; these enums
//! only cover the keys the platform itself defines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Built-in Actions
// ============================================================================

/// Built-in affiliate action keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltInAction {
    /// A new customer acquisition. The default source action for reversals.
    Acquisition,
    /// A captured lead.
    Lead,
    /// A completed sale.
    Sale,
}

impl BuiltInAction {
    /// Returns the wire key for this action.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Acquisition => "acquisition",
            Self::Lead => "lead",
            Self::Sale => "sale",
        }
    }
}

impl fmt::Display for BuiltInAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for BuiltInAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acquisition" => Ok(Self::Acquisition),
            "lead" => Ok(Self::Lead),
            "sale" => Ok(Self::Sale),
            other => Err(CoreError::UnknownActionKey(other.to_string())),
        }
    }
}

// ============================================================================
// Reversal Reasons
// ============================================================================

/// Reasons for reversing a previously triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReversalReason {
    /// The order was cancelled. The default reversal reason.
    Cancel,
    /// The payment was refunded.
    Refund,
    /// The payment was charged back.
    Chargeback,
    /// The original action was fraudulent.
    Fraud,
}

impl ReversalReason {
    /// Returns the wire key for this reason.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Cancel => "cancel",
            Self::Refund => "refund",
            Self::Chargeback => "chargeback",
            Self::Fraud => "fraud",
        }
    }
}

impl fmt::Display for ReversalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for ReversalReason {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cancel" => Ok(Self::Cancel),
            "refund" => Ok(Self::Refund),
            "chargeback" => Ok(Self::Chargeback),
            "fraud" => Ok(Self::Fraud),
            other => Err(CoreError::UnknownReversalReason(other.to_string())),
        }
    }
}

// ============================================================================
// Sort Direction
// ============================================================================

/// Sort direction for paginated list calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::UnknownSortDirection(other.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
