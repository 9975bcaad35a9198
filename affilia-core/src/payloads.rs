//! Request payload records, one per remote operation.
//!
//! A payload holds exactly the fields its remote operation accepts. Optional
//! fields are `Option<T>` and are omitted from the serialized body entirely
//! when unset; the server applies its own defaults for absent fields. An
//! explicit empty value (`Some(String::new())`) is therefore distinguishable
//! from an absent one on the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{ReversalReason, SortDirection};

/// Free-form key/value data attached to an action or reversal.
pub type ActionData = Map<String, Value>;

// ============================================================================
// Foundation Payloads
// ============================================================================

/// Payload addressing a single resource by fid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FidPayload {
    /// Resource identifier.
    pub fid: String,
}

impl FidPayload {
    /// Creates a payload for the given fid.
    pub fn new(fid: impl Into<String>) -> Self {
        Self { fid: fid.into() }
    }
}

/// Payload addressing multiple resources by fid.
///
/// Bulk operations forward the whole list in one request; they are never
/// expanded into per-fid calls client-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FidsPayload {
    /// Resource identifiers.
    pub fids: Vec<String>,
}

impl FidsPayload {
    /// Creates a payload for the given fids.
    pub fn new(fids: Vec<String>) -> Self {
        Self { fids }
    }
}

/// Payload for paginated resource listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedListPayload {
    /// Maximum number of records per page.
    pub limit: u32,
    /// 1-based page number.
    pub page: u32,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    /// Direction to sort in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    /// Whether to include soft-deleted records.
    pub show_deleted: bool,
    /// Free-text filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for PaginatedListPayload {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 1,
            sort_field: None,
            sort_direction: None,
            show_deleted: false,
            filter: None,
        }
    }
}

// ============================================================================
// Paycheck Payloads
// ============================================================================

/// Payload for listing paychecks, filtered by any combination of fields.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPaychecksPayload {
    /// Restrict to one affiliate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fid: Option<String>,
    /// Restrict to one payment service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_service: Option<String>,
    /// Restrict to affiliates owned by one manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_manager: Option<String>,
    /// Restrict to one paycheck state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paycheck_state: Option<String>,
}

/// Payload marking a paycheck as paid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkPaycheckPaidPayload {
    /// Paycheck identifier.
    pub fid: String,
    /// When the payment was made.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub payment_date: DateTime<Utc>,
    /// Free-text payment details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<String>,
    /// External payment reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

// ============================================================================
// Commission Policy Payloads
// ============================================================================

/// Payload creating a commission policy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommissionPolicyPayload {
    /// Company the policy belongs to.
    pub company_fid: String,
    /// Resource the policy applies to.
    pub resource_fid: String,
    /// Campaign hash the policy is scoped to.
    pub campaign_hash: String,
    /// Sub identifier 1.
    pub sid1: String,
    /// Sub identifier 2.
    pub sid2: String,
    /// Sub identifier 3.
    pub sid3: String,
    /// Action key the commission applies to.
    pub action: String,
    /// Country code the policy is scoped to.
    pub country: String,
    /// Platform the policy is scoped to.
    pub platform: String,
    /// Human-readable policy description.
    pub description: String,
    /// Commission definition.
    pub commission: String,
}

/// Payload updating a commission policy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommissionPolicyPayload {
    /// Policy identifier.
    pub fid: String,
    /// New description.
    pub description: String,
    /// New commission definition.
    pub commission: String,
}

// ============================================================================
// User Payloads
// ============================================================================

/// Payload setting a user's password.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordPayload {
    /// User identifier.
    pub fid: String,
    /// The new password.
    pub password: String,
}

// ============================================================================
// Visitor Action Payloads
// ============================================================================

/// Payload posting a visitor action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostActionPayload {
    /// Visitor's user agent, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Visitor's language, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Visitor's client IP, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Visitor's accepted encoding, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Company the action is recorded against.
    pub company_fid: String,
    /// Action key, built-in or custom.
    pub action_key: String,
    /// Caller-chosen transaction identifier for later reversal.
    pub transaction_id: String,
    /// Monetary value of the transaction, in minor units.
    pub transaction_value: i64,
    /// Coupon code applied to the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    /// Free-form action data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ActionData>,
    /// Whether to return pixels inline instead of queueing them.
    pub return_pixels: bool,
    /// Visitor identifier correlating this action to a visitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
    /// Caller's reference for the acting user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_reference: Option<String>,
    /// Campaign hash attribution override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_hash: Option<String>,
    /// Sub identifier 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid1: Option<String>,
    /// Sub identifier 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid2: Option<String>,
    /// Sub identifier 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid3: Option<String>,
}

/// Payload reversing a previously posted action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReversalPayload {
    /// Visitor's user agent, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Visitor's language, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Visitor's client IP, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Visitor's accepted encoding, from the session context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Why the action is being reversed.
    pub reason: ReversalReason,
    /// Amount being reversed, in minor units.
    pub reversal_amount: i64,
    /// Caller-chosen identifier for the reversal itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversal_id: Option<String>,
    /// Action key of the original action.
    pub source_action_key: String,
    /// Transaction id of the original action.
    pub source_transaction_id: String,
    /// Free-form reversal data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ActionData>,
    /// Visitor the original action was recorded for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,
}

/// Payload looking up pending pixels for a visitor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorIdPayload {
    /// Visitor identifier.
    pub visitor_id: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_optionals_are_omitted() {
        let payload = ListPaychecksPayload::default();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let payload = ListPaychecksPayload {
            payment_service: Some(String::new()),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"paymentService": ""}));
    }

    #[test]
    fn test_paginated_defaults() {
        let payload = PaginatedListPayload::default();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"limit": 10, "page": 1, "showDeleted": false})
        );
    }

    #[test]
    fn test_payment_date_serializes_as_unix_seconds() {
        let payload = MarkPaycheckPaidPayload {
            fid: "PAY:1".to_string(),
            payment_date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            payment_info: None,
            payment_id: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["paymentDate"], serde_json::json!(1_700_000_000));
        assert!(value.get("paymentInfo").is_none());
    }

    #[test]
    fn test_post_action_field_names() {
        let payload = PostActionPayload {
            user_agent: Some("ua".to_string()),
            language: None,
            client_ip: None,
            encoding: None,
            company_fid: "COMP:1".to_string(),
            action_key: "acquisition".to_string(),
            transaction_id: "tx-1".to_string(),
            transaction_value: 0,
            coupon: None,
            data: None,
            return_pixels: true,
            visitor_id: Some("v1".to_string()),
            user_reference: None,
            campaign_hash: None,
            sid1: None,
            sid2: None,
            sid3: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["companyFid"], "COMP:1");
        assert_eq!(value["returnPixels"], true);
        assert_eq!(value["visitorId"], "v1");
        assert!(value.get("userReference").is_none());
        assert!(value.get("campaignHash").is_none());
    }
}
