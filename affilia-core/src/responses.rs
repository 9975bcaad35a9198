//! Typed response records decoded from API results.

use chrono::{DateTime, Utc};
use serde::Deserialize;

// ============================================================================
// Foundation Responses
// ============================================================================

/// Boolean success result for operations with no richer payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoolResponse {
    /// Whether the operation succeeded.
    pub result: bool,
}

// ============================================================================
// Pixels
// ============================================================================

/// A tracking pixel to be delivered to the visitor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pixel {
    /// Beacon URL to render client-side.
    pub url: String,
    /// Content type hint for rendering (image, iframe, script).
    #[serde(default)]
    pub content_type: Option<String>,
    /// When the pixel stops being valid.
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

/// Result of posting a visitor action.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostActionResponse {
    /// Identifier of the recorded action.
    #[serde(default)]
    pub action_fid: Option<String>,
    /// Pixels returned inline. Empty unless pixels were requested.
    #[serde(default)]
    pub pixels: Vec<Pixel>,
}

/// Pending pixels for a visitor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelsResponse {
    /// Currently queued pixels.
    #[serde(default)]
    pub pixels: Vec<Pixel>,
}

// ============================================================================
// Paychecks
// ============================================================================

/// A single affiliate paycheck.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paycheck {
    /// Paycheck identifier.
    pub fid: String,
    /// Affiliate the paycheck is for.
    #[serde(default)]
    pub affiliate_fid: Option<String>,
    /// Amount, in minor units.
    #[serde(default)]
    pub amount: i64,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Current paycheck state.
    #[serde(default)]
    pub state: Option<String>,
    /// Payment service the paycheck will be paid through.
    #[serde(default)]
    pub payment_service: Option<String>,
    /// When the paycheck was created.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// A page of paychecks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckListResponse {
    /// Paychecks on this page.
    #[serde(default)]
    pub paychecks: Vec<Paycheck>,
    /// Total matching paychecks across all pages.
    #[serde(default)]
    pub total: u64,
}

/// A transaction contributing to a paycheck.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckTransaction {
    /// Transaction identifier.
    pub transaction_id: String,
    /// Action key the commission was earned on.
    #[serde(default)]
    pub action_key: Option<String>,
    /// Commission amount, in minor units.
    #[serde(default)]
    pub amount: i64,
    /// When the transaction occurred.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Transactions backing a single paycheck.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckTransactionsResponse {
    /// Contributing transactions.
    #[serde(default)]
    pub transactions: Vec<PaycheckTransaction>,
}

/// Printable rendition of a paycheck.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintPaycheckResponse {
    /// Base64-encoded PDF document.
    pub document: String,
    /// Suggested file name.
    #[serde(default)]
    pub file_name: Option<String>,
}

// ============================================================================
// Commission Policies
// ============================================================================

/// A single commission policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPolicy {
    /// Policy identifier.
    pub fid: String,
    /// Company the policy belongs to.
    #[serde(default)]
    pub company_fid: Option<String>,
    /// Resource the policy applies to.
    #[serde(default)]
    pub resource_fid: Option<String>,
    /// Campaign hash scope.
    #[serde(default)]
    pub campaign_hash: Option<String>,
    /// Action key scope.
    #[serde(default)]
    pub action: Option<String>,
    /// Country scope.
    #[serde(default)]
    pub country: Option<String>,
    /// Platform scope.
    #[serde(default)]
    pub platform: Option<String>,
    /// Policy description.
    #[serde(default)]
    pub description: Option<String>,
    /// Commission definition.
    #[serde(default)]
    pub commission: Option<String>,
}

/// A page of commission policies.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPolicyListResponse {
    /// Policies on this page.
    #[serde(default)]
    pub policies: Vec<CommissionPolicy>,
    /// Total matching policies across all pages.
    #[serde(default)]
    pub total: u64,
}

/// Result of creating a commission policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommissionPolicyResponse {
    /// Identifier of the created policy.
    pub fid: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_action_response_defaults_pixels() {
        let response: PostActionResponse =
            serde_json::from_value(serde_json::json!({"actionFid": "ACT:1"})).unwrap();
        assert_eq!(response.action_fid.as_deref(), Some("ACT:1"));
        assert!(response.pixels.is_empty());
    }

    #[test]
    fn test_pixel_decodes_camel_case() {
        let pixel: Pixel = serde_json::from_value(serde_json::json!({
            "url": "https://pixels.example/p/1",
            "contentType": "image"
        }))
        .unwrap();
        assert_eq!(pixel.content_type.as_deref(), Some("image"));
        assert!(pixel.expiry_date.is_none());
    }

    #[test]
    fn test_paycheck_list_tolerates_missing_fields() {
        let response: PaycheckListResponse = serde_json::from_value(serde_json::json!({
            "paychecks": [{"fid": "PAY:1", "amount": 1250}]
        }))
        .unwrap();
        assert_eq!(response.paychecks.len(), 1);
        assert_eq!(response.paychecks[0].amount, 1250);
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_bool_response() {
        let response: BoolResponse =
            serde_json::from_value(serde_json::json!({"result": true})).unwrap();
        assert!(response.result);
    }
}
