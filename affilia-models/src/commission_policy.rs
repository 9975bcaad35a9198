//! Affiliate commission policy management.

use affilia_client::{ApiClient, ApiError, Endpoint, EndpointFamily};
use affilia_core::{
    BoolResponse, CommissionPolicy, CommissionPolicyListResponse,
    CreateCommissionPolicyPayload, CreateCommissionPolicyResponse, FidPayload,
    PaginatedListPayload, SortDirection, UpdateCommissionPolicyPayload,
};

// ============================================================================
// List Options
// ============================================================================

/// Options for paginated policy listings.
///
/// Defaults match the platform's: 10 records, first page, deleted records
/// hidden, no sorting or filtering.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Maximum number of records per page.
    pub limit: u32,
    /// 1-based page number.
    pub page: u32,
    /// Field to sort by.
    pub sort_field: Option<String>,
    /// Direction to sort in.
    pub sort_direction: Option<SortDirection>,
    /// Whether to include soft-deleted records.
    pub show_deleted: bool,
    /// Free-text filter.
    pub filter: Option<String>,
}

impl Default for ListOptions {
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
// New Policy
// ============================================================================

/// Field set for creating a commission policy.
#[derive(Debug, Clone)]
pub struct NewCommissionPolicy {
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

// ============================================================================
// Model
// ============================================================================

/// Model for affiliate commission policy operations.
#[derive(Debug, Clone)]
pub struct CommissionPolicyModel {
    client: ApiClient,
}

impl CommissionPolicyModel {
    /// Creates a commission policy model on the given client.
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    fn endpoint(&self) -> Endpoint {
        self.client.endpoint(EndpointFamily::CommissionPolicy)
    }

    /// Lists commission policies, paginated.
    pub async fn all(&self, options: ListOptions) -> Result<CommissionPolicyListResponse, ApiError> {
        let payload = PaginatedListPayload {
            limit: options.limit,
            page: options.page,
            sort_field: options.sort_field,
            sort_direction: options.sort_direction,
            show_deleted: options.show_deleted,
            filter: options.filter,
        };
        self.endpoint().invoke("all", &payload).await
    }

    /// Retrieves a single commission policy.
    pub async fn retrieve(&self, fid: &str) -> Result<CommissionPolicy, ApiError> {
        self.endpoint().invoke("retrieve", &FidPayload::new(fid)).await
    }

    /// Creates a commission policy.
    pub async fn create(
        &self,
        policy: NewCommissionPolicy,
    ) -> Result<CreateCommissionPolicyResponse, ApiError> {
        let payload = CreateCommissionPolicyPayload {
            company_fid: policy.company_fid,
            resource_fid: policy.resource_fid,
            campaign_hash: policy.campaign_hash,
            sid1: policy.sid1,
            sid2: policy.sid2,
            sid3: policy.sid3,
            action: policy.action,
            country: policy.country,
            platform: policy.platform,
            description: policy.description,
            commission: policy.commission,
        };
        self.endpoint().invoke("create", &payload).await
    }

    /// Updates a commission policy's description and commission definition.
    pub async fn update(
        &self,
        fid: &str,
        description: &str,
        commission: &str,
    ) -> Result<BoolResponse, ApiError> {
        let payload = UpdateCommissionPolicyPayload {
            fid: fid.to_string(),
            description: description.to_string(),
            commission: commission.to_string(),
        };
        self.endpoint().invoke("update", &payload).await
    }

    /// Soft-deletes a commission policy.
    pub async fn delete(&self, fid: &str) -> Result<BoolResponse, ApiError> {
        self.endpoint().invoke("delete", &FidPayload::new(fid)).await
    }

    /// Restores a soft-deleted commission policy.
    pub async fn restore(&self, fid: &str) -> Result<BoolResponse, ApiError> {
        self.endpoint().invoke("restore", &FidPayload::new(fid)).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::{test_client, RecordingTransport};

    #[tokio::test]
    async fn test_all_defaults() {
        let transport = RecordingTransport::new();
        transport.push_data(json!({"policies": [], "total": 0}));
        let model = CommissionPolicyModel::new(&test_client(&transport));

        model.all(ListOptions::default()).await.unwrap();

        let call = &transport.calls()[0];
        assert_eq!(call.path(), "affiliate/policy/commission/all");
        assert_eq!(
            call.body,
            json!({"limit": 10, "page": 1, "showDeleted": false})
        );
    }

    #[tokio::test]
    async fn test_all_with_sorting() {
        let transport = RecordingTransport::new();
        transport.push_data(json!({"policies": [], "total": 0}));
        let model = CommissionPolicyModel::new(&test_client(&transport));

        model
            .all(ListOptions {
                limit: 50,
                page: 3,
                sort_field: Some("dateCreated".to_string()),
                sort_direction: Some(SortDirection::Desc),
                show_deleted: true,
                filter: Some("US".to_string()),
            })
            .await
            .unwrap();

        let body = &transport.calls()[0].body;
        assert_eq!(body["limit"], 50);
        assert_eq!(body["page"], 3);
        assert_eq!(body["sortField"], "dateCreated");
        assert_eq!(body["sortDirection"], "desc");
        assert_eq!(body["showDeleted"], true);
        assert_eq!(body["filter"], "US");
    }

    #[tokio::test]
    async fn test_create_forwards_all_fields() {
        let transport = RecordingTransport::new();
        transport.push_data(json!({"fid": "POLICY:1"}));
        let model = CommissionPolicyModel::new(&test_client(&transport));

        let response = model
            .create(NewCommissionPolicy {
                company_fid: "COMP:1".to_string(),
                resource_fid: "RES:1".to_string(),
                campaign_hash: "abc123".to_string(),
                sid1: "s1".to_string(),
                sid2: "s2".to_string(),
                sid3: "s3".to_string(),
                action: "acquisition".to_string(),
                country: "US".to_string(),
                platform: "web".to_string(),
                description: "US web acquisitions".to_string(),
                commission: "10%".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.fid, "POLICY:1");
        let body = &transport.calls()[0].body;
        assert_eq!(body["companyFid"], "COMP:1");
        assert_eq!(body["campaignHash"], "abc123");
        assert_eq!(body["commission"], "10%");
    }

    #[tokio::test]
    async fn test_delete_and_restore_paths() {
        let transport = RecordingTransport::new();
        let model = CommissionPolicyModel::new(&test_client(&transport));

        model.delete("POLICY:1").await.unwrap();
        model.restore("POLICY:1").await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path(), "affiliate/policy/commission/delete");
        assert_eq!(calls[1].path(), "affiliate/policy/commission/restore");
        assert_eq!(calls[0].body, json!({"fid": "POLICY:1"}));
    }
}
