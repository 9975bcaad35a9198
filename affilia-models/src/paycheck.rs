//! Affiliate paycheck management.

use affilia_client::{ApiClient, ApiError, Endpoint, EndpointFamily};
use affilia_core::{
    BoolResponse, FidPayload, FidsPayload, ListPaychecksPayload, MarkPaycheckPaidPayload,
    Paycheck, PaycheckListResponse, PaycheckTransactionsResponse, PrintPaycheckResponse,
};
use chrono::{DateTime, Utc};

// ============================================================================
// Filter
// ============================================================================

/// Filter for paycheck listings. All fields optional; unset fields match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct PaycheckFilter {
    /// Restrict to one affiliate.
    pub affiliate_fid: Option<String>,
    /// Restrict to one payment service.
    pub payment_service: Option<String>,
    /// Restrict to affiliates owned by one manager.
    pub affiliate_manager: Option<String>,
    /// Restrict to one paycheck state.
    pub paycheck_state: Option<String>,
}

// ============================================================================
// Model
// ============================================================================

/// Model for affiliate paycheck operations.
#[derive(Debug, Clone)]
pub struct PaycheckModel {
    client: ApiClient,
}

impl PaycheckModel {
    /// Creates a paycheck model on the given client.
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    fn endpoint(&self) -> Endpoint {
        self.client.endpoint(EndpointFamily::AffiliatePaycheck)
    }

    /// Lists paychecks matching the filter.
    pub async fn all(&self, filter: PaycheckFilter) -> Result<PaycheckListResponse, ApiError> {
        let payload = ListPaychecksPayload {
            fid: filter.affiliate_fid,
            payment_service: filter.payment_service,
            affiliate_manager: filter.affiliate_manager,
            paycheck_state: filter.paycheck_state,
        };
        self.endpoint().invoke("all", &payload).await
    }

    /// Retrieves a single paycheck.
    pub async fn retrieve(&self, fid: &str) -> Result<Paycheck, ApiError> {
        self.endpoint().invoke("retrieve", &FidPayload::new(fid)).await
    }

    /// Approves a paycheck for payment.
    pub async fn approve(&self, fid: &str) -> Result<BoolResponse, ApiError> {
        self.endpoint().invoke("approve", &FidPayload::new(fid)).await
    }

    /// Approves many paychecks in one request.
    ///
    /// The whole list is forwarded as a single call; whether the server
    /// treats it as all-or-nothing is its own business.
    pub async fn bulk_approve(&self, fids: Vec<String>) -> Result<BoolResponse, ApiError> {
        self.endpoint()
            .invoke("bulkApprove", &FidsPayload::new(fids))
            .await
    }

    /// Marks a paycheck as paid.
    pub async fn mark_paid(
        &self,
        fid: &str,
        payment_date: DateTime<Utc>,
        payment_info: Option<String>,
        payment_id: Option<String>,
    ) -> Result<BoolResponse, ApiError> {
        let payload = MarkPaycheckPaidPayload {
            fid: fid.to_string(),
            payment_date,
            payment_info,
            payment_id,
        };
        self.endpoint().invoke("markPaid", &payload).await
    }

    /// Renders a paycheck as a PDF document.
    pub async fn pdf(&self, fid: &str) -> Result<PrintPaycheckResponse, ApiError> {
        self.endpoint().invoke("pdf", &FidPayload::new(fid)).await
    }

    /// Lists the transactions contributing to a paycheck.
    pub async fn transactions(&self, fid: &str) -> Result<PaycheckTransactionsResponse, ApiError> {
        self.endpoint()
            .invoke("transactions", &FidPayload::new(fid))
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================
