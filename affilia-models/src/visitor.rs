//! Visitor action tracking.
//!
//! [`Visitor`] is the one stateful model in the SDK. An instance correlates
//! actions to a single external visitor and caches any tracking pixels the
//! platform hands back. It is meant for single-owner, non-concurrent use;
//! track concurrent visitors with one instance each.

use affilia_client::{ApiClient, ApiError, Endpoint, EndpointFamily};
use affilia_core::{
    ActionData, BoolResponse, BuiltInAction, Pixel, PixelsResponse, PostActionPayload,
    PostActionResponse, ReversalPayload, ReversalReason, VisitorIdPayload,
};
use tracing::debug;

// ============================================================================
// Options
// ============================================================================

/// Optional parameters for [`Visitor::trigger_action`].
#[derive(Debug, Clone, Default)]
pub struct TriggerActionOptions {
    /// Monetary value of the transaction, in minor units.
    pub transaction_value: i64,
    /// Free-form action data.
    pub data: Option<ActionData>,
    /// Coupon code applied to the transaction.
    pub coupon_code: Option<String>,
    /// Whether to return pixels inline. Unset falls back to the client's
    /// return-pixels default at call time.
    pub return_pixels: Option<bool>,
    /// Reference for the acting user. Unset (or empty) falls back to the
    /// visitor's alias.
    pub user_reference: Option<String>,
    /// Campaign hash attribution override.
    pub campaign_hash: Option<String>,
    /// Sub identifier 1.
    pub sid1: Option<String>,
    /// Sub identifier 2.
    pub sid2: Option<String>,
    /// Sub identifier 3.
    pub sid3: Option<String>,
}

/// Optional parameters for [`Visitor::reverse_action`].
#[derive(Debug, Clone, Default)]
pub struct ReverseActionOptions {
    /// Action key of the original action. Defaults to the built-in
    /// acquisition action.
    pub original_action: Option<String>,
    /// Why the action is being reversed. Defaults to cancellation.
    pub reason: Option<ReversalReason>,
    /// Caller-chosen identifier for the reversal itself.
    pub reversal_id: Option<String>,
    /// Amount being reversed, in minor units.
    pub reversal_amount: i64,
    /// Free-form reversal data.
    pub data: Option<ActionData>,
}

/// Treats an explicit empty string the same as an absent value.
fn first_nonempty(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
        .map(ToString::to_string)
}

// ============================================================================
// Visitor
// ============================================================================

/// Tracks one external visitor across triggered actions.
#[derive(Debug, Clone)]
pub struct Visitor {
    client: ApiClient,
    visitor_id: Option<String>,
    alias: Option<String>,
    pixels: Option<Vec<Pixel>>,
}

impl Visitor {
    /// Creates a visitor model on the given client.
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            visitor_id: None,
            alias: None,
            pixels: None,
        }
    }

    fn action_endpoint(&self) -> Endpoint {
        self.client.endpoint(EndpointFamily::AffiliateAction)
    }

    /// Sets the visitor identifier for all subsequent calls.
    pub fn set_visitor_id(&mut self, visitor_id: impl Into<String>) -> &mut Self {
        self.visitor_id = Some(visitor_id.into());
        self
    }

    /// Creates an alias for the current visitor.
    ///
    /// When the same alias is set on multiple visitors, the most recent
    /// visitor wins. The alias is documented by the platform as applying to
    /// the next triggered action only, but in practice it is not cleared
    /// after use and keeps feeding later actions until overwritten.
    pub fn alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    /// Builds the payload [`Visitor::trigger_action`] would send.
    ///
    /// Environment fields come from the client's session context. The
    /// return-pixels flag resolves to the client default when the options
    /// leave it unset; the user reference resolves to the stored alias when
    /// unset or empty.
    pub fn trigger_action_payload(
        &self,
        company_fid: &str,
        action_key: &str,
        transaction_id: &str,
        options: &TriggerActionOptions,
    ) -> PostActionPayload {
        let session = self.client.session();
        let return_pixels = options
            .return_pixels
            .unwrap_or_else(|| self.client.return_pixels_default());

        PostActionPayload {
            user_agent: session.user_agent.clone(),
            language: session.language.clone(),
            client_ip: session.client_ip.clone(),
            encoding: session.encoding.clone(),
            company_fid: company_fid.to_string(),
            action_key: action_key.to_string(),
            transaction_id: transaction_id.to_string(),
            transaction_value: options.transaction_value,
            coupon: options.coupon_code.clone(),
            data: options.data.clone(),
            return_pixels,
            visitor_id: self.visitor_id.clone(),
            user_reference: first_nonempty(
                options.user_reference.as_deref(),
                self.alias.as_deref(),
            ),
            campaign_hash: options.campaign_hash.clone(),
            sid1: options.sid1.clone(),
            sid2: options.sid2.clone(),
            sid3: options.sid3.clone(),
        }
    }

    /// Triggers a visitor action.
    ///
    /// When the resolved return-pixels flag is true, the response's pixel
    /// list replaces any previously cached pixels.
    pub async fn trigger_action(
        &mut self,
        company_fid: &str,
        action_key: &str,
        transaction_id: &str,
        options: TriggerActionOptions,
    ) -> Result<PostActionResponse, ApiError> {
        let payload =
            self.trigger_action_payload(company_fid, action_key, transaction_id, &options);
        self.trigger_action_with_payload(payload).await
    }

    /// Sends a prebuilt action payload.
    pub async fn trigger_action_with_payload(
        &mut self,
        payload: PostActionPayload,
    ) -> Result<PostActionResponse, ApiError> {
        let return_pixels = payload.return_pixels;
        let response: PostActionResponse =
            self.action_endpoint().invoke("post", &payload).await?;

        if return_pixels {
            debug!(count = response.pixels.len(), "Caching returned pixels");
            self.pixels = Some(response.pixels.clone());
        }

        Ok(response)
    }

    /// Reverses a previously triggered action.
    ///
    /// Defaults: original action is the built-in acquisition, reason is
    /// cancellation, reversal amount is zero. The pixel cache is untouched.
    pub async fn reverse_action(
        &self,
        transaction_id: &str,
        options: ReverseActionOptions,
    ) -> Result<BoolResponse, ApiError> {
        let session = self.client.session();
        let payload = ReversalPayload {
            user_agent: session.user_agent.clone(),
            language: session.language.clone(),
            client_ip: session.client_ip.clone(),
            encoding: session.encoding.clone(),
            reason: options.reason.unwrap_or(ReversalReason::Cancel),
            reversal_amount: options.reversal_amount,
            reversal_id: options.reversal_id,
            source_action_key: options
                .original_action
                .unwrap_or_else(|| BuiltInAction::Acquisition.as_key().to_string()),
            source_transaction_id: transaction_id.to_string(),
            data: options.data,
            visitor_id: self.visitor_id.clone(),
        };
        self.action_endpoint().invoke("reverse", &payload).await
    }

    /// Retrieves queued pixels.
    ///
    /// Returns the cached list when one exists. Otherwise, when a visitor id
    /// is set, performs one pending-pixel lookup and caches its result. With
    /// no cache and no visitor id this returns an empty list without a
    /// network call. Call [`Visitor::clear_pixels`] after delivering pixels;
    /// the SDK does not track consumption.
    pub async fn get_pixels(&mut self) -> Result<Vec<Pixel>, ApiError> {
        if self.pixels.is_none() {
            if let Some(visitor_id) = self.visitor_id.clone() {
                let endpoint = self.client.endpoint(EndpointFamily::AffiliatePixel);
                let response: PixelsResponse = endpoint
                    .invoke("pending", &VisitorIdPayload { visitor_id })
                    .await?;
                debug!(count = response.pixels.len(), "Caching pending pixels");
                self.pixels = Some(response.pixels);
            }
        }
        Ok(self.pixels.clone().unwrap_or_default())
    }

    /// Clears pixels already delivered.
    pub fn clear_pixels(&mut self) -> &mut Self {
        self.pixels = None;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
