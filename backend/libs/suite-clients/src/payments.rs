use suite_common::{ApiClient, ClientError, Result};
use tracing::info;

use crate::models::{AppScoped, CapturedOrder, CheckoutBody, CheckoutRequest, CheckoutSession};

/// Payments backend client
///
/// Provider details (hosted pages, webhooks, refunds) stay on the backend.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    api: ApiClient,
}

impl PaymentsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Open a hosted checkout session
    pub async fn create_checkout_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
        validate_checkout(request)?;

        let body = CheckoutBody {
            app_id: self.api.app_id(),
            request,
        };
        let session: CheckoutSession = self
            .api
            .post_json("/payments/checkout-sessions", &body, None)
            .await?;

        info!(
            app_id = self.api.app_id(),
            session_id = %session.id,
            amount = request.total_amount().unwrap_or_default(),
            currency = %request.currency,
            "Checkout session created"
        );
        Ok(session)
    }

    /// Capture an approved order
    pub async fn capture_order(&self, order_id: &str) -> Result<CapturedOrder> {
        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Err(ClientError::Validation("order_id is required".to_string()));
        }
        if !is_path_safe(order_id) {
            return Err(ClientError::Validation(format!("invalid order_id: {}", order_id)));
        }

        let body = AppScoped {
            app_id: self.api.app_id().to_string(),
        };
        let path = format!("/payments/orders/{}/capture", order_id);
        let order: CapturedOrder = self.api.post_json(&path, &body, None).await?;

        info!(order_id = %order.order_id, status = ?order.status, "Order captured");
        Ok(order)
    }
}

fn validate_checkout(request: &CheckoutRequest) -> Result<()> {
    if request.items.is_empty() {
        return Err(ClientError::Validation("checkout needs at least one item".to_string()));
    }

    if let Some(item) = request
        .items
        .iter()
        .find(|item| item.quantity == 0 || item.unit_amount <= 0)
    {
        return Err(ClientError::Validation(format!(
            "item {} must have a positive quantity and amount",
            item.sku
        )));
    }

    if request.currency.trim().is_empty() {
        return Err(ClientError::Validation("currency is required".to_string()));
    }

    if request.total_amount().is_none() {
        return Err(ClientError::Validation("checkout total overflows".to_string()));
    }

    Ok(())
}

/// Ids are spliced into the URL path, so only `[A-Za-z0-9_-]` is allowed.
fn is_path_safe(id: &str) -> bool {
    id.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
