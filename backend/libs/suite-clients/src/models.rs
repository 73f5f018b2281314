use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// AUTH
// ============================================================================

/// Signed-in user as reported by the identity backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Authenticated session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: UserProfile,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SignInRequest<'a> {
    pub app_id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignUpRequest<'a> {
    pub app_id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AppScoped {
    pub app_id: String,
}

// ============================================================================
// PAYMENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    /// Unit price in minor currency units
    pub unit_amount: i64,
}

/// Checkout session parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub items: Vec<LineItem>,
    /// ISO 4217 code, e.g. "usd"
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

impl CheckoutRequest {
    /// Total in minor currency units, `None` on overflow
    pub fn total_amount(&self) -> Option<i64> {
        self.items.iter().try_fold(0i64, |total, item| {
            item.unit_amount
                .checked_mul(i64::from(item.quantity))
                .and_then(|line| total.checked_add(line))
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBody<'a> {
    pub app_id: &'a str,
    #[serde(flatten)]
    pub request: &'a CheckoutRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    pub id: String,
    /// Hosted checkout page to redirect the user to
    pub url: String,
    #[serde(default)]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CapturedOrder {
    pub order_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// User activity record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            user_id: None,
            metadata: serde_json::json!({}),
            occurred_at: Utc::now(),
        }
    }

    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ActivityBody<'a> {
    pub app_id: &'a str,
    pub request_id: Uuid,
    #[serde(flatten)]
    pub entry: &'a ActivityEntry,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTicket {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TicketBody<'a> {
    pub app_id: &'a str,
    #[serde(flatten)]
    pub ticket: &'a NewTicket,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Application failure to be filed as a ticket
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub message: String,
    pub stack: Option<String>,
    pub context: Option<serde_json::Value>,
    pub reporter_email: Option<String>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
            context: None,
            reporter_email: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn reported_by(mut self, email: impl Into<String>) -> Self {
        self.reporter_email = Some(email.into());
        self
    }

    /// Format as a high-priority ticket for `app_id`
    pub fn to_ticket(&self, app_id: &str) -> NewTicket {
        let mut body = format!("App: {}\nMessage: {}\n", app_id, self.message);

        if let Some(stack) = &self.stack {
            body.push_str("\nStack:\n");
            body.push_str(stack);
            body.push('\n');
        }

        if let Some(context) = &self.context {
            let pretty = serde_json::to_string_pretty(context).unwrap_or_else(|_| context.to_string());
            body.push_str("\nContext:\n");
            body.push_str(&pretty);
            body.push('\n');
        }

        NewTicket {
            title: format!("[{}] {}", app_id, first_line(&self.message)),
            body,
            priority: TicketPriority::High,
            reporter_email: self.reporter_email.clone(),
        }
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default().trim()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    #[default]
    Email,
    Push,
    InApp,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// User id or address, depending on channel
    pub recipient: String,
    #[serde(default)]
    pub channel: NotificationChannel,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NotificationBody<'a> {
    pub app_id: &'a str,
    #[serde(flatten)]
    pub notification: &'a Notification,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationReceipt {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}
