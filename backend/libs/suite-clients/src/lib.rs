//! Suite Clients Library
//!
//! Thin wrappers around the suite's remote backends, shared by every app:
//! - Identity: session lookup, sign-in, sign-up, sign-out (keyed by app id)
//! - Payments: checkout sessions and order capture
//! - Operations: activity log, support tickets, error reports, notifications
//!
//! Each call builds a JSON request, sends it once and returns the decoded
//! response or a typed `ClientError`. Use `ResultExt::into_reply` where a
//! caller needs the never-failing `{ data, error }` shape.

pub mod auth;
pub mod models;
pub mod operations;
pub mod payments;

pub use auth::AuthClient;
pub use models::{
    ActivityEntry, CapturedOrder, CheckoutRequest, CheckoutSession, ErrorReport, LineItem,
    NewTicket, Notification, NotificationChannel, NotificationReceipt, OrderStatus, Session,
    Ticket, TicketPriority, UserProfile,
};
pub use operations::OperationsClient;
pub use payments::PaymentsClient;
pub use suite_common::{ApiClient, ApiReply, ClientConfig, ClientError, ResultExt};

/// All backend clients sharing one connection pool
#[derive(Debug, Clone)]
pub struct SuiteClients {
    pub auth: AuthClient,
    pub payments: PaymentsClient,
    pub operations: OperationsClient,
}

impl SuiteClients {
    pub fn new(config: &ClientConfig) -> suite_common::Result<Self> {
        let api = ApiClient::new(config)?;
        Ok(Self {
            auth: AuthClient::new(api.clone()),
            payments: PaymentsClient::new(api.clone()),
            operations: OperationsClient::new(api),
        })
    }

    /// Build from `SUITE__*` environment variables
    pub fn from_env() -> suite_common::Result<Self> {
        let config = ClientConfig::from_env()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;
        Self::new(&config)
    }
}
