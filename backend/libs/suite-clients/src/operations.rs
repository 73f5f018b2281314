use serde::de::IgnoredAny;
use suite_common::{ApiClient, ClientError, Result};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    ActivityBody, ActivityEntry, ErrorReport, NewTicket, Notification, NotificationBody,
    NotificationReceipt, Ticket, TicketBody,
};

/// Operations backend client: activity log, support tickets, notifications
#[derive(Debug, Clone)]
pub struct OperationsClient {
    api: ApiClient,
}

impl OperationsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Append an entry to the activity log
    pub async fn log_activity(&self, entry: &ActivityEntry) -> Result<()> {
        if entry.action.trim().is_empty() {
            return Err(ClientError::Validation("action is required".to_string()));
        }

        let body = ActivityBody {
            app_id: self.api.app_id(),
            request_id: Uuid::new_v4(),
            entry,
        };
        let _: IgnoredAny = self.api.post_json("/activity", &body, None).await?;
        Ok(())
    }

    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        if ticket.title.trim().is_empty() {
            return Err(ClientError::Validation("ticket title is required".to_string()));
        }

        let body = TicketBody {
            app_id: self.api.app_id(),
            ticket,
        };
        let created: Ticket = self.api.post_json("/tickets", &body, None).await?;
        info!(ticket_id = %created.id, priority = ?ticket.priority, "Ticket created");
        Ok(created)
    }

    /// File an application failure as a high-priority ticket
    pub async fn report_error(&self, report: &ErrorReport) -> Result<Ticket> {
        if report.message.trim().is_empty() {
            return Err(ClientError::Validation("error message is required".to_string()));
        }

        warn!(app_id = self.api.app_id(), message = %report.message, "Reporting application error");
        self.create_ticket(&report.to_ticket(self.api.app_id())).await
    }

    pub async fn send_notification(&self, notification: &Notification) -> Result<NotificationReceipt> {
        if notification.recipient.trim().is_empty() {
            return Err(ClientError::Validation("recipient is required".to_string()));
        }
        if notification.title.trim().is_empty() && notification.body.trim().is_empty() {
            return Err(ClientError::Validation(
                "notification needs a title or a body".to_string(),
            ));
        }

        let body = NotificationBody {
            app_id: self.api.app_id(),
            notification,
        };
        let receipt: NotificationReceipt = self.api.post_json("/notifications", &body, None).await?;
        info!(
            notification_id = %receipt.id,
            channel = ?notification.channel,
            "Notification sent"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationChannel, TicketPriority};
    use suite_common::ClientConfig;

    fn client() -> OperationsClient {
        let api = ApiClient::new(&ClientConfig::new("http://127.0.0.1:9", "notes")).unwrap();
        OperationsClient::new(api)
    }

    #[tokio::test]
    async fn blank_activity_rejected() {
        let err = client().log_activity(&ActivityEntry::new(" ")).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn blank_ticket_title_rejected() {
        let ticket = NewTicket {
            title: String::new(),
            body: "details".into(),
            priority: TicketPriority::Low,
            reporter_email: None,
        };
        let err = client().create_ticket(&ticket).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_notification_rejected() {
        let notification = Notification {
            recipient: "u1".into(),
            channel: NotificationChannel::Push,
            title: String::new(),
            body: " ".into(),
            data: None,
        };
        let err = client().send_notification(&notification).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
