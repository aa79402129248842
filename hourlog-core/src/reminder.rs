//! Hourly reminder batches for an external push-messaging service.
//!
//! Delivery itself is behind the [`Messenger`] trait; this module only
//! builds one multicast message per user and runs the batches.
use anyhow::Result;
use serde::Serialize;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderConfig {
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            title: "Hour Journal".to_string(),
            body: "What did you do last hour?".to_string(),
            link: None,
        }
    }
}

/// The push tokens registered by one user.
#[derive(Debug, Clone)]
pub struct UserTokens {
    pub user_id: String,
    pub tokens: Vec<String>,
}

/// One notification sent to every token of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMessage {
    pub title: String,
    pub body: String,
    pub tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub token: String,
    pub error: Option<String>,
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// What the messaging service reports for one multicast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResponse {
    pub responses: Vec<SendOutcome>,
}

impl BatchResponse {
    pub fn success_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.responses.len() - self.success_count()
    }
}

pub trait Messenger {
    fn send_multicast(&self, message: &ReminderMessage) -> Result<BatchResponse>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReminderReport {
    pub sent: usize,
    pub failed: usize,
    pub batch_errors: usize,
}

/// One message per user that has at least one token. Tokens are de-duplicated
/// keeping first-seen order.
pub fn build_messages(users: &[UserTokens], config: &ReminderConfig) -> Vec<ReminderMessage> {
    users
        .iter()
        .filter_map(|user| {
            let mut tokens: Vec<String> = Vec::new();
            for token in &user.tokens {
                if !tokens.contains(token) {
                    tokens.push(token.clone());
                }
            }
            if tokens.is_empty() {
                debug!(user = %user.user_id, "no push tokens, skipping");
                return None;
            }
            Some(ReminderMessage {
                title: config.title.clone(),
                body: config.body.clone(),
                tokens,
                link: config.link.clone(),
            })
        })
        .collect()
}

/// Sends every batch. A failing batch is logged and counted; the rest still go out.
pub fn send_reminders(messenger: &dyn Messenger, messages: &[ReminderMessage]) -> ReminderReport {
    let mut report = ReminderReport::default();
    for message in messages {
        match messenger.send_multicast(message) {
            Ok(response) => {
                let (sent, failed) = (response.success_count(), response.failure_count());
                info!("sent {sent} messages, failed {failed}");
                for outcome in response.responses.iter().filter(|r| !r.is_success()) {
                    warn!(
                        token = %outcome.token,
                        "failure sending to token: {}",
                        outcome.error.as_deref().unwrap_or_default()
                    );
                }
                report.sent += sent;
                report.failed += failed;
            }
            Err(e) => {
                error!("error sending batch: {e:#}");
                report.batch_errors += 1;
            }
        }
    }
    report
}
