use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use hourlog_core::{
    EntryStore,
    reminder::{
        BatchResponse, Messenger, ReminderMessage, SendOutcome, UserTokens, build_messages,
        send_reminders,
    },
};

/// Prints each batch instead of handing it to a push service.
struct DryRunMessenger;

impl Messenger for DryRunMessenger {
    fn send_multicast(&self, message: &ReminderMessage) -> Result<BatchResponse> {
        println!("{}", serde_json::to_string_pretty(message)?);
        Ok(BatchResponse {
            responses: message
                .tokens
                .iter()
                .map(|token| SendOutcome {
                    token: token.clone(),
                    error: None,
                })
                .collect(),
        })
    }
}

pub fn reminder_mode(cli: &Cli, renderer: &Renderer, store: &EntryStore) -> Result<CliModeResult> {
    if let Some(token) = &cli.register_token {
        store.register_token(token)?;
        renderer.print_info("Registered push token.");
        return Ok(CliModeResult::Finish);
    }

    if !cli.remind {
        return Ok(CliModeResult::NothingToDo);
    }

    let users = [UserTokens {
        user_id: "local".to_string(),
        tokens: store.tokens()?,
    }];
    let messages = build_messages(&users, &store.config.reminder);
    if messages.is_empty() {
        renderer.print_info("No push tokens registered.");
        return Ok(CliModeResult::Finish);
    }
    let report = send_reminders(&DryRunMessenger, &messages);
    renderer.print_info(&format!(
        "Sent {} messages, failed {}",
        report.sent, report.failed
    ));
    Ok(CliModeResult::Finish)
}
