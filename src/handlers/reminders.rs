//! Reminders handler for the belongings tracker

use super::respond;
use crate::TrackerServerHandler;
use crate::formatting;
use crate::inventory::ReminderSource;
use mcp_attr::Result as McpResult;

impl TrackerServerHandler {
    pub async fn handle_reminders(&self) -> McpResult<String> {
        let mut session = self.session()?;
        let heading = match session.config().reminder_source {
            ReminderSource::Flag => "Items flagged to remember",
            ReminderSource::AtSchool => "Items currently at school",
        };
        let body = format!(
            "{}:\n{}",
            heading,
            formatting::format_items(&session.reminders())
        );
        Ok(respond(&mut session, body))
    }
}
