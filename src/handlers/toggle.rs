//! Flag toggle handlers for the belongings tracker

use super::{not_found, respond};
use crate::TrackerServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

impl TrackerServerHandler {
    pub async fn handle_toggle_today(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_item_id(&id);
        let mut session = self.session()?;
        let body = match session.toggle_for_today(&id) {
            Some(item) => format!(
                "Item {} for today: {}",
                item.id,
                on_off(item.for_today)
            ),
            None => not_found(&id),
        };
        Ok(respond(&mut session, body))
    }

    pub async fn handle_toggle_reminder(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_item_id(&id);
        let mut session = self.session()?;
        let body = match session.toggle_reminder(&id) {
            Some(item) => format!("Item {} reminder: {}", item.id, on_off(item.reminder)),
            None => not_found(&id),
        };
        Ok(respond(&mut session, body))
    }
}
