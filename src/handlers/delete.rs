//! Delete handler for the belongings tracker

use super::{not_found, respond};
use crate::TrackerServerHandler;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TrackerServerHandler {
    /// Removes an item permanently and queues the backend delete.
    pub async fn handle_delete_item(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_item_id(&id);
        let mut session = self.session()?;
        let body = match session.delete(&id) {
            Some(item) => format!("Item {} ({}) deleted", item.id, item.name),
            None => not_found(&id),
        };
        Ok(respond(&mut session, body))
    }
}
