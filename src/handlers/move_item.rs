//! Move handler for the belongings tracker

use super::{not_found, respond};
use crate::TrackerServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TrackerServerHandler {
    /// Moves an item to an explicit location, or to the next one in the
    /// cycle when no location is given. Location rules may set flags.
    pub async fn handle_move_item(
        &self,
        id: String,
        location: Option<String>,
    ) -> McpResult<String> {
        let id = validation::normalize_item_id(&id);
        let target = validation::parse_optional_location(location.as_deref())?;

        let mut session = self.session()?;
        let moved = match target {
            Some(location) => session.update_location(&id, location),
            None => session.cycle_location(&id),
        };

        let body = match moved {
            Some(item) => format!(
                "Item {} moved to {}\n{}",
                item.id,
                item.location,
                formatting::format_item(&item)
            ),
            None => not_found(&id),
        };
        Ok(respond(&mut session, body))
    }
}
