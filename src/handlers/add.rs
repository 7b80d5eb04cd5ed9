//! Add handler for the belongings tracker

use super::respond;
use crate::TrackerServerHandler;
use crate::inventory::ItemDraft;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TrackerServerHandler {
    /// Validates parameters, creates the item and queues its insert.
    pub async fn handle_add_item(
        &self,
        name: String,
        location: Option<String>,
        description: Option<String>,
        category: Option<String>,
        photo: Option<String>,
    ) -> McpResult<String> {
        let location =
            validation::parse_optional_location(location.as_deref())?.unwrap_or_default();
        let category = validation::parse_category(category.as_deref())?.unwrap_or_default();

        let draft = ItemDraft {
            name,
            description: description.unwrap_or_default(),
            location,
            category,
            photo,
        };

        let mut session = self.session()?;
        let item = match session.add(draft) {
            Ok(item) => item,
            Err(e) => {
                bail_public!(_, "Cannot add item: {}", e);
            }
        };

        let mut body = format!(
            "Item created with ID: {} ({} at {})",
            item.id, item.name, item.location
        );
        if item.reminder {
            body.push_str("\nReminder set because the item is at school");
        }
        if item.for_today {
            body.push_str("\nMarked for today because the item is in transit");
        }
        Ok(respond(&mut session, body))
    }
}
