//! Update handler for the belongings tracker

use super::{not_found, respond};
use crate::TrackerServerHandler;
use crate::formatting;
use crate::inventory::ItemPatch;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TrackerServerHandler {
    /// General field edit. An empty `photo` clears the photo; a location
    /// change runs the same rules as a move.
    pub async fn handle_update_item(
        &self,
        id: String,
        name: Option<String>,
        description: Option<String>,
        category: Option<String>,
        photo: Option<String>,
        location: Option<String>,
    ) -> McpResult<String> {
        let id = validation::normalize_item_id(&id);
        let patch = ItemPatch {
            name,
            description,
            category: validation::parse_category(category.as_deref())?,
            photo: photo.map(|p| if p.is_empty() { None } else { Some(p) }),
            location: validation::parse_optional_location(location.as_deref())?,
        };
        if patch.is_empty() {
            bail_public!(_, "Nothing to update. Provide at least one field.");
        }

        let mut session = self.session()?;
        let body = match session.edit(&id, patch) {
            Ok(Some(item)) => format!(
                "Item {} updated successfully\n{}",
                item.id,
                formatting::format_item(&item)
            ),
            Ok(None) => not_found(&id),
            Err(e) => {
                bail_public!(_, "Cannot update item '{}': {}", id, e);
            }
        };
        Ok(respond(&mut session, body))
    }
}
