//! List handler for the belongings tracker

use super::respond;
use crate::TrackerServerHandler;
use crate::formatting;
use crate::inventory::{ItemQuery, LocationFilter};
use crate::validation;
use mcp_attr::Result as McpResult;

impl TrackerServerHandler {
    /// Applies search, location filter and mode. With no location filter
    /// the result is grouped by location; otherwise it is a flat list.
    pub async fn handle_list_items(
        &self,
        search: Option<String>,
        location: Option<String>,
        mode: Option<String>,
    ) -> McpResult<String> {
        let query = ItemQuery::new()
            .search(search.unwrap_or_default())
            .location(validation::parse_location_filter(location.as_deref())?)
            .mode(validation::parse_mode(mode.as_deref())?);

        let mut session = self.session()?;
        let body = if query.location == LocationFilter::All {
            formatting::format_grouped(&session.grouped(&query))
        } else {
            formatting::format_items(&session.filter(&query))
        };
        Ok(respond(&mut session, body))
    }
}
