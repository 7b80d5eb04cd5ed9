//! Stats handler for the belongings tracker

use super::respond;
use crate::TrackerServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TrackerServerHandler {
    /// Counts per location over the whole collection, ignoring filters.
    pub async fn handle_stats(&self) -> McpResult<String> {
        let mut session = self.session()?;
        let body = formatting::format_stats(&session.stats());
        Ok(respond(&mut session, body))
    }
}
