//! Today handler for the belongings tracker

use super::respond;
use crate::TrackerServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TrackerServerHandler {
    /// Lists what is packed for today, then the remaining candidates
    /// narrowed by `search`.
    pub async fn handle_today(&self, search: Option<String>) -> McpResult<String> {
        let search = search.unwrap_or_default();
        let mut session = self.session()?;

        let today = session.today();
        let candidates = session.today_candidates(&search);
        let body = format!(
            "## For today ({})\n{}\n\n## Not yet picked ({})\n{}",
            today.len(),
            formatting::format_items(&today),
            candidates.len(),
            formatting::format_items(&candidates)
        );
        Ok(respond(&mut session, body))
    }
}
