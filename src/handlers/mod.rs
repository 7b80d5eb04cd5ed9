//! MCP tool handlers for the belongings tracker
//!
//! Each tool's implementation lives in its own file. Handlers take the
//! session lock, act, and append any pending persistence warnings to their
//! response.

pub mod add;
pub mod delete;
pub mod list;
pub mod move_item;
pub mod reminders;
pub mod stats;
pub mod today;
pub mod toggle;
pub mod update;

use crate::formatting;
use crate::session::Session;

/// Finish a response with whatever persistence failures are outstanding
pub(crate) fn respond(session: &mut Session, body: String) -> String {
    let reports = session.take_reports();
    body + &formatting::format_reports(&reports)
}

/// Standard reply for a mutation whose target id is gone
pub(crate) fn not_found(id: &str) -> String {
    format!("Item '{}' not found; nothing changed", id)
}
