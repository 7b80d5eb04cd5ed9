//! Common test utilities for integration tests
#![allow(dead_code)]

use belongings_tracker::inventory::ViewConfig;
use belongings_tracker::storage::{ItemRow, MemoryBackend};
use belongings_tracker::{Identity, Session, TrackerServerHandler};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

/// Anonymous session over a fresh in-memory backend
pub async fn memory_session() -> (Session, Arc<MemoryBackend>) {
    memory_session_with(Identity::anonymous(), Vec::new(), ViewConfig::default()).await
}

pub async fn memory_session_with(
    identity: Identity,
    rows: Vec<ItemRow>,
    config: ViewConfig,
) -> (Session, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::with_rows(rows));
    let session = Session::open(identity, backend.clone(), config).await;
    (session, backend)
}

/// Handler over an in-memory backend, plus the backend for inspection
pub async fn memory_handler() -> (TrackerServerHandler, Arc<MemoryBackend>) {
    let (session, backend) = memory_session().await;
    (TrackerServerHandler::new(session), backend)
}

/// Extract the item id from an add_item response
/// Response format: "Item created with ID: <id> (<name> at <location>)"
pub fn extract_id_from_response(response: &str) -> String {
    let start = response.find("ID: ").expect("response carries an id") + 4;
    let rest = &response[start..];
    let end = rest.find(" (").unwrap_or(rest.len());
    rest[..end].trim().to_string()
}

/// A well-formed stored row created on the given day of September 2024
pub fn stored_row(id: &str, name: &str, location: &str, day: u32) -> ItemRow {
    let at = Utc.with_ymd_and_hms(2024, 9, day, 8, 0, 0).unwrap();
    ItemRow {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        location: Some(location.to_string()),
        category: Some("socks".to_string()),
        created_at: Some(at),
        updated_at: Some(at),
        ..Default::default()
    }
}
