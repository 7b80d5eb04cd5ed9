//! Session lifecycle and persistence mirroring tests
mod common;

use belongings_tracker::error::PersistenceError;
use belongings_tracker::inventory::{ItemDraft, ItemPatch, Location, ViewConfig};
use belongings_tracker::storage::{ItemRow, Operation};
use belongings_tracker::Identity;
use common::{memory_session, memory_session_with, stored_row};

#[tokio::test]
async fn test_open_loads_rows_newest_first() {
    let rows = vec![
        stored_row("old", "Old sock", "Dad's", 1),
        stored_row("new", "New sock", "Mom's", 3),
        stored_row("mid", "Mid sock", "School", 2),
    ];
    let (mut session, _backend) =
        memory_session_with(Identity::anonymous(), rows, ViewConfig::default()).await;

    let ids: Vec<&str> = session.list().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
    assert!(session.take_reports().is_empty());
}

#[tokio::test]
async fn test_open_skips_malformed_rows_with_reports() {
    let mut blank = stored_row("blank", "x", "Dad's", 2);
    blank.name = Some("   ".to_string());
    let rows = vec![
        stored_row("good", "Good sock", "Dad's", 1),
        blank,
        stored_row("lost", "Lost sock", "Attic", 3),
        ItemRow::default(),
    ];
    let (mut session, _backend) =
        memory_session_with(Identity::anonymous(), rows, ViewConfig::default()).await;

    assert_eq!(session.list().len(), 1);
    assert_eq!(session.list()[0].id, "good");

    let reports = session.take_reports();
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.operation == Operation::Load));
    assert!(reports
        .iter()
        .all(|r| matches!(r.error, PersistenceError::Decode(_))));
    // drained
    assert!(session.take_reports().is_empty());
}

#[tokio::test]
async fn test_owner_scoping() {
    let mut mine = stored_row("mine", "My sock", "Dad's", 1);
    mine.user_id = Some("alice".to_string());
    let mut theirs = stored_row("theirs", "Their sock", "Dad's", 2);
    theirs.user_id = Some("bob".to_string());

    let (mut session, backend) = memory_session_with(
        Identity::user("alice", "Alice"),
        vec![mine, theirs],
        ViewConfig::default(),
    )
    .await;
    assert_eq!(session.list().len(), 1);
    assert_eq!(session.list()[0].id, "mine");

    let added = session.add(ItemDraft::new("Hat", Location::Moms)).unwrap();
    session.flush().await;
    let rows = backend.rows().await;
    let row = rows
        .iter()
        .find(|r| r.id.as_deref() == Some(added.id.as_str()))
        .unwrap();
    assert_eq!(row.user_id.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_mutations_reach_backend_in_order() {
    let (mut session, backend) = memory_session().await;

    let item = session.add(ItemDraft::new("Blue Hoodie", Location::Dads)).unwrap();
    session.update_location(&item.id, Location::School).unwrap();
    session.toggle_for_today(&item.id).unwrap();
    session
        .edit(
            &item.id,
            ItemPatch {
                description: Some("zip broken".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
    session.flush().await;

    let rows = backend.rows().await;
    assert_eq!(rows.len(), 1);
    let stored = rows[0].clone().decode().unwrap();
    let current = session.get(&item.id).unwrap();
    assert_eq!(stored.location, Location::School);
    assert!(stored.reminder);
    assert!(stored.for_today);
    assert_eq!(stored.description, "zip broken");
    assert_eq!(stored.name, current.name);
    assert!(session.take_reports().is_empty());
}

#[tokio::test]
async fn test_delete_reaches_backend() {
    let (mut session, backend) = memory_session().await;
    let keep = session.add(ItemDraft::new("Keep", Location::Dads)).unwrap();
    let gone = session.add(ItemDraft::new("Gone", Location::Dads)).unwrap();

    assert_eq!(session.delete(&gone.id).unwrap().name, "Gone");
    assert!(session.delete(&gone.id).is_none());
    session.flush().await;

    let rows = backend.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.as_deref(), Some(keep.id.as_str()));
}

#[tokio::test]
async fn test_failed_write_is_reported_not_rolled_back() {
    let (mut session, backend) = memory_session().await;
    backend.set_fail_writes(true);

    let item = session.add(ItemDraft::new("Sock", Location::Moms)).unwrap();
    let moved = session.update_location(&item.id, Location::InTransit).unwrap();
    session.flush().await;

    // in-memory state keeps both changes
    assert_eq!(session.list().len(), 1);
    assert_eq!(session.get(&item.id).unwrap().location, Location::InTransit);
    assert!(moved.for_today);

    let reports = session.take_reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].operation, Operation::Insert);
    assert_eq!(reports[1].operation, Operation::Update);
    assert!(reports.iter().all(|r| r.item_id.as_deref() == Some(item.id.as_str())));
    assert!(backend.rows().await.is_empty());
}

#[tokio::test]
async fn test_unknown_id_writes_nothing() {
    let (mut session, backend) = memory_session().await;
    assert!(session.update_location("nope", Location::School).is_none());
    assert!(session.cycle_location("nope").is_none());
    assert!(session.toggle_for_today("nope").is_none());
    assert!(session.toggle_reminder("nope").is_none());
    assert!(session.edit("nope", ItemPatch::default()).unwrap().is_none());
    session.flush().await;

    assert!(backend.rows().await.is_empty());
    assert!(session.take_reports().is_empty());
}

#[tokio::test]
async fn test_close_returns_outstanding_reports() {
    let (mut session, backend) = memory_session().await;
    session.add(ItemDraft::new("Sock", Location::Dads)).unwrap();
    session.flush().await;
    backend.set_fail_writes(true);
    let item = session.add(ItemDraft::new("Shoe", Location::Dads)).unwrap();

    let reports = session.close().await;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].item_id.as_deref(), Some(item.id.as_str()));
    assert_eq!(backend.rows().await.len(), 1);
}

#[tokio::test]
async fn test_reopen_sees_persisted_items() {
    let (mut session, backend) = memory_session().await;
    let first = session.add(ItemDraft::new("First", Location::Dads)).unwrap();
    let second = session.add(ItemDraft::new("Second", Location::School)).unwrap();
    assert!(session.close().await.is_empty());

    let reopened =
        belongings_tracker::Session::open(Identity::anonymous(), backend, ViewConfig::default())
            .await;
    let ids: Vec<&str> = reopened.list().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    assert!(reopened.get(&second.id).unwrap().reminder);
}
