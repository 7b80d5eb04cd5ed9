//! MCP tool handler tests
mod common;

use belongings_tracker::inventory::{Location, ReminderSource, ViewConfig};
use belongings_tracker::{Identity, TrackerServerHandler};
use common::{extract_id_from_response, memory_handler, memory_session_with, stored_row};

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

async fn add(handler: &TrackerServerHandler, name: &str, location: Option<&str>) -> String {
    let response = handler
        .handle_add_item(name.to_string(), location.map(str::to_string), None, None, None)
        .await
        .unwrap();
    extract_id_from_response(&response)
}

#[tokio::test]
async fn test_add_item_defaults_and_derivation() {
    let (handler, _backend) = memory_handler().await;

    let response = handler
        .handle_add_item("Blue Hoodie".to_string(), None, None, None, None)
        .await
        .unwrap();
    assert!(response.starts_with("Item created with ID: "));
    assert!(response.contains("(Blue Hoodie at Dad's)"));
    assert!(!response.contains("Reminder set"));

    let response = handler
        .handle_add_item("Gym shorts".to_string(), s("school"), None, s("pants"), None)
        .await
        .unwrap();
    assert!(response.contains("Reminder set because the item is at school"));

    let response = handler
        .handle_add_item("Scarf".to_string(), s("in_transit"), None, None, None)
        .await
        .unwrap();
    assert!(response.contains("Marked for today"));
}

#[tokio::test]
async fn test_add_item_rejects_bad_input() {
    let (handler, backend) = memory_handler().await;

    assert!(handler
        .handle_add_item("   ".to_string(), None, None, None, None)
        .await
        .is_err());
    assert!(handler
        .handle_add_item("Sock".to_string(), s("attic"), None, None, None)
        .await
        .is_err());
    assert!(handler
        .handle_add_item("Sock".to_string(), None, None, s("hats"), None)
        .await
        .is_err());

    handler.persistence_queue().flush().await.unwrap();
    assert!(backend.rows().await.is_empty());
    let stats = handler.handle_stats().await.unwrap();
    assert!(stats.starts_with("0 item(s) tracked"));
}

#[tokio::test]
async fn test_move_item_explicit_and_cycle() {
    let (handler, _backend) = memory_handler().await;
    let id = add(&handler, "Sock", None).await;

    let response = handler.handle_move_item(id.clone(), s("school")).await.unwrap();
    assert!(response.contains(&format!("Item {} moved to School", id)));
    assert!(response.contains("[reminder]"));

    // school -> in transit
    let response = handler.handle_move_item(format!(" {} ", id), None).await.unwrap();
    assert!(response.contains("moved to In Transit"));
    assert!(response.contains("[today]"));
    assert!(response.contains("[reminder]"));

    // in transit -> dad's, flags stay
    let response = handler.handle_move_item(id.clone(), None).await.unwrap();
    assert!(response.contains("moved to Dad's"));
    assert!(response.contains("[today] [reminder]"));
}

#[tokio::test]
async fn test_unknown_id_is_not_an_error() {
    let (handler, _backend) = memory_handler().await;

    for response in [
        handler.handle_move_item("ghost".to_string(), None).await.unwrap(),
        handler.handle_toggle_today("ghost".to_string()).await.unwrap(),
        handler.handle_toggle_reminder("ghost".to_string()).await.unwrap(),
        handler.handle_delete_item("ghost".to_string()).await.unwrap(),
        handler
            .handle_update_item("ghost".to_string(), s("Name"), None, None, None, None)
            .await
            .unwrap(),
    ] {
        assert_eq!(response, "Item 'ghost' not found; nothing changed");
    }
}

#[tokio::test]
async fn test_toggles() {
    let (handler, _backend) = memory_handler().await;
    let id = add(&handler, "Sock", None).await;

    let on = handler.handle_toggle_today(id.clone()).await.unwrap();
    assert_eq!(on, format!("Item {} for today: on", id));
    let off = handler.handle_toggle_today(id.clone()).await.unwrap();
    assert_eq!(off, format!("Item {} for today: off", id));

    let on = handler.handle_toggle_reminder(id.clone()).await.unwrap();
    assert_eq!(on, format!("Item {} reminder: on", id));
}

#[tokio::test]
async fn test_update_item() {
    let (handler, _backend) = memory_handler().await;
    let response = handler
        .handle_add_item("Sock".to_string(), None, None, None, s("data:image/png;base64,AAAA"))
        .await
        .unwrap();
    let id = extract_id_from_response(&response);

    let response = handler
        .handle_update_item(
            id.clone(),
            s("Wool sock"),
            s("left one"),
            s("socks"),
            s(""),
            s("moms"),
        )
        .await
        .unwrap();
    assert!(response.contains("updated successfully"));
    assert!(response.contains("Wool sock (location: Mom's, category: socks)"));
    assert!(response.contains("Description: left one"));
    assert!(!response.contains("Photo: attached"));

    // nothing to update
    assert!(handler
        .handle_update_item(id.clone(), None, None, None, None, None)
        .await
        .is_err());
    // blank name
    assert!(handler
        .handle_update_item(id.clone(), s("  "), None, None, None, None)
        .await
        .is_err());

    let list = handler.handle_list_items(None, None, None).await.unwrap();
    assert!(list.contains("Wool sock"));
}

#[tokio::test]
async fn test_delete_item() {
    let (handler, backend) = memory_handler().await;
    let id = add(&handler, "Sock", None).await;
    let keep = add(&handler, "Shirt", None).await;

    let response = handler.handle_delete_item(id.clone()).await.unwrap();
    assert_eq!(response, format!("Item {} (Sock) deleted", id));

    handler.persistence_queue().flush().await.unwrap();
    let rows = backend.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.as_deref(), Some(keep.as_str()));
}

#[tokio::test]
async fn test_list_items_grouped_and_filtered() {
    let (handler, _backend) = memory_handler().await;
    add(&handler, "Sock", Some("dads")).await;
    add(&handler, "Shirt", Some("school")).await;

    let all = handler.handle_list_items(None, None, None).await.unwrap();
    assert!(all.contains("## Dad's (1)"));
    assert!(all.contains("## School (1)"));

    let search = handler.handle_list_items(s("SOCK"), s("all"), None).await.unwrap();
    assert!(search.contains("Sock"));
    assert!(!search.contains("Shirt"));

    let school = handler.handle_list_items(None, s("school"), None).await.unwrap();
    assert!(school.starts_with("Found 1 item(s):"));
    assert!(school.contains("Shirt"));
    assert!(!school.contains("##"));

    let today = handler.handle_list_items(None, None, s("today")).await.unwrap();
    assert_eq!(today, "No items found");

    assert!(handler.handle_list_items(None, s("mars"), None).await.is_err());
    assert!(handler.handle_list_items(None, None, s("tomorrow")).await.is_err());
}

#[tokio::test]
async fn test_today_view() {
    let (handler, _backend) = memory_handler().await;
    let sock = add(&handler, "Sock", None).await;
    add(&handler, "Shirt", None).await;
    add(&handler, "Scarf", Some("in_transit")).await;
    handler.handle_toggle_today(sock).await.unwrap();

    let response = handler.handle_today(None).await.unwrap();
    assert!(response.starts_with("## For today (2)"));
    assert!(response.contains("## Not yet picked (1)"));

    let response = handler.handle_today(s("nothing matches")).await.unwrap();
    assert!(response.contains("## Not yet picked (0)\nNo items found"));
}

#[tokio::test]
async fn test_reminders_follow_config() {
    let mut flagged = stored_row("flagged", "Flagged sock", "Dad's", 1);
    flagged.reminder = Some(true);
    let rows = vec![flagged, stored_row("at-school", "School shirt", "School", 2)];

    let (session, _backend) =
        memory_session_with(Identity::anonymous(), rows.clone(), ViewConfig::default()).await;
    let handler = TrackerServerHandler::new(session);
    let response = handler.handle_reminders().await.unwrap();
    assert!(response.starts_with("Items flagged to remember:"));
    assert!(response.contains("Flagged sock"));
    assert!(!response.contains("School shirt"));

    let config = ViewConfig {
        reminder_source: ReminderSource::AtSchool,
        ..ViewConfig::default()
    };
    let (session, _backend) = memory_session_with(Identity::anonymous(), rows, config).await;
    let handler = TrackerServerHandler::new(session);
    let response = handler.handle_reminders().await.unwrap();
    assert!(response.starts_with("Items currently at school:"));
    assert!(response.contains("School shirt"));
    assert!(!response.contains("Flagged sock"));
}

#[tokio::test]
async fn test_stats() {
    let (handler, _backend) = memory_handler().await;
    add(&handler, "Sock", None).await;
    add(&handler, "Shirt", None).await;
    add(&handler, "Hat", Some("moms")).await;

    let response = handler.handle_stats().await.unwrap();
    assert!(response.starts_with("3 item(s) tracked:"));
    assert!(response.contains(&format!("- {}: 2", Location::Dads)));
    assert!(response.contains("- Mom's: 1"));
    assert!(response.contains("- School: 0"));
    assert!(response.contains("- In Transit: 0"));
}

#[tokio::test]
async fn test_persistence_failure_shows_as_warning() {
    let (handler, backend) = memory_handler().await;
    backend.set_fail_writes(true);
    let id = add(&handler, "Sock", None).await;
    handler.persistence_queue().flush().await.unwrap();

    let response = handler.handle_stats().await.unwrap();
    assert!(response.contains(&format!(
        "Warning: insert of item {} failed: backend error: writes are disabled (changes kept in memory)",
        id
    )));
    assert!(response.starts_with("1 item(s) tracked:"));

    // reported once
    let response = handler.handle_stats().await.unwrap();
    assert!(!response.contains("Warning"));
}
