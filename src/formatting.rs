//! Formatting helpers for the MCP server
//!
//! Turns items and views into the plain-text responses the tools return.

use crate::inventory::{Item, Location, LocationStats};
use crate::storage::PersistenceReport;
use std::collections::BTreeMap;

/// One item as a bullet with its detail lines
pub fn format_item(item: &Item) -> String {
    let mut result = format!(
        "- [{}] {} (location: {}, category: {})",
        item.id, item.name, item.location, item.category
    );
    if item.for_today {
        result.push_str(" [today]");
    }
    if item.reminder {
        result.push_str(" [reminder]");
    }
    result.push('\n');

    if !item.description.is_empty() {
        result.push_str(&format!("  Description: {}\n", item.description));
    }
    if item.photo.is_some() {
        result.push_str("  Photo: attached\n");
    }
    result.push_str(&format!("  Updated: {}\n", item.updated_at.format("%Y-%m-%d %H:%M")));
    result
}

/// A flat list with a count header
pub fn format_items(items: &[&Item]) -> String {
    if items.is_empty() {
        return "No items found".to_string();
    }

    let mut result = format!("Found {} item(s):\n\n", items.len());
    for item in items {
        result.push_str(&format_item(item));
    }
    result
}

/// One section per location that has items
pub fn format_grouped(groups: &BTreeMap<Location, Vec<&Item>>) -> String {
    if groups.is_empty() {
        return "No items found".to_string();
    }

    let total: usize = groups.values().map(Vec::len).sum();
    let mut result = format!("Found {} item(s):\n", total);
    for (location, items) in groups {
        result.push_str(&format!("\n## {} ({})\n", location, items.len()));
        for item in items {
            result.push_str(&format_item(item));
        }
    }
    result
}

pub fn format_stats(stats: &LocationStats) -> String {
    let mut result = format!("{} item(s) tracked:\n", stats.total());
    for (location, count) in stats.iter() {
        result.push_str(&format!("- {}: {}\n", location, count));
    }
    result
}

/// Warning lines to append to a response; empty when there is nothing to say
pub fn format_reports(reports: &[PersistenceReport]) -> String {
    let mut result = String::new();
    for report in reports {
        result.push_str(&format!("\nWarning: {} (changes kept in memory)", report));
    }
    result
}
