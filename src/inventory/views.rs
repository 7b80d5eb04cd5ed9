//! Read-only views over the item collection
//!
//! Every function here is pure: it takes the full collection plus query
//! parameters and returns borrowed items in collection order. Nothing is
//! cached; the collection is personal-inventory sized and recomputing on
//! each call is cheap.

use super::item::Item;
use super::location::{Location, LocationFilter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Which list the presentation layer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Everything, subject to search and location filter
    #[default]
    Inventory,
    /// Only items marked for today
    Today,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inventory" => Ok(ViewMode::Inventory),
            "today" => Ok(ViewMode::Today),
            _ => Err(format!(
                "Invalid mode '{}'. Valid options are: inventory, today",
                s
            )),
        }
    }
}

/// What the reminders view lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderSource {
    /// Items whose `reminder` flag is set
    #[default]
    Flag,
    /// Items currently at school, regardless of the flag
    AtSchool,
}

impl FromStr for ReminderSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flag" => Ok(ReminderSource::Flag),
            "school" | "at_school" => Ok(ReminderSource::AtSchool),
            _ => Err(format!(
                "Invalid reminder source '{}'. Valid options are: flag, school",
                s
            )),
        }
    }
}

/// Behavior switches for views whose semantics have more than one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Whether the location filter still applies in `ViewMode::Today`
    pub today_uses_location_filter: bool,
    pub reminder_source: ReminderSource,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            today_uses_location_filter: true,
            reminder_source: ReminderSource::Flag,
        }
    }
}

/// Parameters for `filter`
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Case-insensitive substring of name or description; empty matches all
    pub search: String,
    pub location: LocationFilter,
    pub mode: ViewMode,
}

impl ItemQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn location(mut self, location: impl Into<LocationFilter>) -> Self {
        self.location = location.into();
        self
    }

    pub fn mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Items passing search, location filter and mode, in collection order
pub fn filter<'a>(items: &'a [Item], query: &ItemQuery, config: &ViewConfig) -> Vec<&'a Item> {
    let check_location = query.mode == ViewMode::Inventory || config.today_uses_location_filter;
    items
        .iter()
        .filter(|item| item.matches_text(&query.search))
        .filter(|item| !check_location || query.location.matches(item.location))
        .filter(|item| query.mode == ViewMode::Inventory || item.for_today)
        .collect()
}

/// Partition items by location, keeping relative order inside each bucket
///
/// Only locations with at least one item appear as keys; keys iterate in
/// `Location` declaration order.
pub fn group_by_location<'a>(items: &[&'a Item]) -> BTreeMap<Location, Vec<&'a Item>> {
    let mut groups: BTreeMap<Location, Vec<&'a Item>> = BTreeMap::new();
    for item in items {
        groups.entry(item.location).or_default().push(*item);
    }
    groups
}

/// Per-location item counts over an unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationStats {
    counts: [usize; 4],
}

impl LocationStats {
    pub fn count(&self, location: Location) -> usize {
        self.counts[location.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Every location with its count, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (Location, usize)> + '_ {
        Location::ALL
            .into_iter()
            .map(|location| (location, self.count(location)))
    }
}

pub fn stats(items: &[Item]) -> LocationStats {
    let mut stats = LocationStats::default();
    for item in items {
        stats.counts[item.location.index()] += 1;
    }
    stats
}

pub fn reminders(items: &[Item], source: ReminderSource) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| match source {
            ReminderSource::Flag => item.reminder,
            ReminderSource::AtSchool => item.location == Location::School,
        })
        .collect()
}

/// Items marked for today
pub fn today(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.for_today).collect()
}

/// Items not yet marked for today, narrowed by their own search text
pub fn today_candidates<'a>(items: &'a [Item], search: &str) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| !item.for_today && item.matches_text(search))
        .collect()
}
