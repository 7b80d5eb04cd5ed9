use super::derivation::derive_flags;
use super::item::{Item, ItemDraft, ItemPatch};
use super::location::Location;
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// The authoritative in-memory collection of items
///
/// The only component allowed to mutate items. Mutations targeting an id
/// that is not present are silent no-ops (they return `None`) so callers can
/// race with a delete without erroring.
#[derive(Debug, Default)]
pub struct ItemStore {
    /// Newest `add` first; mutations never reorder
    items: Vec<Item>,

    /// Id index for duplicate detection, kept in sync with `items`
    ids: HashSet<String>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-decoded items, keeping their order
    ///
    /// If an id appears more than once only the first occurrence is kept.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut store = Self::new();
        for item in items {
            if store.ids.contains(&item.id) {
                warn!(id = %item.id, "dropping item with duplicate id");
                continue;
            }
            store.ids.insert(item.id.clone());
            store.items.push(item);
        }
        store
    }

    /// Items in display order (newest first)
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn generate_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }

    /// Create a new item from `draft` and put it at the front of the list
    ///
    /// The name is trimmed and must not be empty. Flags start cleared, then
    /// the location rules run once for the initial location.
    pub fn add(&mut self, draft: ItemDraft) -> Result<&Item, ValidationError> {
        self.add_at(draft, Utc::now())
    }

    pub(crate) fn add_at(
        &mut self,
        draft: ItemDraft,
        now: DateTime<Utc>,
    ) -> Result<&Item, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let mut item = Item {
            id: self.generate_id(),
            name: name.to_string(),
            description: draft.description,
            location: draft.location,
            category: draft.category,
            photo: draft.photo.filter(|p| !p.is_empty()),
            for_today: false,
            reminder: false,
            created_at: now,
            updated_at: now,
        };
        item.set_flags(derive_flags(item.flags(), item.location));

        debug!(id = %item.id, name = %item.name, location = %item.location, "item added");
        self.ids.insert(item.id.clone());
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// Move an item, then re-run the location rules
    pub fn update_location(&mut self, id: &str, location: Location) -> Option<&Item> {
        self.update_location_at(id, location, Utc::now())
    }

    pub(crate) fn update_location_at(
        &mut self,
        id: &str,
        location: Location,
        now: DateTime<Utc>,
    ) -> Option<&Item> {
        let item = self.find_mut(id)?;
        item.location = location;
        item.touch(now);
        item.set_flags(derive_flags(item.flags(), location));
        debug!(id, location = %location, "item moved");
        Some(&*item)
    }

    /// Move an item to the location after its current one
    pub fn cycle_location(&mut self, id: &str) -> Option<&Item> {
        let next = self.get(id)?.location.next();
        self.update_location(id, next)
    }

    /// Flip `for_today`; stands until the next qualifying move re-asserts it
    pub fn toggle_for_today(&mut self, id: &str) -> Option<&Item> {
        self.toggle_for_today_at(id, Utc::now())
    }

    pub(crate) fn toggle_for_today_at(&mut self, id: &str, now: DateTime<Utc>) -> Option<&Item> {
        let item = self.find_mut(id)?;
        item.for_today = !item.for_today;
        item.touch(now);
        debug!(id, for_today = item.for_today, "for_today toggled");
        Some(&*item)
    }

    /// Flip `reminder`; stands until the next qualifying move re-asserts it
    pub fn toggle_reminder(&mut self, id: &str) -> Option<&Item> {
        self.toggle_reminder_at(id, Utc::now())
    }

    pub(crate) fn toggle_reminder_at(&mut self, id: &str, now: DateTime<Utc>) -> Option<&Item> {
        let item = self.find_mut(id)?;
        item.reminder = !item.reminder;
        item.touch(now);
        debug!(id, reminder = item.reminder, "reminder toggled");
        Some(&*item)
    }

    /// Apply a general field edit
    ///
    /// A patch whose name trims to empty is rejected and nothing changes.
    /// `Ok(None)` means the id was not found. A location in the patch runs
    /// the location rules exactly like `update_location`.
    pub fn edit(&mut self, id: &str, patch: ItemPatch) -> Result<Option<&Item>, ValidationError> {
        self.edit_at(id, patch, Utc::now())
    }

    pub(crate) fn edit_at(
        &mut self,
        id: &str,
        patch: ItemPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<&Item>, ValidationError> {
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(ValidationError::EmptyName);
        }

        let Some(item) = self.find_mut(id) else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(&*item));
        }

        if let Some(name) = patch.name {
            item.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(photo) = patch.photo {
            item.photo = photo.filter(|p| !p.is_empty());
        }
        if let Some(location) = patch.location {
            item.location = location;
            item.set_flags(derive_flags(item.flags(), location));
        }
        item.touch(now);
        debug!(id, "item edited");
        Ok(Some(&*item))
    }

    /// Remove an item permanently, returning it if it was present
    pub fn delete(&mut self, id: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(pos);
        self.ids.remove(id);
        debug!(id, "item deleted");
        Some(item)
    }
}
