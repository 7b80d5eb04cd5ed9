use super::location::{Category, Location};
use chrono::{DateTime, Utc};

/// The pair of flags that derivation may override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Selected to take along today
    pub for_today: bool,
    /// Should be remembered (e.g. left at school)
    pub reminder: bool,
}

/// A tracked belonging
///
/// Items only live inside an `ItemStore`; callers get shared references or
/// clones, never a handle that mutates behind the store's back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier assigned at creation
    pub id: String,
    /// Display name, never blank
    pub name: String,
    /// Free text, may be empty
    pub description: String,
    /// Current location
    pub location: Location,
    pub category: Category,
    /// Opaque encoded image (e.g. a data URL)
    pub photo: Option<String>,
    pub for_today: bool,
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn flags(&self) -> Flags {
        Flags {
            for_today: self.for_today,
            reminder: self.reminder,
        }
    }

    pub(crate) fn set_flags(&mut self, flags: Flags) {
        self.for_today = flags.for_today;
        self.reminder = flags.reminder;
    }

    /// Case-insensitive substring match against name or description
    ///
    /// An empty needle matches everything.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// Bump `updated_at` to `now`, never moving it backwards
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

/// Input for `ItemStore::add`: an item without identity or timestamps
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub location: Location,
    pub category: Category,
    pub photo: Option<String>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// General field edit; `None` leaves a field untouched
///
/// `photo: Some(None)` clears the photo.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub photo: Option<Option<String>>,
    pub location: Option<Location>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.photo.is_none()
            && self.location.is_none()
    }
}
