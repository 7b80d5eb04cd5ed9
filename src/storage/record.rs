use crate::error::DecodeError;
use crate::inventory::{Category, Item, Location};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Digits of sub-second precision the backend keeps
const TIMESTAMP_PRECISION: u16 = 6;

/// An item as the backend stores it
///
/// Every column is nullable: rows come from outside the process and are not
/// trusted until `decode` has validated them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner of the row; `None` for items created in anonymous mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_today: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn truncate(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(TIMESTAMP_PRECISION)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ItemRow {
    /// Encode an item for the backend, scoped to `owner`
    pub fn from_item(item: &Item, owner: Option<&str>) -> Self {
        Self {
            id: Some(item.id.clone()),
            user_id: owner.map(str::to_string),
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            location: Some(item.location.label().to_string()),
            category: Some(item.category.label().to_string()),
            photo: item.photo.clone(),
            for_today: Some(item.for_today),
            reminder: Some(item.reminder),
            created_at: Some(truncate(item.created_at)),
            updated_at: Some(truncate(item.updated_at)),
        }
    }

    /// Validate and default this row into a strict `Item`
    ///
    /// Required: id, a non-blank name, a known location and `created_at`.
    /// Everything else falls back to its documented default. An unknown
    /// category becomes `Other`; an `updated_at` before `created_at` is
    /// clamped up to it.
    pub fn decode(self) -> Result<Item, DecodeError> {
        let id = non_empty(self.id).ok_or(DecodeError::MissingField("id"))?;

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            Some(_) => return Err(DecodeError::BlankName { id }),
            None => return Err(DecodeError::MissingField("name")),
        };

        let raw_location = self.location.ok_or(DecodeError::MissingField("location"))?;
        let location: Location =
            raw_location
                .parse()
                .map_err(|_| DecodeError::InvalidLocation {
                    id: id.clone(),
                    value: raw_location.clone(),
                })?;

        let created_at = self
            .created_at
            .ok_or(DecodeError::MissingField("created_at"))?;
        let updated_at = self
            .updated_at
            .map_or(created_at, |updated| updated.max(created_at));

        let category = self
            .category
            .and_then(|c| c.parse::<Category>().ok())
            .unwrap_or_default();

        Ok(Item {
            id,
            name,
            description: self.description.unwrap_or_default(),
            location,
            category,
            photo: self.photo.filter(|p| !p.is_empty()),
            for_today: self.for_today.unwrap_or(false),
            reminder: self.reminder.unwrap_or(false),
            created_at,
            updated_at,
        })
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, fields: &FieldUpdate) {
        if let Some(name) = &fields.name {
            self.name = Some(name.clone());
        }
        if let Some(description) = &fields.description {
            self.description = Some(description.clone());
        }
        if let Some(location) = fields.location {
            self.location = Some(location.label().to_string());
        }
        if let Some(category) = fields.category {
            self.category = Some(category.label().to_string());
        }
        if let Some(photo) = &fields.photo {
            self.photo = photo.clone();
        }
        if let Some(for_today) = fields.for_today {
            self.for_today = Some(for_today);
        }
        if let Some(reminder) = fields.reminder {
            self.reminder = Some(reminder);
        }
        if let Some(updated_at) = fields.updated_at {
            self.updated_at = Some(truncate(updated_at));
        }
    }
}

/// Columns to overwrite on an existing row; `None` leaves a column alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub category: Option<Category>,
    /// `Some(None)` clears the photo
    pub photo: Option<Option<String>>,
    pub for_today: Option<bool>,
    pub reminder: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl FieldUpdate {
    /// Location plus both flags, since a move may re-derive them
    pub fn moved(item: &Item) -> Self {
        Self {
            location: Some(item.location),
            for_today: Some(item.for_today),
            reminder: Some(item.reminder),
            updated_at: Some(item.updated_at),
            ..Default::default()
        }
    }

    pub fn for_today(item: &Item) -> Self {
        Self {
            for_today: Some(item.for_today),
            updated_at: Some(item.updated_at),
            ..Default::default()
        }
    }

    pub fn reminder(item: &Item) -> Self {
        Self {
            reminder: Some(item.reminder),
            updated_at: Some(item.updated_at),
            ..Default::default()
        }
    }

    /// Every mutable column, used after a general field edit
    pub fn edited(item: &Item) -> Self {
        Self {
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            location: Some(item.location),
            category: Some(item.category),
            photo: Some(item.photo.clone()),
            for_today: Some(item.for_today),
            reminder: Some(item.reminder),
            updated_at: Some(item.updated_at),
        }
    }
}
