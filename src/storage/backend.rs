use super::record::{FieldUpdate, ItemRow};
use crate::error::PersistenceError;
use async_trait::async_trait;

/// Persistence collaborator behind a session
///
/// Implementations hand back raw rows; decoding into `Item` happens on the
/// caller's side of the boundary. Retries, if any, belong here and not in
/// the core.
#[async_trait]
pub trait Backend: Send + Sync {
    /// All rows owned by `owner_id`, or every row when `None`, newest first
    async fn load_all(&self, owner_id: Option<&str>) -> Result<Vec<ItemRow>, PersistenceError>;

    /// Store a new row and return it as persisted
    async fn insert(&self, row: ItemRow) -> Result<ItemRow, PersistenceError>;

    /// Overwrite some columns of an existing row
    async fn update_fields(&self, id: &str, fields: &FieldUpdate)
    -> Result<(), PersistenceError>;

    /// Delete a row; deleting an absent row is not an error
    async fn remove(&self, id: &str) -> Result<(), PersistenceError>;
}

/// Sort rows newest `created_at` first, rows without a timestamp last
///
/// Ties fall back to the id, which is time-ordered for generated ids.
pub(crate) fn newest_first(rows: &mut [ItemRow]) {
    rows.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Whether `row` belongs to `owner_id` (`None` means everything)
pub(crate) fn owned_by(row: &ItemRow, owner_id: Option<&str>) -> bool {
    match owner_id {
        None => true,
        Some(owner) => row.user_id.as_deref() == Some(owner),
    }
}
