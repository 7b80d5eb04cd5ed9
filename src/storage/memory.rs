use super::backend::{Backend, newest_first, owned_by};
use super::record::{FieldUpdate, ItemRow};
use crate::error::PersistenceError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// In-process backend for anonymous sessions and tests
///
/// Writes can be made to fail on demand to exercise the non-rollback path.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows: Mutex<Vec<ItemRow>>,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<ItemRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent insert/update/remove fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored rows in storage order
    pub async fn rows(&self) -> Vec<ItemRow> {
        self.rows.lock().await.clone()
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Backend(
                "writes are disabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn load_all(&self, owner_id: Option<&str>) -> Result<Vec<ItemRow>, PersistenceError> {
        let rows = self.rows.lock().await;
        let mut owned: Vec<ItemRow> = rows
            .iter()
            .filter(|row| owned_by(row, owner_id))
            .cloned()
            .collect();
        newest_first(&mut owned);
        Ok(owned)
    }

    async fn insert(&self, row: ItemRow) -> Result<ItemRow, PersistenceError> {
        self.check_writable()?;
        self.rows.lock().await.push(row.clone());
        Ok(row)
    }

    async fn update_fields(
        &self,
        id: &str,
        fields: &FieldUpdate,
    ) -> Result<(), PersistenceError> {
        self.check_writable()?;
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id.as_deref() == Some(id))
            .ok_or_else(|| PersistenceError::Missing(id.to_string()))?;
        row.apply(fields);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.rows
            .lock()
            .await
            .retain(|row| row.id.as_deref() != Some(id));
        Ok(())
    }
}
