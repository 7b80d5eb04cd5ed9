//! Per-identity session owning the item store
//!
//! A `Session` is opened when a user signs in (or in anonymous local mode)
//! and closed on sign-out. Mutations are applied to the in-memory store
//! immediately and then mirrored to the backend through the persistence
//! queue; a failed write is reported, never rolled back.

use crate::error::{PersistenceError, ValidationError};
use crate::identity::Identity;
use crate::inventory::{
    Item, ItemDraft, ItemPatch, ItemQuery, ItemStore, Location, LocationStats, ViewConfig, views,
};
use crate::storage::{
    Backend, FieldUpdate, ItemRow, Operation, PersistenceOp, PersistenceQueue, PersistenceReport,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub struct Session {
    identity: Identity,
    config: ViewConfig,
    store: ItemStore,
    queue: PersistenceQueue,
    reports: mpsc::UnboundedReceiver<PersistenceReport>,
    /// Reports raised on this side of the queue (load failures, closed queue)
    pending: Vec<PersistenceReport>,
}

impl Session {
    /// Load the identity's items from `backend` and start the writer
    ///
    /// Never fails: an unreadable backend yields an empty session with a
    /// `Load` report, and malformed rows are skipped with a report each.
    pub async fn open(identity: Identity, backend: Arc<dyn Backend>, config: ViewConfig) -> Self {
        let mut pending = Vec::new();

        let rows = match backend.load_all(identity.user_id()).await {
            Ok(rows) => rows,
            Err(error) => {
                warn!(%error, "failed to load items, starting empty");
                pending.push(PersistenceReport {
                    operation: Operation::Load,
                    item_id: None,
                    error,
                });
                Vec::new()
            }
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.id.clone();
            match row.decode() {
                Ok(item) => items.push(item),
                Err(error) => {
                    warn!(id = ?id, %error, "skipping malformed row");
                    pending.push(PersistenceReport {
                        operation: Operation::Load,
                        item_id: id,
                        error: PersistenceError::Decode(error),
                    });
                }
            }
        }

        let store = ItemStore::from_items(items);
        let (queue, reports) = PersistenceQueue::spawn(backend);
        info!(
            user = identity.display_name(),
            items = store.len(),
            "session opened"
        );

        Self {
            identity,
            config,
            store,
            queue,
            reports,
            pending,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Items newest first
    pub fn list(&self) -> &[Item] {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.store.get(id)
    }

    /// A handle to the writer, e.g. to flush without holding the session
    pub fn queue(&self) -> PersistenceQueue {
        self.queue.clone()
    }

    fn submit(&mut self, operation: Operation, item_id: &str, op: PersistenceOp) {
        if let Err(error) = self.queue.send(op) {
            warn!(%operation, id = item_id, %error, "could not queue write");
            self.pending.push(PersistenceReport {
                operation,
                item_id: Some(item_id.to_string()),
                error,
            });
        }
    }

    fn submit_update(&mut self, item: &Item, fields: FieldUpdate) {
        let id = item.id.clone();
        self.submit(
            Operation::Update,
            &item.id,
            PersistenceOp::Update { id, fields },
        );
    }

    pub fn add(&mut self, draft: ItemDraft) -> Result<Item, ValidationError> {
        let item = self.store.add(draft)?.clone();
        let row = ItemRow::from_item(&item, self.identity.user_id());
        self.submit(Operation::Insert, &item.id, PersistenceOp::Insert(row));
        Ok(item)
    }

    /// `None` when the id is unknown; nothing is written in that case
    pub fn update_location(&mut self, id: &str, location: Location) -> Option<Item> {
        let item = self.store.update_location(id, location)?.clone();
        self.submit_update(&item, FieldUpdate::moved(&item));
        Some(item)
    }

    pub fn cycle_location(&mut self, id: &str) -> Option<Item> {
        let item = self.store.cycle_location(id)?.clone();
        self.submit_update(&item, FieldUpdate::moved(&item));
        Some(item)
    }

    pub fn toggle_for_today(&mut self, id: &str) -> Option<Item> {
        let item = self.store.toggle_for_today(id)?.clone();
        self.submit_update(&item, FieldUpdate::for_today(&item));
        Some(item)
    }

    pub fn toggle_reminder(&mut self, id: &str) -> Option<Item> {
        let item = self.store.toggle_reminder(id)?.clone();
        self.submit_update(&item, FieldUpdate::reminder(&item));
        Some(item)
    }

    pub fn edit(&mut self, id: &str, patch: ItemPatch) -> Result<Option<Item>, ValidationError> {
        let Some(item) = self.store.edit(id, patch)?.cloned() else {
            return Ok(None);
        };
        self.submit_update(&item, FieldUpdate::edited(&item));
        Ok(Some(item))
    }

    pub fn delete(&mut self, id: &str) -> Option<Item> {
        let item = self.store.delete(id)?;
        self.submit(
            Operation::Remove,
            id,
            PersistenceOp::Remove { id: id.to_string() },
        );
        Some(item)
    }

    /// Items matching `query`, honoring this session's view config
    pub fn filter(&self, query: &ItemQuery) -> Vec<&Item> {
        views::filter(self.store.list(), query, &self.config)
    }

    pub fn grouped(&self, query: &ItemQuery) -> BTreeMap<Location, Vec<&Item>> {
        views::group_by_location(&self.filter(query))
    }

    pub fn stats(&self) -> LocationStats {
        views::stats(self.store.list())
    }

    pub fn reminders(&self) -> Vec<&Item> {
        views::reminders(self.store.list(), self.config.reminder_source)
    }

    pub fn today(&self) -> Vec<&Item> {
        views::today(self.store.list())
    }

    pub fn today_candidates(&self, search: &str) -> Vec<&Item> {
        views::today_candidates(self.store.list(), search)
    }

    /// Drain every persistence failure reported so far
    pub fn take_reports(&mut self) -> Vec<PersistenceReport> {
        let mut reports = std::mem::take(&mut self.pending);
        while let Ok(report) = self.reports.try_recv() {
            reports.push(report);
        }
        reports
    }

    /// Wait for every queued write to be attempted
    pub async fn flush(&mut self) {
        if let Err(error) = self.queue.flush().await {
            warn!(%error, "flush failed");
            self.pending.push(PersistenceReport {
                operation: Operation::Flush,
                item_id: None,
                error,
            });
        }
    }

    /// Sign-out teardown: flush outstanding writes and hand back any reports
    pub async fn close(mut self) -> Vec<PersistenceReport> {
        self.flush().await;
        let reports = self.take_reports();
        info!(
            user = self.identity.display_name(),
            unsynced = reports.len(),
            "session closed"
        );
        reports
    }
}
