use super::backend::Backend;
use super::record::{FieldUpdate, ItemRow};
use crate::error::PersistenceError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Kind of persistence call a report refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Insert,
    Update,
    Remove,
    Flush,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Load => "load",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Remove => "remove",
            Operation::Flush => "flush",
        })
    }
}

/// Non-fatal notice that a backend call failed
///
/// The in-memory state that triggered the call is left as it is.
#[derive(Debug)]
pub struct PersistenceReport {
    pub operation: Operation,
    pub item_id: Option<String>,
    pub error: PersistenceError,
}

impl fmt::Display for PersistenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item_id {
            Some(id) => write!(f, "{} of item {} failed: {}", self.operation, id, self.error),
            None => write!(f, "{} failed: {}", self.operation, self.error),
        }
    }
}

#[derive(Debug)]
pub(crate) enum PersistenceOp {
    Insert(ItemRow),
    Update { id: String, fields: FieldUpdate },
    Remove { id: String },
    Flush(oneshot::Sender<()>),
}

impl PersistenceOp {
    fn operation(&self) -> Option<Operation> {
        match self {
            PersistenceOp::Insert(_) => Some(Operation::Insert),
            PersistenceOp::Update { .. } => Some(Operation::Update),
            PersistenceOp::Remove { .. } => Some(Operation::Remove),
            PersistenceOp::Flush(_) => None,
        }
    }
}

/// Ordered channel of pending backend writes
///
/// One worker task applies queued writes strictly in submission order, so a
/// move queued after an insert never reaches the backend first. Cloning the
/// queue shares the same worker.
#[derive(Debug, Clone)]
pub struct PersistenceQueue {
    tx: mpsc::UnboundedSender<PersistenceOp>,
}

impl PersistenceQueue {
    /// Start the worker for `backend`; failures arrive on the returned receiver
    ///
    /// Must be called from within a tokio runtime. The worker stops once every
    /// clone of the queue has been dropped and the backlog is drained.
    pub fn spawn(backend: Arc<dyn Backend>) -> (Self, mpsc::UnboundedReceiver<PersistenceReport>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (report_tx, report_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(backend, rx, report_tx));
        (Self { tx }, report_rx)
    }

    pub(crate) fn send(&self, op: PersistenceOp) -> Result<(), PersistenceError> {
        self.tx.send(op).map_err(|_| PersistenceError::Closed)
    }

    /// Wait until every write queued before this call has been attempted
    pub async fn flush(&self) -> Result<(), PersistenceError> {
        let (done_tx, done_rx) = oneshot::channel();
        self.send(PersistenceOp::Flush(done_tx))?;
        done_rx.await.map_err(|_| PersistenceError::Closed)
    }
}

async fn run_worker(
    backend: Arc<dyn Backend>,
    mut rx: mpsc::UnboundedReceiver<PersistenceOp>,
    reports: mpsc::UnboundedSender<PersistenceReport>,
) {
    while let Some(op) = rx.recv().await {
        let operation = op.operation();
        let (item_id, result) = match op {
            PersistenceOp::Insert(row) => {
                let id = row.id.clone();
                let result = backend.insert(row).await.and_then(|stored| {
                    let item = stored.decode()?;
                    debug!(id = %item.id, "insert persisted");
                    Ok(())
                });
                (id, result)
            }
            PersistenceOp::Update { id, fields } => {
                let result = backend.update_fields(&id, &fields).await;
                (Some(id), result)
            }
            PersistenceOp::Remove { id } => {
                let result = backend.remove(&id).await;
                (Some(id), result)
            }
            PersistenceOp::Flush(done) => {
                // the receiver may have given up waiting
                let _ = done.send(());
                continue;
            }
        };

        if let (Err(error), Some(operation)) = (result, operation) {
            warn!(%operation, id = ?item_id, %error, "persistence write failed");
            let report = PersistenceReport {
                operation,
                item_id,
                error,
            };
            if reports.send(report).is_err() {
                debug!("report receiver dropped");
            }
        }
    }
    debug!("persistence worker stopped");
}
