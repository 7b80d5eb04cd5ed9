//! Persistence boundary
//!
//! - `record`: loosely-typed `ItemRow` and its decode step into `Item`
//! - `backend`: the `Backend` trait every store implements
//! - `toml_file`: single-file TOML backend for local mode
//! - `memory`: in-process backend
//! - `queue`: ordered background writer and failure reports

mod backend;
mod memory;
mod queue;
mod record;
mod toml_file;

pub use backend::Backend;
pub use memory::MemoryBackend;
pub use queue::{Operation, PersistenceQueue, PersistenceReport};
pub(crate) use queue::PersistenceOp;
pub use record::{FieldUpdate, ItemRow};
pub use toml_file::TomlFileBackend;
