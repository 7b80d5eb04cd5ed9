use super::backend::{Backend, newest_first, owned_by};
use super::record::{FieldUpdate, ItemRow};
use crate::error::PersistenceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Current on-disk format
const FORMAT_VERSION: u32 = 1;

fn current_format() -> u32 {
    FORMAT_VERSION
}

#[derive(Debug, Serialize, Deserialize)]
struct ItemFile {
    #[serde(default = "current_format")]
    format_version: u32,
    #[serde(default)]
    items: Vec<ItemRow>,
}

impl Default for ItemFile {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            items: Vec::new(),
        }
    }
}

/// Local-mode backend keeping every row in one TOML file
///
/// Each write reads the whole file, changes it and writes it back. A file
/// that does not exist yet reads as an empty collection.
pub struct TomlFileBackend {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl TomlFileBackend {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn read(&self) -> Result<ItemFile, PersistenceError> {
        let content = match fs::read_to_string(&self.file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ItemFile::default()),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.file_path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(ItemFile::default());
        }
        let file: ItemFile =
            toml::from_str(&content).map_err(|source| PersistenceError::Parse {
                path: self.file_path.clone(),
                source,
            })?;
        // a newer file may carry columns this build would drop on rewrite
        if file.format_version > FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                path: self.file_path.clone(),
                found: file.format_version,
            });
        }
        Ok(file)
    }

    async fn write(&self, file: &ItemFile) -> Result<(), PersistenceError> {
        let content = toml::to_string_pretty(file)?;
        fs::write(&self.file_path, content)
            .await
            .map_err(|source| PersistenceError::Write {
                path: self.file_path.clone(),
                source,
            })
    }
}

#[async_trait]
impl Backend for TomlFileBackend {
    async fn load_all(&self, owner_id: Option<&str>) -> Result<Vec<ItemRow>, PersistenceError> {
        let _guard = self.lock.lock().await;
        let file = self.read().await?;
        let mut rows: Vec<ItemRow> = file
            .items
            .into_iter()
            .filter(|row| owned_by(row, owner_id))
            .collect();
        newest_first(&mut rows);
        debug!(path = %self.file_path.display(), rows = rows.len(), "loaded rows");
        Ok(rows)
    }

    async fn insert(&self, row: ItemRow) -> Result<ItemRow, PersistenceError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        file.items.push(row.clone());
        self.write(&file).await?;
        Ok(row)
    }

    async fn update_fields(
        &self,
        id: &str,
        fields: &FieldUpdate,
    ) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        let row = file
            .items
            .iter_mut()
            .find(|row| row.id.as_deref() == Some(id))
            .ok_or_else(|| PersistenceError::Missing(id.to_string()))?;
        row.apply(fields);
        self.write(&file).await
    }

    async fn remove(&self, id: &str) -> Result<(), PersistenceError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        let before = file.items.len();
        file.items.retain(|row| row.id.as_deref() != Some(id));
        if file.items.len() == before {
            return Ok(());
        }
        self.write(&file).await
    }
}
