// ABOUTME: File-backed profile store keeping every document in one JSON file
// ABOUTME: Writes go to a temporary sibling file and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileStore, StoreKey};
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Layout version written into new documents
const DOCUMENT_VERSION: u32 = 1;

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

/// JSON file store
///
/// A missing file reads as an empty store. Read-modify-write cycles are
/// serialized through a shared lock, so clones of one store never lose updates.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Store backed by the document at `path` (created on first write)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> AppResult<StoreDocument> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::serialization(format!(
                    "Corrupt profile document {}: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StoreDocument {
                version: DOCUMENT_VERSION,
                entries: BTreeMap::new(),
            }),
            Err(e) => Err(
                AppError::storage(format!("Failed to read {}", self.path.display()))
                    .with_source(e),
            ),
        }
    }

    async fn write_document(&self, document: &StoreDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(
            path = %self.path.display(),
            entries = document.entries.len(),
            "Profile document written"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileStore for FileStore {
    async fn load<T: DeserializeOwned + Send>(&self, key: StoreKey) -> AppResult<Option<T>> {
        let mut document = {
            let _guard = self.lock.lock().await;
            self.read_document().await?
        };
        document
            .entries
            .remove(key.as_str())
            .map(|value| serde_json::from_value(value).map_err(Into::into))
            .transpose()
    }

    async fn save<T: Serialize + Send + Sync>(&self, key: StoreKey, value: &T) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.version = DOCUMENT_VERSION;
        document.entries.insert(key.as_str().to_owned(), value);
        self.write_document(&document).await
    }

    async fn remove(&self, key: StoreKey) -> AppResult<bool> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        let existed = document.entries.remove(key.as_str()).is_some();
        if existed {
            self.write_document(&document).await?;
        }
        Ok(existed)
    }

    async fn clear(&self) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Profile document removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
