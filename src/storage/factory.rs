// ABOUTME: Profile storage factory for environment-based backend selection
// ABOUTME: Wraps the in-memory and file backends behind one concrete type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FileStore, InMemoryStore, ProfileStore, StoreKey};
use crate::config::{StorageBackend, StorageConfig};
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

/// Unified storage interface over the configured backend
#[derive(Debug, Clone)]
pub enum ProfileStorage {
    /// Process-local documents
    Memory(InMemoryStore),
    /// JSON document on disk
    File(FileStore),
}

impl ProfileStorage {
    /// Create storage for a configuration
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        match config.backend {
            StorageBackend::Memory => {
                info!("Initializing in-memory profile storage");
                Self::Memory(InMemoryStore::new())
            }
            StorageBackend::File => {
                let path = config.document_path();
                info!(path = %path.display(), "Initializing file profile storage");
                Self::File(FileStore::new(path))
            }
        }
    }

    /// Create storage from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the storage configuration is invalid
    pub fn from_env() -> AppResult<Self> {
        let config = StorageConfig::from_env()?;
        Ok(Self::new(&config))
    }

    /// Backend in use
    #[must_use]
    pub const fn backend(&self) -> StorageBackend {
        match self {
            Self::Memory(_) => StorageBackend::Memory,
            Self::File(_) => StorageBackend::File,
        }
    }
}

#[async_trait::async_trait]
impl ProfileStore for ProfileStorage {
    async fn load<T: DeserializeOwned + Send>(&self, key: StoreKey) -> AppResult<Option<T>> {
        match self {
            Self::Memory(store) => store.load(key).await,
            Self::File(store) => store.load(key).await,
        }
    }

    async fn save<T: Serialize + Send + Sync>(&self, key: StoreKey, value: &T) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.save(key, value).await,
            Self::File(store) => store.save(key, value).await,
        }
    }

    async fn remove(&self, key: StoreKey) -> AppResult<bool> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }

    async fn clear(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.clear().await,
            Self::File(store) => store.clear().await,
        }
    }
}
