// ABOUTME: In-memory profile store backed by a shared map of JSON documents
// ABOUTME: Used for tests and for sessions that should not touch the disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileStore, StoreKey};
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store
///
/// Clones share the same map, so a store handed to several tasks stays consistent.
/// Documents are kept as `serde_json::Value` to behave like the file backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<RwLock<HashMap<StoreKey, Value>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryStore {
    async fn load<T: DeserializeOwned + Send>(&self, key: StoreKey) -> AppResult<Option<T>> {
        let value = self.documents.read().await.get(&key).cloned();
        value
            .map(|value| serde_json::from_value(value).map_err(Into::into))
            .transpose()
    }

    async fn save<T: Serialize + Send + Sync>(&self, key: StoreKey, value: &T) -> AppResult<()> {
        let value = serde_json::to_value(value)?;
        self.documents.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StoreKey) -> AppResult<bool> {
        Ok(self.documents.write().await.remove(&key).is_some())
    }

    async fn clear(&self) -> AppResult<()> {
        self.documents.write().await.clear();
        Ok(())
    }
}
