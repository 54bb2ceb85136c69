// ABOUTME: Storage abstraction for the profile draft, computed plan and onboarding state
// ABOUTME: Pluggable backends (in-memory, JSON file) holding structured serde documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// JSON document on disk
pub mod file;
/// Import of flat per-key string storage
pub mod legacy;
/// Process-local store
pub mod memory;

pub use factory::ProfileStorage;
pub use file::FileStore;
pub use memory::InMemoryStore;

use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Slot in the store
///
/// | key | document |
/// |---|---|
/// | `Profile` | [`crate::models::ProfileDraft`] |
/// | `Plan` | [`crate::models::NutritionPlan`] |
/// | `Onboarding` | [`crate::onboarding::OnboardingFlow`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKey {
    /// Profile values entered by the user
    Profile,
    /// Last computed nutrition plan
    Plan,
    /// Onboarding wizard position and draft
    Onboarding,
}

impl StoreKey {
    /// Every key
    pub const ALL: [Self; 3] = [Self::Profile, Self::Plan, Self::Onboarding];

    /// Name of the key inside stored documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Plan => "plan",
            Self::Onboarding => "onboarding",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile store trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust,no_run
/// use calplan::models::ProfileDraft;
/// use calplan::storage::{InMemoryStore, ProfileStore, StoreKey};
/// # async fn example() -> Result<(), calplan::errors::AppError> {
/// let store = InMemoryStore::new();
/// store.save(StoreKey::Profile, &ProfileDraft::default()).await?;
/// let draft: Option<ProfileDraft> = store.load(StoreKey::Profile).await?;
/// assert!(draft.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Read and deserialize the document under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the document does not
    /// match `T`
    async fn load<T: DeserializeOwned + Send>(&self, key: StoreKey) -> AppResult<Option<T>>;

    /// Serialize and store `value` under `key`, replacing any previous document
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    async fn save<T: Serialize + Send + Sync>(&self, key: StoreKey, value: &T) -> AppResult<()>;

    /// Remove the document under `key`, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be updated
    async fn remove(&self, key: StoreKey) -> AppResult<bool>;

    /// Remove every document (log out)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be cleared
    async fn clear(&self) -> AppResult<()>;
}
