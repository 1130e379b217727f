//! # Record Store Adapter
//!
//! Typed CRUD for [`PaydayRecord`] documents over the host's untyped
//! document store. Records are keyed by `{username}` filter.
//!
//! Decoding goes through [`PaydayRecord`]'s serde path, which is where
//! stringified timestamps coming back from the store get normalized into
//! proper epoch values - callers past this boundary never see a malformed
//! timestamp.

use std::sync::Arc;

use payday_core::PaydayRecord;
use serde_json::json;

use crate::collaborators::{DocumentStore, StoreResult};

/// Adapter owning the collection name and the store handle.
#[derive(Clone)]
pub struct PaydayStore {
    documents: Arc<dyn DocumentStore>,
    collection: String,
}

impl PaydayStore {
    /// Creates an adapter bound to one collection.
    pub fn new(documents: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            documents,
            collection: collection.into(),
        }
    }

    /// Creates the backing collection if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn ensure_collection(&self) -> StoreResult<()> {
        self.documents.create_collection(&self.collection).await
    }

    /// Fetches the record for `username`, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error on backend failure or an undecodable document.
    pub async fn get(&self, username: &str) -> StoreResult<Option<PaydayRecord>> {
        let filter = json!({ "username": username });
        let Some(document) = self.documents.get(filter, &self.collection).await? else {
            return Ok(None);
        };

        let record = serde_json::from_value(document)?;
        Ok(Some(record))
    }

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn create(&self, record: &PaydayRecord) -> StoreResult<()> {
        let document = serde_json::to_value(record)?;
        self.documents.create(document, &self.collection).await
    }

    /// Replaces the stored record for the same username.
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend fails.
    pub async fn update(&self, record: &PaydayRecord) -> StoreResult<()> {
        let document = serde_json::to_value(record)?;
        self.documents.update(document, &self.collection).await
    }
}
