// core/src/store/memory.rs

use super::DocumentStore;
use crate::error::StoreError;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-local store. Clones share the same documents.
///
/// The lock is only held for the copy in or out, never across an await.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  documents: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds a document with raw bytes, bypassing any record type.
  pub fn insert_raw(&self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
    self.documents.write().insert(name.into(), bytes.into());
  }

  pub fn raw(&self, name: &str) -> Option<Vec<u8>> {
    self.documents.read().get(name).cloned()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.documents.read().contains_key(name)
  }
}

#[async_trait]
impl DocumentStore for MemoryStore {
  async fn load(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
    Ok(self.raw(name))
  }

  async fn save(&self, name: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
    self.insert_raw(name, bytes);
    Ok(())
  }
}
