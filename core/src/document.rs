// core/src/document.rs

//! Typed view over one named document in a [`DocumentStore`].

use crate::error::{ShopError, StoreError};
use crate::store::DocumentStore;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, instrument};

/// One JSON document holding a record of type `T`.
///
/// Reads go straight to the store and take no lock. Mutations hold the
/// document's writer lock from the load through the save, so two concurrent
/// mutations of the same document never interleave.
pub struct Document<T> {
  name: String,
  store: Arc<dyn DocumentStore>,
  writer: Mutex<()>,
  _record: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for Document<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Document").field("name", &self.name).finish_non_exhaustive()
  }
}

impl<T> Document<T>
where
  T: Serialize + DeserializeOwned + Send,
{
  pub fn new(store: Arc<dyn DocumentStore>, name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      store,
      writer: Mutex::new(()),
      _record: PhantomData,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Loads and parses the document. `None` if it was never written.
  #[instrument(name = "Document::load", skip(self), fields(document = %self.name), err(Display))]
  pub async fn load(&self) -> Result<Option<T>, StoreError> {
    let Some(bytes) = self.store.load(&self.name).await? else {
      return Ok(None);
    };
    serde_json::from_slice(&bytes).map(Some).map_err(|source| {
      error!(error = %source, "Document content does not parse.");
      StoreError::Decode {
        document: self.name.clone(),
        source,
      }
    })
  }

  /// Loads the document, treating absence as a store failure.
  pub async fn load_required(&self) -> Result<T, StoreError> {
    self.load().await?.ok_or_else(|| StoreError::Missing {
      document: self.name.clone(),
    })
  }

  /// Serializes `value` and overwrites the whole document with it.
  pub async fn replace(&self, value: &T) -> Result<(), StoreError> {
    let _guard = self.writer.lock().await;
    self.save(value).await
  }

  /// Writes `initial` only if the document does not exist yet. Returns whether
  /// it was written.
  pub async fn create_if_missing(&self, initial: &T) -> Result<bool, StoreError> {
    let _guard = self.writer.lock().await;
    if self.store.load(&self.name).await?.is_some() {
      return Ok(false);
    }
    self.save(initial).await?;
    Ok(true)
  }

  /// Read-modify-write under the writer lock.
  ///
  /// `on_missing` decides what an absent document means for this caller.
  /// `apply` edits the loaded record in place; if it fails, nothing is written.
  pub async fn mutate<R, M, F>(&self, on_missing: M, apply: F) -> Result<R, ShopError>
  where
    M: FnOnce(&str) -> ShopError,
    F: FnOnce(&mut T) -> Result<R, ShopError>,
  {
    let _guard = self.writer.lock().await;
    let mut record = match self.load().await? {
      Some(record) => record,
      None => return Err(on_missing(&self.name)),
    };
    let outcome = apply(&mut record)?;
    self.save(&record).await?;
    Ok(outcome)
  }

  async fn save(&self, value: &T) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Encode {
      document: self.name.clone(),
      source,
    })?;
    debug!(document = %self.name, bytes = bytes.len(), "Persisting document.");
    self.store.save(&self.name, bytes).await
  }
}
