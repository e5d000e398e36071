// core/src/store/file.rs

use super::DocumentStore;
use crate::error::StoreError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Documents stored as files under one directory; the document name is the
/// file name.
#[derive(Debug, Clone)]
pub struct FileStore {
  root: PathBuf,
}

impl FileStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn path_of(&self, name: &str) -> PathBuf {
    self.root.join(name)
  }

  fn temp_path_of(&self, name: &str) -> PathBuf {
    self.root.join(format!(".{name}.tmp"))
  }
}

#[async_trait]
impl DocumentStore for FileStore {
  #[instrument(name = "FileStore::load", skip(self), fields(root = %self.root.display()))]
  async fn load(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
    match tokio::fs::read(self.path_of(name)).await {
      Ok(bytes) => {
        debug!(bytes = bytes.len(), "Document read.");
        Ok(Some(bytes))
      }
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!("Document file absent.");
        Ok(None)
      }
      Err(source) => Err(StoreError::Read {
        document: name.to_string(),
        source,
      }),
    }
  }

  // Written beside the target and renamed over it, so readers never observe a
  // half-written document.
  #[instrument(name = "FileStore::save", skip(self, bytes), fields(root = %self.root.display(), bytes = bytes.len()))]
  async fn save(&self, name: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
      document: name.to_string(),
      source,
    };

    let temp_path = self.temp_path_of(name);
    let written = match tokio::fs::write(&temp_path, bytes).await {
      Ok(()) => tokio::fs::rename(&temp_path, self.path_of(name)).await,
      Err(e) => Err(e),
    };
    if let Err(source) = written {
      discard_temp(&temp_path).await;
      return Err(write_err(source));
    }
    debug!("Document written.");
    Ok(())
  }
}

// The target document is untouched on this path; only the temporary file goes.
async fn discard_temp(temp_path: &Path) {
  match tokio::fs::remove_file(temp_path).await {
    Ok(()) => {}
    Err(e) if e.kind() == ErrorKind::NotFound => {}
    Err(e) => warn!(path = %temp_path.display(), error = %e, "Failed to remove temporary document file."),
  }
}
