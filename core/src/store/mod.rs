// core/src/store/mod.rs

//! Storage seam: named documents loaded and saved as whole byte blobs.
//!
//! Handlers never touch the filesystem directly. They go through a
//! [`DocumentStore`], so the same catalog and cart logic runs against
//! [`FileStore`] in production and [`MemoryStore`] in tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use async_trait::async_trait;

/// A flat key/value store of whole documents.
///
/// `save` always replaces the entire document; there is no append or partial
/// update path.
#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Returns the document's bytes, or `None` if it has never been written.
  async fn load(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError>;

  /// Overwrites the document with `bytes`.
  async fn save(&self, name: &str, bytes: Vec<u8>) -> Result<(), StoreError>;
}
