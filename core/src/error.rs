// core/src/error.rs
use thiserror::Error;

/// Failures of the backing store. Every variant is an I/O-class failure from
/// the caller's point of view.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("failed to read document '{document}': {source}")]
  Read {
    document: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to write document '{document}': {source}")]
  Write {
    document: String,
    #[source]
    source: std::io::Error,
  },

  #[error("document '{document}' is not valid JSON for its record type: {source}")]
  Decode {
    document: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("failed to encode document '{document}': {source}")]
  Encode {
    document: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("document '{document}' does not exist")]
  Missing { document: String },
}

impl StoreError {
  /// Name of the document the failure concerns.
  pub fn document(&self) -> &str {
    match self {
      StoreError::Read { document, .. }
      | StoreError::Write { document, .. }
      | StoreError::Decode { document, .. }
      | StoreError::Encode { document, .. }
      | StoreError::Missing { document } => document,
    }
  }

  /// True when the failure happened while persisting rather than loading.
  pub fn is_write(&self) -> bool {
    matches!(self, StoreError::Write { .. } | StoreError::Encode { .. })
  }
}

#[derive(Debug, Error)]
pub enum ShopError {
  #[error("product '{id}' not found")]
  ProductNotFound { id: String },

  #[error("cart '{id}' not found")]
  CartNotFound { id: String },

  #[error(transparent)]
  Store(#[from] StoreError),
}

impl ShopError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, ShopError::ProductNotFound { .. } | ShopError::CartNotFound { .. })
  }
}

pub type ShopResult<T, E = ShopError> = std::result::Result<T, E>;
