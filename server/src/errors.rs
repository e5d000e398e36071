// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use flatshop::{ShopError, StoreError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {source}")]
  Store {
    #[from]
    source: StoreError,
  },
}

impl From<ShopError> for AppError {
  fn from(err: ShopError) -> Self {
    match err {
      ShopError::ProductNotFound { .. } => AppError::NotFound("Product not found".to_string()),
      ShopError::CartNotFound { .. } => AppError::NotFound("Cart not found".to_string()),
      ShopError::Store(source) => AppError::Store { source },
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let message = match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.clone(),
      // The client only learns which operation failed; the cause stays in the log.
      AppError::Store { source } => {
        let verb = if source.is_write() { "write" } else { "read" };
        format!("Failed to {} the {} document", verb, source.document())
      }
      AppError::Config(_) => "Configuration issue".to_string(),
    };

    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
    HttpResponse::build(status).json(json!({ "error": message }))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
