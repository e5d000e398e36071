// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Directory holding both documents.
  pub data_dir: PathBuf,
  pub products_file: String,
  pub cart_file: String,

  /// Create an empty products document at startup when it is missing.
  pub init_documents: bool,

  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; unset variables take their
  /// defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "0.0.0.0");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let data_dir = PathBuf::from(get_or("FLATSHOP_DATA_DIR", "."));
    let products_file = document_name("FLATSHOP_PRODUCTS_FILE", get_or("FLATSHOP_PRODUCTS_FILE", flatshop::DEFAULT_PRODUCTS_DOCUMENT))?;
    let cart_file = document_name("FLATSHOP_CART_FILE", get_or("FLATSHOP_CART_FILE", flatshop::DEFAULT_CART_DOCUMENT))?;
    if products_file == cart_file {
      return Err(AppError::Config(format!(
        "FLATSHOP_PRODUCTS_FILE and FLATSHOP_CART_FILE must differ (both are '{}')",
        products_file
      )));
    }

    let init_documents = get_or("FLATSHOP_INIT_DOCUMENTS", "true")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid FLATSHOP_INIT_DOCUMENTS value: {}", e)))?;

    let log_format = match get_or("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
      "text" => LogFormat::Text,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'text' or 'json'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      data_dir,
      products_file,
      cart_file,
      init_documents,
      log_format,
    })
  }
}

// Document names are plain file names inside the data directory.
fn document_name(var_name: &str, value: String) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
    return Err(AppError::Config(format!(
      "{} must be a plain file name, got '{}'",
      var_name, value
    )));
  }
  Ok(trimmed.to_string())
}
