// server/src/main.rs

mod config;
mod errors;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use flatshop::{DocumentStore, FileStore, Shop};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // RUST_LOG overrides
    .with_span_events(FmtSpan::CLOSE);
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Text => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);
  tracing::info!(config = ?app_config, "Starting flatshop server...");

  std::fs::create_dir_all(&app_config.data_dir)
    .with_context(|| format!("Failed to create data directory {}", app_config.data_dir.display()))?;

  let store: Arc<dyn DocumentStore> = Arc::new(FileStore::new(&app_config.data_dir));
  let shop = Shop::new(store, app_config.products_file.clone(), app_config.cart_file.clone());

  if app_config.init_documents {
    shop
      .products
      .ensure_document()
      .await
      .context("Failed to initialise the products document")?;
  }

  let app_data = actix_data::Data::new(AppState { shop });

  let server_address = (app_config.server_host.clone(), app_config.server_port);
  tracing::info!("Binding server to {}:{}...", server_address.0, server_address.1);

  HttpServer::new(move || {
    App::new()
      .app_data(app_data.clone()) // Share AppState with handlers
      .app_data(web::json_config())
      .app_data(web::query_config())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(server_address)
  .with_context(|| format!("Failed to bind {}:{}", app_config.server_host, app_config.server_port))?
  .run()
  .await
  .context("Server terminated with an error")?;

  tracing::info!("Server stopped.");
  Ok(())
}
