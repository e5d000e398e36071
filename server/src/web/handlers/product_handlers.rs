// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use flatshop::{NewProduct, ProductPatch};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  // Kept raw so an unusable value can be ignored instead of rejected.
  pub limit: Option<String>,
}

/// A non-negative integer `limit` truncates the list; anything else lists
/// everything.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
  let raw = raw?;
  match raw.trim().parse::<usize>() {
    Ok(limit) => Some(limit),
    Err(e) => {
      warn!(limit = %raw, error = %e, "Ignoring unusable limit.");
      None
    }
  }
}

#[instrument(name = "handler::list_products", skip(app_state, query_params), fields(limit = ?query_params.limit))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let limit = parse_limit(query_params.limit.as_deref());
  let products = app_state.shop.products.list(limit).await?;
  info!("Listed {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = app_state.shop.products.get(&product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, req_body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.shop.products.create(req_body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, req_body), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_body: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let patch = req_body.into_inner();
  if patch.is_empty() {
    info!("Update carries no fields; the record is rewritten unchanged.");
  }
  let product = app_state.shop.products.update(&product_id, patch).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.shop.products.delete(&product_id).await?;
  Ok(HttpResponse::NoContent().finish())
}
