// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::create_cart", skip(app_state))]
pub async fn create_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let cart = app_state.shop.cart.create_cart().await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::get_cart_products", skip(app_state, path), fields(cart_id = %path.as_str()))]
pub async fn get_cart_products_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let cart_id = path.into_inner();
  let entries = app_state.shop.cart.cart_products(&cart_id).await?;
  Ok(HttpResponse::Ok().json(entries))
}

#[instrument(
    name = "handler::add_product_to_cart",
    skip(app_state, path),
    fields(cart_id = %path.0, product_id = %path.1)
)]
pub async fn add_product_to_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
  let (cart_id, product_id) = path.into_inner();
  let entries = app_state.shop.cart.add_product(&cart_id, &product_id).await?;
  Ok(HttpResponse::Ok().json(entries))
}
