// server/src/web/routes.rs

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, product_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Malformed JSON bodies become `AppError::Validation` (400 with a JSON body).
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

// Called from `main.rs` and from the tests below to mount every endpoint.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.route("/health", web::get().to(health_check_handler)).service(
    web::scope("/api")
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("", web::post().to(product_handlers::create_product_handler))
          .route("/{pid}", web::get().to(product_handlers::get_product_handler))
          .route("/{pid}", web::put().to(product_handlers::update_product_handler))
          .route("/{pid}", web::delete().to(product_handlers::delete_product_handler)),
      )
      .service(
        web::scope("/carts")
          .route("", web::post().to(cart_handlers::create_cart_handler))
          .route("/{cid}", web::get().to(cart_handlers::get_cart_products_handler))
          .route(
            "/{cid}/product/{pid}",
            web::post().to(cart_handlers::add_product_to_cart_handler),
          ),
      ),
  );
}
