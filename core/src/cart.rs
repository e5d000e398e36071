// core/src/cart.rs

//! The single cart. Its document holds one cart record; creating a cart
//! replaces whatever cart was there.

use crate::document::Document;
use crate::error::{ShopError, ShopResult};
use crate::models::{Cart, CartEntry};
use crate::store::DocumentStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CartService {
  document: Arc<Document<Cart>>,
}

fn not_found(id: &str) -> ShopError {
  warn!(cart_id = %id, "Cart not found.");
  ShopError::CartNotFound { id: id.to_string() }
}

impl CartService {
  pub fn new(store: Arc<dyn DocumentStore>, document_name: impl Into<String>) -> Self {
    Self {
      document: Arc::new(Document::new(store, document_name)),
    }
  }

  pub fn document_name(&self) -> &str {
    self.document.name()
  }

  /// Creates an empty cart, discarding the previous one.
  #[instrument(name = "cart::create", skip(self))]
  pub async fn create_cart(&self) -> ShopResult<Cart> {
    let cart = Cart::new(Uuid::new_v4().to_string());
    self.document.replace(&cart).await?;
    info!(cart_id = %cart.id, "Cart created.");
    Ok(cart)
  }

  #[instrument(name = "cart::products", skip(self))]
  pub async fn cart_products(&self, cart_id: &str) -> ShopResult<Vec<CartEntry>> {
    match self.document.load().await? {
      Some(cart) if cart.id == cart_id => Ok(cart.products),
      _ => Err(not_found(cart_id)),
    }
  }

  /// Adds one unit of `product_id`. The product id is not checked against
  /// the catalog.
  #[instrument(name = "cart::add_product", skip(self))]
  pub async fn add_product(&self, cart_id: &str, product_id: &str) -> ShopResult<Vec<CartEntry>> {
    let (entries, quantity) = self
      .document
      .mutate(
        |_| not_found(cart_id),
        |cart| {
          if cart.id != cart_id {
            return Err(not_found(cart_id));
          }
          let quantity = cart.add_product(product_id);
          Ok((cart.products.clone(), quantity))
        },
      )
      .await?;
    info!(quantity, "Product added to cart.");
    Ok(entries)
  }
}
