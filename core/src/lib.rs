// src/lib.rs

//! flatshop: a product catalog and a single shopping cart kept in two flat
//! JSON documents.
//!
//! Every operation follows one pattern: load the whole document, parse it,
//! transform it in memory and, for mutations, write the whole document back.
//! Storage sits behind [`store::DocumentStore`], so the same services run
//! over files in production and over memory in tests.

pub mod cart;
pub mod catalog;
pub mod document;
pub mod error;
pub mod models;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::cart::CartService;
pub use crate::catalog::ProductCatalog;
pub use crate::document::Document;
pub use crate::error::{ShopError, ShopResult, StoreError};
pub use crate::models::{Cart, CartEntry, NewProduct, Product, ProductPatch};
pub use crate::store::{DocumentStore, FileStore, MemoryStore};

use std::sync::Arc;

pub const DEFAULT_PRODUCTS_DOCUMENT: &str = "products.json";
pub const DEFAULT_CART_DOCUMENT: &str = "cart.json";

/// Both services over one store.
#[derive(Debug, Clone)]
pub struct Shop {
  pub products: ProductCatalog,
  pub cart: CartService,
}

impl Shop {
  pub fn new(
    store: Arc<dyn DocumentStore>,
    products_document: impl Into<String>,
    cart_document: impl Into<String>,
  ) -> Self {
    Self {
      products: ProductCatalog::new(store.clone(), products_document),
      cart: CartService::new(store, cart_document),
    }
  }

  /// Shop over `store` with the default document names.
  pub fn with_defaults(store: Arc<dyn DocumentStore>) -> Self {
    Self::new(store, DEFAULT_PRODUCTS_DOCUMENT, DEFAULT_CART_DOCUMENT)
  }
}
