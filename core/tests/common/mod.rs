// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use flatshop::{MemoryStore, NewProduct, Product, Shop};
use once_cell::sync::Lazy;
use serde_json::Number;
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Shops over a fresh in-memory store ---

/// Shop whose products document exists and is empty.
pub async fn empty_shop() -> (Shop, MemoryStore) {
  let store = MemoryStore::new();
  let shop = Shop::with_defaults(Arc::new(store.clone()));
  shop
    .products
    .ensure_document()
    .await
    .expect("seeding the products document");
  (shop, store)
}

pub fn new_product(title: &str, price: i64, stock: i64) -> NewProduct {
  NewProduct {
    title: Some(title.to_string()),
    price: Some(Number::from(price)),
    stock: Some(Number::from(stock)),
    ..Default::default()
  }
}

/// Creates `count` products titled "P0".."P{count-1}" in that order.
pub async fn seed_products(shop: &Shop, count: usize) -> Vec<Product> {
  let mut created = Vec::with_capacity(count);
  for i in 0..count {
    let product = shop
      .products
      .create(new_product(&format!("P{i}"), 10 + i as i64, 1))
      .await
      .expect("creating seed product");
    created.push(product);
  }
  created
}
