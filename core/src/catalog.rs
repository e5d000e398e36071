// core/src/catalog.rs

//! Product collection: list, get, create, update and delete over the one
//! document holding every product in insertion order.

use crate::document::Document;
use crate::error::{ShopError, ShopResult, StoreError};
use crate::models::{NewProduct, Product, ProductPatch};
use crate::store::DocumentStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProductCatalog {
  document: Arc<Document<Vec<Product>>>,
}

fn missing_products(document: &str) -> ShopError {
  StoreError::Missing {
    document: document.to_string(),
  }
  .into()
}

fn not_found(id: &str) -> ShopError {
  warn!(product_id = %id, "Product not found.");
  ShopError::ProductNotFound { id: id.to_string() }
}

impl ProductCatalog {
  pub fn new(store: Arc<dyn DocumentStore>, document_name: impl Into<String>) -> Self {
    Self {
      document: Arc::new(Document::new(store, document_name)),
    }
  }

  pub fn document_name(&self) -> &str {
    self.document.name()
  }

  /// Creates an empty products document if none exists. Returns whether one
  /// was created.
  pub async fn ensure_document(&self) -> ShopResult<bool> {
    let created = self.document.create_if_missing(&Vec::new()).await?;
    if created {
      info!(document = %self.document.name(), "Created empty products document.");
    }
    Ok(created)
  }

  /// All products, or the first `limit` of them.
  #[instrument(name = "catalog::list", skip(self))]
  pub async fn list(&self, limit: Option<usize>) -> ShopResult<Vec<Product>> {
    let mut products = self.document.load_required().await?;
    if let Some(limit) = limit {
      products.truncate(limit);
    }
    Ok(products)
  }

  #[instrument(name = "catalog::get", skip(self))]
  pub async fn get(&self, id: &str) -> ShopResult<Product> {
    self
      .document
      .load_required()
      .await?
      .into_iter()
      .find(|p| p.id == id)
      .ok_or_else(|| not_found(id))
  }

  /// Assigns a fresh id and `status = true`, appends, persists.
  #[instrument(name = "catalog::create", skip(self, fields))]
  pub async fn create(&self, fields: NewProduct) -> ShopResult<Product> {
    let product = fields.into_product(Uuid::new_v4().to_string());
    let created = product.clone();
    self
      .document
      .mutate(missing_products, move |products| {
        products.push(product);
        Ok(())
      })
      .await?;
    info!(product_id = %created.id, "Product created.");
    Ok(created)
  }

  #[instrument(name = "catalog::update", skip(self, patch))]
  pub async fn update(&self, id: &str, patch: ProductPatch) -> ShopResult<Product> {
    let updated = self
      .document
      .mutate(missing_products, |products| {
        let product = products.iter_mut().find(|p| p.id == id).ok_or_else(|| not_found(id))?;
        patch.apply_to(product);
        Ok(product.clone())
      })
      .await?;
    info!(product_id = %id, "Product updated.");
    Ok(updated)
  }

  #[instrument(name = "catalog::delete", skip(self))]
  pub async fn delete(&self, id: &str) -> ShopResult<()> {
    self
      .document
      .mutate(missing_products, |products| {
        let index = products.iter().position(|p| p.id == id).ok_or_else(|| not_found(id))?;
        products.remove(index);
        Ok(())
      })
      .await?;
    info!(product_id = %id, "Product deleted.");
    Ok(())
  }
}
