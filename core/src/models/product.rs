// core/src/models/product.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A catalog record as stored in the products document.
///
/// Only `id` is required. Absent fields stay absent when the record is written
/// back, and fields this type does not know about are carried in `extra`, so
/// rewriting the document never drops data from records an operation did not
/// touch. `price` and `stock` are kept as raw JSON because stored documents
/// may hold values of any type there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub stock: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub thumbnails: Option<Vec<String>>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Product {
  /// A record without a stored `status` counts as active.
  pub fn is_active(&self) -> bool {
    self.status.unwrap_or(true)
  }
}

/// Body of a create request. Carries no `id` or `status`; both are assigned.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewProduct {
  pub title: Option<String>,
  pub description: Option<String>,
  pub code: Option<String>,
  pub price: Option<Number>,
  pub stock: Option<Number>,
  pub category: Option<String>,
  pub thumbnails: Option<Vec<String>>,
}

impl NewProduct {
  pub fn into_product(self, id: String) -> Product {
    Product {
      id,
      title: self.title,
      description: self.description,
      code: self.code,
      price: self.price.map(Value::Number),
      status: Some(true),
      stock: self.stock.map(Value::Number),
      category: self.category,
      thumbnails: self.thumbnails,
      extra: Map::new(),
    }
  }
}

/// Body of an update request.
///
/// Known fields are typed; any other field is merged as-is through `extra`.
/// The identity field is never merged: an `id` in the body lands in `extra`
/// and is stripped in [`ProductPatch::apply_to`]. A known field that is absent
/// or `null` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
  pub title: Option<String>,
  pub description: Option<String>,
  pub code: Option<String>,
  pub price: Option<Number>,
  pub status: Option<bool>,
  pub stock: Option<Number>,
  pub category: Option<String>,
  pub thumbnails: Option<Vec<String>>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl ProductPatch {
  /// True when applying the patch would change nothing.
  pub fn is_empty(&self) -> bool {
    let known_empty = ProductPatch {
      extra: Map::new(),
      ..self.clone()
    } == Self::default();
    known_empty && self.extra.keys().all(|k| k == "id")
  }

  /// Shallow merge: every supplied field overwrites, the rest are kept.
  pub fn apply_to(mut self, product: &mut Product) {
    fn merge<V>(slot: &mut Option<V>, supplied: Option<V>) {
      if supplied.is_some() {
        *slot = supplied;
      }
    }

    self.extra.remove("id");

    merge(&mut product.title, self.title);
    merge(&mut product.description, self.description);
    merge(&mut product.code, self.code);
    merge(&mut product.price, self.price.map(Value::Number));
    merge(&mut product.status, self.status);
    merge(&mut product.stock, self.stock.map(Value::Number));
    merge(&mut product.category, self.category);
    merge(&mut product.thumbnails, self.thumbnails);
    product.extra.extend(self.extra);
  }
}
