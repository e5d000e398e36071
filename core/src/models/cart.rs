// core/src/models/cart.rs

use serde::{Deserialize, Serialize};

/// One line of the cart. `product` is unique within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
  pub product: String,
  pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
  pub id: String,
  #[serde(default)]
  pub products: Vec<CartEntry>,
}

impl Cart {
  pub fn new(id: String) -> Self {
    Self {
      id,
      products: Vec::new(),
    }
  }

  /// Bumps the entry for `product_id`, or appends one with quantity 1.
  /// Returns the quantity now held.
  pub fn add_product(&mut self, product_id: &str) -> u32 {
    if let Some(entry) = self.products.iter_mut().find(|e| e.product == product_id) {
      entry.quantity = entry.quantity.saturating_add(1);
      return entry.quantity;
    }
    self.products.push(CartEntry {
      product: product_id.to_string(),
      quantity: 1,
    });
    1
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_repeated_product_increments_quantity() {
    let mut cart = Cart::new("c-1".to_string());
    assert_eq!(cart.add_product("p-1"), 1);
    assert_eq!(cart.add_product("p-1"), 2);
    assert_eq!(
      cart.products,
      vec![CartEntry {
        product: "p-1".to_string(),
        quantity: 2
      }]
    );
  }

  #[test]
  fn test_distinct_products_keep_insertion_order() {
    let mut cart = Cart::new("c-1".to_string());
    cart.add_product("p-2");
    cart.add_product("p-1");
    let order: Vec<&str> = cart.products.iter().map(|e| e.product.as_str()).collect();
    assert_eq!(order, ["p-2", "p-1"]);
    assert!(cart.products.iter().all(|e| e.quantity == 1));
  }
}
