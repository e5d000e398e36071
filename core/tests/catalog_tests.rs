// tests/catalog_tests.rs
mod common;

use common::*;
use flatshop::{NewProduct, Product, ProductPatch, Shop, ShopError, StoreError};
use flatshop::{MemoryStore, DEFAULT_PRODUCTS_DOCUMENT};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_create_assigns_id_and_status() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;

  let created = shop.products.create(new_product("A", 10, 5)).await.unwrap();
  assert!(!created.id.is_empty());
  assert_eq!(created.status, Some(true));
  assert_eq!(created.title.as_deref(), Some("A"));
  assert_eq!(created.price, Some(json!(10)));
  assert_eq!(created.stock, Some(json!(5)));

  let fetched = shop.products.get(&created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_generates_distinct_ids() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  let products = seed_products(&shop, 10).await;
  let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
  assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_create_without_fields_stores_bare_record() {
  setup_tracing();
  let (shop, store) = empty_shop().await;
  let created = shop.products.create(NewProduct::default()).await.unwrap();

  let raw: serde_json::Value = serde_json::from_slice(&store.raw(DEFAULT_PRODUCTS_DOCUMENT).unwrap()).unwrap();
  assert_eq!(raw, json!([{"id": created.id, "status": true}]));
}

#[tokio::test]
async fn test_list_with_and_without_limit() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  let seeded = seed_products(&shop, 5).await;

  let all = shop.products.list(None).await.unwrap();
  assert_eq!(all, seeded);

  let first_two = shop.products.list(Some(2)).await.unwrap();
  assert_eq!(first_two, seeded[..2].to_vec());

  let oversized = shop.products.list(Some(50)).await.unwrap();
  assert_eq!(oversized.len(), 5);

  let none = shop.products.list(Some(0)).await.unwrap();
  assert!(none.is_empty());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  seed_products(&shop, 2).await;

  let err = shop.products.get("no-such-id").await.unwrap_err();
  assert!(matches!(err, ShopError::ProductNotFound { ref id } if id == "no-such-id"));
  assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  let original = shop
    .products
    .create(NewProduct {
      description: Some("warm light".to_string()),
      category: Some("home".to_string()),
      thumbnails: Some(vec!["a.png".to_string()]),
      ..new_product("Lamp", 20, 4)
    })
    .await
    .unwrap();

  let patch: ProductPatch = serde_json::from_value(json!({"price": 99})).unwrap();
  let updated = shop.products.update(&original.id, patch).await.unwrap();

  let expected = Product {
    price: Some(json!(99)),
    ..original.clone()
  };
  assert_eq!(updated, expected);
  assert_eq!(shop.products.get(&original.id).await.unwrap(), expected);
}

#[tokio::test]
async fn test_update_cannot_change_identity() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  let original = shop.products.create(new_product("A", 1, 1)).await.unwrap();

  let patch: ProductPatch = serde_json::from_value(json!({"id": "forged", "title": "B"})).unwrap();
  let updated = shop.products.update(&original.id, patch).await.unwrap();

  assert_eq!(updated.id, original.id);
  assert_eq!(updated.title.as_deref(), Some("B"));
  assert!(shop.products.get("forged").await.is_err());
}

#[tokio::test]
async fn test_update_unknown_id_leaves_document_untouched() {
  setup_tracing();
  let (shop, store) = empty_shop().await;
  seed_products(&shop, 2).await;
  let before = store.raw(DEFAULT_PRODUCTS_DOCUMENT);

  let err = shop.products.update("missing", ProductPatch::default()).await.unwrap_err();
  assert!(matches!(err, ShopError::ProductNotFound { .. }));
  assert_eq!(store.raw(DEFAULT_PRODUCTS_DOCUMENT), before);
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  let seeded = seed_products(&shop, 3).await;

  shop.products.delete(&seeded[1].id).await.unwrap();

  let err = shop.products.get(&seeded[1].id).await.unwrap_err();
  assert!(matches!(err, ShopError::ProductNotFound { .. }));
  let remaining = shop.products.list(None).await.unwrap();
  assert_eq!(remaining, vec![seeded[0].clone(), seeded[2].clone()]);

  let again = shop.products.delete(&seeded[1].id).await.unwrap_err();
  assert!(again.is_not_found());
}

#[tokio::test]
async fn test_mutations_round_trip_through_list() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  let mut expected = seed_products(&shop, 4).await;

  let patch: ProductPatch = serde_json::from_value(json!({"thumbnails": ["x.png", "y.png"], "status": false})).unwrap();
  expected[2] = shop.products.update(&expected[2].id, patch).await.unwrap();
  shop.products.delete(&expected[0].id).await.unwrap();
  expected.remove(0);

  assert_eq!(shop.products.list(None).await.unwrap(), expected);
}

#[tokio::test]
async fn test_concurrent_creates_are_not_lost() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;

  let mut tasks = Vec::new();
  for i in 0..25 {
    let shop = shop.clone();
    tasks.push(tokio::spawn(async move {
      shop.products.create(new_product(&format!("C{i}"), i, 1)).await
    }));
  }
  for task in tasks {
    task.await.unwrap().unwrap();
  }

  assert_eq!(shop.products.list(None).await.unwrap().len(), 25);
}

#[tokio::test]
async fn test_missing_products_document_is_store_error() {
  setup_tracing();
  let shop = Shop::with_defaults(Arc::new(MemoryStore::new()));

  let err = shop.products.list(None).await.unwrap_err();
  assert!(matches!(err, ShopError::Store(StoreError::Missing { .. })));

  let err = shop.products.create(new_product("A", 1, 1)).await.unwrap_err();
  assert!(matches!(err, ShopError::Store(StoreError::Missing { .. })));
}

#[tokio::test]
async fn test_corrupt_products_document_is_decode_error() {
  setup_tracing();
  let store = MemoryStore::new();
  store.insert_raw(DEFAULT_PRODUCTS_DOCUMENT, "{not json");
  let shop = Shop::with_defaults(Arc::new(store));

  let err = shop.products.get("x").await.unwrap_err();
  match err {
    ShopError::Store(store_err @ StoreError::Decode { .. }) => {
      assert_eq!(store_err.document(), DEFAULT_PRODUCTS_DOCUMENT);
      assert!(!store_err.is_write());
    }
    other => panic!("Expected a decode error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_ensure_document_keeps_existing_content() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  seed_products(&shop, 2).await;

  assert!(!shop.products.ensure_document().await.unwrap());
  assert_eq!(shop.products.list(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_preserves_unknown_fields_of_every_record() {
  setup_tracing();
  let store = MemoryStore::new();
  store.insert_raw(
    DEFAULT_PRODUCTS_DOCUMENT,
    r#"[{"id":"a","title":"T","color":"red"},{"id":"b","title":"U","color":"blue"}]"#,
  );
  let shop = Shop::with_defaults(Arc::new(store.clone()));

  let patch: ProductPatch = serde_json::from_value(json!({"title": "T2"})).unwrap();
  shop.products.update("a", patch).await.unwrap();

  let raw: serde_json::Value = serde_json::from_slice(&store.raw(DEFAULT_PRODUCTS_DOCUMENT).unwrap()).unwrap();
  assert_eq!(
    raw,
    json!([{"id": "a", "title": "T2", "color": "red"}, {"id": "b", "title": "U", "color": "blue"}])
  );
}

#[tokio::test]
async fn test_untouched_records_survive_create_and_delete_byte_for_byte() {
  setup_tracing();
  let store = MemoryStore::new();
  store.insert_raw(
    DEFAULT_PRODUCTS_DOCUMENT,
    r#"[{"id":"keep","extra":{"nested":[1,2]},"status":false},{"id":"drop"}]"#,
  );
  let shop = Shop::with_defaults(Arc::new(store.clone()));

  let created = shop.products.create(new_product("New", 1, 1)).await.unwrap();
  shop.products.delete("drop").await.unwrap();

  let raw: serde_json::Value = serde_json::from_slice(&store.raw(DEFAULT_PRODUCTS_DOCUMENT).unwrap()).unwrap();
  assert_eq!(raw[0], json!({"id": "keep", "extra": {"nested": [1, 2]}, "status": false}));
  assert_eq!(raw[1]["id"], json!(created.id));
  assert_eq!(raw.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_update_merges_unknown_body_fields() {
  setup_tracing();
  let (shop, _store) = empty_shop().await;
  let created = shop.products.create(new_product("A", 1, 1)).await.unwrap();

  let patch: ProductPatch = serde_json::from_value(json!({"color": "green"})).unwrap();
  let updated = shop.products.update(&created.id, patch).await.unwrap();
  assert_eq!(updated.extra.get("color"), Some(&json!("green")));
  assert_eq!(updated.title.as_deref(), Some("A"));
}

#[tokio::test]
async fn test_oddly_typed_stored_values_stay_readable() {
  setup_tracing();
  let store = MemoryStore::new();
  store.insert_raw(
    DEFAULT_PRODUCTS_DOCUMENT,
    r#"[{"id":"a","title":"T","price":"10"},{"id":"b","stock":"lots"}]"#,
  );
  let shop = Shop::with_defaults(Arc::new(store.clone()));

  let products = shop.products.list(None).await.unwrap();
  assert_eq!(products.len(), 2);
  assert_eq!(products[0].price, Some(json!("10")));
  assert_eq!(shop.products.get("b").await.unwrap().stock, Some(json!("lots")));

  // Rewriting the document keeps the stored values as they were.
  let patch: ProductPatch = serde_json::from_value(json!({"stock": 4})).unwrap();
  shop.products.update("b", patch).await.unwrap();
  let raw: serde_json::Value = serde_json::from_slice(&store.raw(DEFAULT_PRODUCTS_DOCUMENT).unwrap()).unwrap();
  assert_eq!(raw, json!([{"id": "a", "title": "T", "price": "10"}, {"id": "b", "stock": 4}]));
}
