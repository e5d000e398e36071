// core/src/models/mod.rs

//! Records as they are stored in the documents and returned over HTTP.

pub mod cart;
pub mod product;

pub use cart::{Cart, CartEntry};
pub use product::{NewProduct, Product, ProductPatch};
