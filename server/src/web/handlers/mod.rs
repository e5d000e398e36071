// server/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod product_handlers;
