//! Data models
//!
//! Shared between the admin catalog surface and the customer menu
//! surface. All IDs are `i64` (store-assigned INTEGER PRIMARY KEY).

pub mod cart;
pub mod image_source;
pub mod product;

// Re-exports
pub use cart::*;
pub use image_source::*;
pub use product::*;
