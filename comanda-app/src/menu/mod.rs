//! Selection Composer
//!
//! Customer workflow for a product detail view: size-variant selection
//! and cart-entry composition.

mod composer;

pub use composer::{ProductLoad, SelectionComposer};
