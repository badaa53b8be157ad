//! Comanda application core
//!
//! Client-side workflows of the mobile ordering app:
//! - [`catalog`]: the admin editor for a single product record
//!   (create / update / delete with conditional photo upload)
//! - [`menu`]: the customer product-detail flow
//!   (size selection and cart-entry composition)
//!
//! Everything the core needs from the surrounding shell (remote data
//! access, object storage, native pickers, dialogs, navigation, the
//! cart) is consumed through the trait contracts in [`ports`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{EditorError, ValidationError};
