//! Shared types for the Comanda ordering app
//!
//! Domain models and the unified error system used by the application
//! crates on both the admin and customer surfaces.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
