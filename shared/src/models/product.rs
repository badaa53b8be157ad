//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity
///
/// A persisted product always carries an `id`; a product under authorship
/// has `id: None` until the create call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    /// Price in the store currency
    pub price: f64,
    /// Storage path of the product photo, if one was uploaded
    pub image: Option<String>,
    /// Store-assigned creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether this product has been persisted by the data layer
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Create product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

/// Update product payload
///
/// Full-field replacement addressed by id; last-write-wins consistency
/// is left to the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}
