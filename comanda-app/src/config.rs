//! Catalog configuration

use serde::{Deserialize, Serialize};

/// Default storage collection for product photos
const DEFAULT_IMAGE_COLLECTION: &str = "product-images";

/// Content type produced by the native picker
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/png";

/// Maximum photo size (5MB)
const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Photo upload settings for the catalog editor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Object-storage collection the editor uploads into
    pub image_collection: String,
    /// Content type sent with each upload
    pub image_content_type: String,
    /// Upload preflight limit in bytes
    pub max_image_bytes: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            image_collection: DEFAULT_IMAGE_COLLECTION.to_string(),
            image_content_type: DEFAULT_IMAGE_CONTENT_TYPE.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}
