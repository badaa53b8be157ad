//! Collaborator ports
//!
//! Contracts the core requires from the surrounding shell: remote data
//! access, object storage, native picker and file facilities, dialogs,
//! navigation, and the cart aggregator. Concrete adapters live in the
//! host app; tests use recording fakes.

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{CartEntry, Product, ProductCreate, ProductUpdate};
use std::path::{Path, PathBuf};

/// Remote product data access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch a product by id; `Ok(None)` when the id does not resolve.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    /// Persist a new product; the returned record carries the assigned id.
    async fn create(&self, payload: ProductCreate) -> AppResult<Product>;

    /// Replace the stored fields of an existing product.
    async fn update(&self, id: i64, payload: ProductUpdate) -> AppResult<Product>;

    /// Remove a product; its id is no longer resolvable afterwards.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Object storage for product photos
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Upload `bytes` into `collection` under `filename`.
    ///
    /// Returns the stored path used to reference the photo from a
    /// product record.
    async fn upload(
        &self,
        collection: &str,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> AppResult<String>;
}

/// Native image picker
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Open the device photo library; `None` when the user cancels.
    async fn pick(&self) -> Option<PathBuf>;
}

/// Device file access for picked photos
#[async_trait]
pub trait ImageFileReader: Send + Sync {
    /// Read the file contents as a base64 string (the native file
    /// facilities hand image bytes over base64-encoded).
    async fn read_base64(&self, path: &Path) -> AppResult<String>;
}

/// Two-choice confirmation dialog
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// Present the gate; `true` only when the destructive choice is taken.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Opaque navigation handle
pub trait Navigator: Send + Sync {
    /// Return to the invoking surface.
    fn go_back(&self);

    /// Replace the stack with the catalog root.
    fn replace_with_root(&self);

    /// Push the cart view.
    fn push_cart(&self);
}

/// Order aggregation sink
pub trait CartAggregator: Send + Sync {
    /// Take ownership of a fully configured selection.
    fn add_entry(&self, entry: CartEntry);
}
