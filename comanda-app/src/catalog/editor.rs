//! Product editor workflow
//!
//! # Submit Flow
//!
//! ```text
//! submit()
//!     ├─ 1. Re-entrancy guard (phase must be Idle)
//!     ├─ 2. Validate draft (failure shown inline, submission blocked)
//!     ├─ 3. Resolve photo (upload at most once; stored paths reused)
//!     ├─ 4. Create or update via the repository
//!     ├─ 5. Clear draft and navigate back
//!     └─ 6. Return outcome (with upload warning, if any)
//! ```

use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ImageSource, Product, ProductCreate, ProductUpdate};
use uuid::Uuid;

use super::draft::Draft;
use crate::config::CatalogConfig;
use crate::error::EditorError;
use crate::ports::{
    ConfirmDialog, ImageFileReader, ImagePicker, ImageStorage, Navigator, ProductRepository,
};

/// Whether the editor authors a new product or edits an existing one.
///
/// Fixed at construction, derived from whether the invoking surface
/// supplied a product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update { id: i64 },
}

impl EditorMode {
    /// Derive the mode from an optional route parameter.
    pub fn from_route_id(id: Option<i64>) -> Self {
        match id {
            Some(id) => EditorMode::Update { id },
            None => EditorMode::Create,
        }
    }
}

/// Editor workflow phase
///
/// Anything other than `Idle` rejects a new submit or delete trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum EditorPhase {
    #[default]
    Idle,
    ResolvingImage,
    Submitting,
    Deleting,
}

/// Collaborators the editor talks to
#[derive(Clone)]
pub struct EditorPorts {
    pub repository: Arc<dyn ProductRepository>,
    pub storage: Arc<dyn ImageStorage>,
    pub picker: Arc<dyn ImagePicker>,
    pub file_reader: Arc<dyn ImageFileReader>,
    pub dialog: Arc<dyn ConfirmDialog>,
    pub navigator: Arc<dyn Navigator>,
}

/// Result of a successful submit
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The product as returned by the data layer
    pub product: Product,
    /// Set when the photo upload failed and the write proceeded without it
    pub image_warning: Option<String>,
}

/// Admin editor for a single product record.
///
/// State is per-instance: two editors open on the same product id do
/// not coordinate; last write wins at the data layer.
pub struct ProductEditor {
    mode: EditorMode,
    draft: Draft,
    validation_error: Option<String>,
    phase: EditorPhase,
    config: CatalogConfig,
    ports: EditorPorts,
}

impl ProductEditor {
    pub fn new(mode: EditorMode, config: CatalogConfig, ports: EditorPorts) -> Self {
        Self {
            mode,
            draft: Draft::default(),
            validation_error: None,
            phase: EditorPhase::Idle,
            config,
            ports,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable draft access for input-field bindings.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Inline validation message from the last submit attempt, if any.
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Whether a submit or delete is in flight; the UI disables its
    /// triggers while this holds.
    pub fn is_busy(&self) -> bool {
        self.phase != EditorPhase::Idle
    }

    /// Populate the draft from the stored product (update mode).
    ///
    /// Until this resolves the draft renders with empty defaults. A
    /// fetch failure is blocking: the draft stays untouched and the
    /// surface shows the failure state. No-op in create mode.
    pub async fn load(&mut self) -> Result<(), EditorError> {
        let EditorMode::Update { id } = self.mode else {
            return Ok(());
        };

        let product = self
            .ports
            .repository
            .find_by_id(id)
            .await
            .map_err(EditorError::Fetch)?
            .ok_or_else(|| {
                EditorError::Fetch(AppError::with_message(
                    ErrorCode::ProductNotFound,
                    format!("Product {id} not found"),
                ))
            })?;

        self.draft.name = product.name;
        self.draft.price = product.price.to_string();
        self.draft.image = ImageSource::from(product.image);
        Ok(())
    }

    /// Let the user pick a replacement photo.
    ///
    /// Cancelling the picker leaves the draft unchanged.
    pub async fn pick_image(&mut self) {
        if let Some(path) = self.ports.picker.pick().await {
            self.draft.image = ImageSource::Local(path);
        }
    }

    /// Validate, resolve the photo, then create or update the product.
    ///
    /// Rejected with [`EditorError::Busy`] while a previous submit or
    /// delete is still in flight. On success the draft is cleared and
    /// navigation returns to the invoking surface; on persistence
    /// failure the draft is retained for resubmission.
    ///
    /// A submit future dropped mid-flight leaves the editor busy; the
    /// instance is meant to be discarded together with its surface.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, EditorError> {
        if self.phase != EditorPhase::Idle {
            return Err(EditorError::Busy);
        }

        let validated = match self.draft.validate() {
            Ok(validated) => {
                self.validation_error = None;
                validated
            }
            Err(err) => {
                self.validation_error = Some(err.to_string());
                return Err(err.into());
            }
        };

        self.phase = EditorPhase::ResolvingImage;
        let (image, image_warning) = self.resolve_image().await;

        self.phase = EditorPhase::Submitting;
        let result = match self.mode {
            EditorMode::Create => {
                self.ports
                    .repository
                    .create(ProductCreate {
                        name: validated.name,
                        price: validated.price,
                        image,
                    })
                    .await
            }
            EditorMode::Update { id } => {
                self.ports
                    .repository
                    .update(
                        id,
                        ProductUpdate {
                            name: validated.name,
                            price: validated.price,
                            image,
                        },
                    )
                    .await
            }
        };
        self.phase = EditorPhase::Idle;

        match result {
            Ok(product) => {
                tracing::info!(id = ?product.id, name = %product.name, "Product saved");
                self.draft.clear();
                self.ports.navigator.go_back();
                Ok(SubmitOutcome {
                    product,
                    image_warning,
                })
            }
            Err(err) => {
                tracing::error!(error = %err, "Product save failed");
                Err(EditorError::Persistence(err))
            }
        }
    }

    /// Delete the product behind an explicit confirmation gate.
    ///
    /// Returns `Ok(false)` when the user cancels, leaving all state
    /// untouched. Never uploads: the delete path bypasses photo
    /// resolution entirely. Only reachable in update mode.
    pub async fn delete(&mut self) -> Result<bool, EditorError> {
        let EditorMode::Update { id } = self.mode else {
            return Err(EditorError::NotPersisted);
        };
        if self.phase != EditorPhase::Idle {
            return Err(EditorError::Busy);
        }

        let confirmed = self
            .ports
            .dialog
            .confirm("Confirm", "Are you sure you want to delete this product")
            .await;
        if !confirmed {
            return Ok(false);
        }

        self.phase = EditorPhase::Deleting;
        let result = self.ports.repository.delete(id).await;
        self.phase = EditorPhase::Idle;

        match result {
            Ok(()) => {
                tracing::info!(id, "Product deleted");
                self.draft.clear();
                self.ports.navigator.replace_with_root();
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, id, "Product delete failed");
                Err(EditorError::Persistence(err))
            }
        }
    }

    /// Resolve the draft photo to a storage path, uploading at most once.
    ///
    /// An already stored photo is reused as-is and never re-uploaded;
    /// only a freshly picked device file goes to storage. Upload trouble
    /// downgrades to a warning so the product write can still proceed.
    async fn resolve_image(&self) -> (Option<String>, Option<String>) {
        match self.draft.image.clone() {
            ImageSource::None => (None, None),
            ImageSource::Remote(path) => (Some(path), None),
            ImageSource::Local(path) => match self.upload_local(&path).await {
                Ok(stored) => (Some(stored), None),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        file = %path.display(),
                        "Photo upload failed, saving product without image"
                    );
                    (None, Some(err.to_string()))
                }
            },
        }
    }

    /// Read, decode and upload a device-local photo; returns the stored path.
    async fn upload_local(&self, path: &Path) -> AppResult<String> {
        let encoded = self.ports.file_reader.read_base64(path).await?;
        let bytes = BASE64.decode(encoded.as_bytes()).map_err(|e| {
            AppError::with_message(
                ErrorCode::InvalidImageFile,
                format!("Invalid base64 image data: {e}"),
            )
        })?;

        if bytes.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyFile));
        }
        if bytes.len() > self.config.max_image_bytes {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File too large: {} bytes (max {})",
                    bytes.len(),
                    self.config.max_image_bytes
                ),
            ));
        }

        let filename = format!("{}.png", Uuid::new_v4());
        let stored = self
            .ports
            .storage
            .upload(
                &self.config.image_collection,
                &filename,
                bytes,
                &self.config.image_content_type,
            )
            .await?;

        tracing::info!(file = %filename, path = %stored, "Photo uploaded");
        Ok(stored)
    }
}

impl std::fmt::Debug for ProductEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductEditor")
            .field("mode", &self.mode)
            .field("draft", &self.draft)
            .field("phase", &self.phase)
            .finish()
    }
}
