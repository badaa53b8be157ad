//! Catalog Editor
//!
//! Admin workflow for a single product record: draft editing, local
//! validation, conditional photo upload, and create / update / delete.

mod draft;
mod editor;

pub use draft::{Draft, ValidatedDraft};
pub use editor::{EditorMode, EditorPorts, ProductEditor, SubmitOutcome};
