//! Image Source Model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a draft's photo currently lives.
///
/// Distinguishes a freshly picked device file from an already uploaded
/// storage path, so an unchanged photo is never re-uploaded on edit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ImageSource {
    /// No photo attached
    #[default]
    None,
    /// Storage path of an already uploaded photo
    Remote(String),
    /// Device-local file not yet uploaded
    Local(PathBuf),
}

impl ImageSource {
    /// Whether this is a device-local file pending upload
    pub fn is_local(&self) -> bool {
        matches!(self, ImageSource::Local(_))
    }

    /// Whether this references an already uploaded photo
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Remote(_))
    }

    /// The stored path, if the photo is already uploaded
    pub fn remote_path(&self) -> Option<&str> {
        match self {
            ImageSource::Remote(path) => Some(path),
            _ => None,
        }
    }
}

impl From<Option<String>> for ImageSource {
    fn from(path: Option<String>) -> Self {
        match path {
            Some(path) => ImageSource::Remote(path),
            None => ImageSource::None,
        }
    }
}
