//! Editor draft state

use crate::error::ValidationError;
use shared::models::ImageSource;

/// Transient working copy of a product under authorship.
///
/// Owned exclusively by one editor instance; discarded on submit
/// success or when the surface goes away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    /// Unparsed price text, straight from the input field
    pub price: String,
    pub image: ImageSource,
}

/// Draft fields that passed validation, ready for a persistence payload
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub name: String,
    pub price: f64,
}

impl Draft {
    /// Check the draft against the submission rules.
    ///
    /// Rules are checked in field order; the first failure wins.
    pub fn validate(&self) -> Result<ValidatedDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let price = self.price.trim();
        if price.is_empty() {
            return Err(ValidationError::MissingPrice);
        }
        let price: f64 = price.parse().map_err(|_| ValidationError::InvalidPrice)?;
        if !price.is_finite() {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(ValidatedDraft {
            name: name.to_string(),
            price,
        })
    }

    /// Reset all fields to the empty defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
