//! Cart Entry Types

use super::product::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size variant for a product
///
/// Fixed closed set; selection is UI-driven, so no further validation
/// exists beyond the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeVariant {
    S,
    #[default]
    M,
    L,
    Xl,
}

impl SizeVariant {
    /// All variants in display order
    pub const ALL: [SizeVariant; 4] = [
        SizeVariant::S,
        SizeVariant::M,
        SizeVariant::L,
        SizeVariant::Xl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeVariant::S => "S",
            SizeVariant::M => "M",
            SizeVariant::L => "L",
            SizeVariant::Xl => "XL",
        }
    }
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured selection handed to the order aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub size: SizeVariant,
}

impl CartEntry {
    pub fn new(product: Product, size: SizeVariant) -> Self {
        Self { product, size }
    }
}
