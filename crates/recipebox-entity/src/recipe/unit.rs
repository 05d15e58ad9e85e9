//! Measurement unit enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit attached to an ingredient line quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Ml,
    Gram,
    Tablespoon,
    Teaspoon,
    Piece,
    Slice,
    Cup,
    Pinch,
    Tablet,
    Cube,
    Fruit,
}

impl Unit {
    /// Every accepted unit, in display order.
    pub const ALL: [Unit; 11] = [
        Self::Ml,
        Self::Gram,
        Self::Tablespoon,
        Self::Teaspoon,
        Self::Piece,
        Self::Slice,
        Self::Cup,
        Self::Pinch,
        Self::Tablet,
        Self::Cube,
        Self::Fruit,
    ];

    /// Return the unit as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ml => "ml",
            Self::Gram => "gram",
            Self::Tablespoon => "tablespoon",
            Self::Teaspoon => "teaspoon",
            Self::Piece => "piece",
            Self::Slice => "slice",
            Self::Cup => "cup",
            Self::Pinch => "pinch",
            Self::Tablet => "tablet",
            Self::Cube => "cube",
            Self::Fruit => "fruit",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = recipebox_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::ALL.iter().map(Unit::as_str).collect();
                recipebox_core::AppError::validation(format!(
                    "Invalid unit: '{s}'. Expected one of: {}",
                    expected.join(", ")
                ))
            })
    }
}
