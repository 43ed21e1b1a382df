//! Inline images.

use serde::{Deserialize, Serialize};

/// An image embedded in styled text.
///
/// Only the name and size are tracked; composition uses the width to place
/// tab stops that follow the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl Image {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}
