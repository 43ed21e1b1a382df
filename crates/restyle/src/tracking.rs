//! Letter spacing.

use serde::{Deserialize, Serialize};

/// A letter-spacing descriptor.
///
/// `Point` is an absolute kerning value and does not change with the font
/// size. `Adobe` is expressed in thousandths of an em, the unit design tools
/// use, and scales linearly with the point size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tracking {
    Point(f64),
    Adobe(f64),
}

impl Tracking {
    /// The kerning, in points, for a font of `point_size`.
    ///
    /// A non-positive or non-finite point size yields zero for per-mille
    /// tracking.
    pub fn kerning(&self, point_size: f64) -> f64 {
        match *self {
            Tracking::Point(kern) => kern,
            Tracking::Adobe(value) => {
                if !point_size.is_finite() || point_size <= 0.0 {
                    return 0.0;
                }
                point_size * value / 1000.0
            }
        }
    }

    /// Whether the kerning depends on the font's point size.
    pub fn is_size_dependent(&self) -> bool {
        matches!(self, Tracking::Adobe(_))
    }
}
