//! Adaptive styles that respond to the content size category.
//!
//! A style opts into adaptation by listing [`AdaptiveStyle`] policies. When
//! the style is resolved, each policy is embedded in the attribute map as an
//! [`AdaptiveStyleTransformation`], together with the font size and family
//! the policy started from. [`adapt`] replays those transformations for a new
//! [`Environment`].
//!
//! Two size curves are provided. Both are indexed by the category ordinal and
//! are relative to `Large`:
//!
//! | curve     | XS | S  | M  | L | XL | XXL | XXXL | AX1 | AX2 | AX3 | AX4 | AX5 |
//! |-----------|----|----|----|---|----|-----|------|-----|-----|-----|-----|-----|
//! | `Control` | -3 | -2 | -1 | 0 | +2 | +4  | +6   | +6  | +6  | +6  | +6  | +6  |
//! | `Body`    | -3 | -2 | -1 | 0 | +2 | +4  | +6   | +11 | +16 | +23 | +30 | +36 |
//!
//! Controls plateau at the largest standard category; body text keeps growing
//! through the accessibility categories.

use serde::{Deserialize, Serialize};

use crate::attributes::{keys, AttributeMap};
use crate::platform::{ContentSizeCategory, Environment, Font};
use crate::tracking::Tracking;
use crate::transform::extract;

/// Point sizes never shrink below this value.
pub const MINIMUM_POINT_SIZE: f64 = 1.0;

const CONTROL_DELTAS: [f64; 12] = [
    -3.0, -2.0, -1.0, 0.0, 2.0, 4.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0,
];

const BODY_DELTAS: [f64; 12] = [
    -3.0, -2.0, -1.0, 0.0, 2.0, 4.0, 6.0, 11.0, 16.0, 23.0, 30.0, 36.0,
];

/// A point-size delta table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCurve {
    Control,
    Body,
}

impl SizeCurve {
    /// The size delta for `category`, relative to `Large`.
    ///
    /// Categories past the end of the table use its last entry.
    pub fn delta(self, category: ContentSizeCategory) -> f64 {
        let table = match self {
            SizeCurve::Control => &CONTROL_DELTAS,
            SizeCurve::Body => &BODY_DELTAS,
        };
        table[category.ordinal().min(table.len() - 1)]
    }
}

/// A policy for re-deriving a font when the environment changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptiveStyle {
    /// Scale along the control curve.
    Control,
    /// Scale along the body curve.
    Body,
    /// Follow the system size of the font's text style.
    Preferred,
    /// Switch to `family` while the point size is above `size`.
    Above { size: f64, family: String },
    /// Switch to `family` while the point size is below `size`.
    Below { size: f64, family: String },
}

impl AdaptiveStyle {
    /// The curve this policy scales along, if it is a scaling policy.
    pub fn curve(&self) -> Option<SizeCurve> {
        match self {
            AdaptiveStyle::Control => Some(SizeCurve::Control),
            AdaptiveStyle::Body => Some(SizeCurve::Body),
            _ => None,
        }
    }

    fn adapt_font(&self, font: &Font, base: &Baseline, category: ContentSizeCategory) -> Font {
        if let Some(curve) = self.curve() {
            let start = base.point_size.unwrap_or_else(|| font.point_size());
            return font.with_size((start + curve.delta(category)).max(MINIMUM_POINT_SIZE));
        }
        match self {
            AdaptiveStyle::Control | AdaptiveStyle::Body => font.clone(),
            AdaptiveStyle::Preferred => match font.text_style() {
                Some(text_style) => font.with_size(text_style.point_size(category)),
                None => font.clone(),
            },
            AdaptiveStyle::Above { size, family } => {
                base.switch_family(font, font.point_size() > *size, family)
            }
            AdaptiveStyle::Below { size, family } => {
                base.switch_family(font, font.point_size() < *size, family)
            }
        }
    }
}

struct Baseline<'a> {
    point_size: Option<f64>,
    family: Option<&'a str>,
}

impl Baseline<'_> {
    fn switch_family(&self, font: &Font, switch: bool, family: &str) -> Font {
        if switch {
            font.with_family(family)
        } else {
            match self.family {
                Some(base) if base != font.family() => font.with_family(base),
                _ => font.clone(),
            }
        }
    }
}

/// An adaptive transformation as embedded in an attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptiveStyleTransformation {
    /// A font policy plus the font it was resolved against.
    Style {
        style: AdaptiveStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_point_size: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_family: Option<String>,
    },
    /// Recompute kerning from the current font size.
    Tracking(Tracking),
}

impl AdaptiveStyleTransformation {
    /// Embeds `style`, recording `font` as the starting point.
    pub fn recorded(style: AdaptiveStyle, font: Option<&Font>) -> Self {
        AdaptiveStyleTransformation::Style {
            style,
            base_point_size: font.map(Font::point_size),
            base_family: font.map(|f| f.family().to_string()),
        }
    }

    /// Applies the transformation to `map`.
    ///
    /// A map without a font is returned unchanged.
    pub fn apply(&self, map: &AttributeMap, environment: &Environment) -> AttributeMap {
        let font = match map.font() {
            Some(font) => font,
            None => return map.clone(),
        };
        let mut adapted = map.clone();
        match self {
            AdaptiveStyleTransformation::Style {
                style,
                base_point_size,
                base_family,
            } => {
                let base = Baseline {
                    point_size: *base_point_size,
                    family: base_family.as_deref(),
                };
                adapted.insert(
                    keys::FONT,
                    style.adapt_font(font, &base, environment.category()),
                );
            }
            AdaptiveStyleTransformation::Tracking(tracking) => {
                adapted.insert(keys::KERN, tracking.kerning(font.point_size()));
            }
        }
        adapted
    }
}

/// Replays every adaptive transformation embedded in `map`, in embedding
/// order, for `environment`.
///
/// Transformations that find nothing to adapt are no-ops. The embedded list
/// itself is carried over unchanged, so the result can be adapted again.
pub fn adapt(map: &AttributeMap, environment: &Environment) -> AttributeMap {
    extract::<AdaptiveStyleTransformation>(map)
        .iter()
        .fold(map.clone(), |acc, transformation| {
            transformation.apply(&acc, environment)
        })
}
