//! Character-level font features.
//!
//! A font feature is an integer `(feature type, selector)` pair understood by
//! the font capability object. The engine never interprets a feature beyond
//! two rules:
//!
//! - Features occupying the same *slot* replace each other, last write wins.
//!   Most feature types form a single slot. Stylistic and contextual
//!   alternates are independent on/off pairs within one type, so each pair is
//!   its own slot.
//! - Some selectors are the type's default. Fonts drop them on
//!   reconstruction, so they are never observable on a resolved font.
//!
//! This module provides:
//!
//! - [`FontFeature`]: one feature setting
//! - [`FeatureSettings`]: the trait every feature provider implements
//! - [`FontFeatureProvider`]: the closed set of providers a style can carry
//! - [`FeatureCompositor`]: ordered, last-write-wins application onto a font

mod compositor;
mod providers;

use serde::{Deserialize, Serialize};

pub use compositor::FeatureCompositor;
pub use providers::{
    ContextualAlternates, FontFeatureProvider, Fractions, NumberCase, NumberSpacing, SmallCaps,
    StylisticAlternates, VerticalPosition,
};

/// Feature type identifiers.
pub mod feature_type {
    pub const NUMBER_SPACING: u16 = 6;
    pub const VERTICAL_POSITION: u16 = 10;
    pub const FRACTIONS: u16 = 11;
    pub const NUMBER_CASE: u16 = 21;
    pub const STYLISTIC_ALTERNATIVES: u16 = 35;
    pub const CONTEXTUAL_ALTERNATES: u16 = 36;
    pub const LOWER_CASE: u16 = 37;
    pub const UPPER_CASE: u16 = 38;
}

/// A single `(feature type, selector)` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontFeature {
    #[serde(rename = "type")]
    pub feature_type: u16,
    pub selector: u16,
}

impl FontFeature {
    pub const fn new(feature_type: u16, selector: u16) -> Self {
        Self {
            feature_type,
            selector,
        }
    }

    /// The slot this feature occupies. Two features in one slot cannot both
    /// be active.
    pub fn slot(&self) -> (u16, u16) {
        match self.feature_type {
            feature_type::STYLISTIC_ALTERNATIVES | feature_type::CONTEXTUAL_ALTERNATES => {
                (self.feature_type, self.selector / 2)
            }
            other => (other, 0),
        }
    }

    /// Whether the selector is the default for its type.
    pub fn is_default(&self) -> bool {
        match self.feature_type {
            feature_type::VERTICAL_POSITION
            | feature_type::FRACTIONS
            | feature_type::LOWER_CASE
            | feature_type::UPPER_CASE => self.selector == 0,
            // Odd selectors switch an alternate off.
            feature_type::STYLISTIC_ALTERNATIVES => self.selector % 2 == 1,
            // Contextual alternates default on, swashes default off.
            feature_type::CONTEXTUAL_ALTERNATES => matches!(self.selector, 0 | 3 | 5),
            _ => false,
        }
    }
}

/// Anything that contributes font feature settings.
pub trait FeatureSettings {
    /// The settings to apply, in order. May be empty.
    fn feature_settings(&self) -> Vec<FontFeature>;
}

impl FeatureSettings for FontFeature {
    fn feature_settings(&self) -> Vec<FontFeature> {
        vec![*self]
    }
}

/// Folds `incoming` into `existing`, replacing features that share a slot.
///
/// A replaced feature keeps its original position; new slots are appended.
pub(crate) fn merge_features(
    existing: &[FontFeature],
    incoming: impl IntoIterator<Item = FontFeature>,
) -> Vec<FontFeature> {
    let mut merged = existing.to_vec();
    for feature in incoming {
        match merged.iter_mut().find(|f| f.slot() == feature.slot()) {
            Some(slot) => *slot = feature,
            None => merged.push(feature),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_group_by_type() {
        let upper = FontFeature::new(feature_type::NUMBER_CASE, 1);
        let lower = FontFeature::new(feature_type::NUMBER_CASE, 0);
        assert_eq!(upper.slot(), lower.slot());
    }

    #[test]
    fn test_stylistic_alternates_have_independent_slots() {
        let one_on = FontFeature::new(feature_type::STYLISTIC_ALTERNATIVES, 2);
        let one_off = FontFeature::new(feature_type::STYLISTIC_ALTERNATIVES, 3);
        let two_on = FontFeature::new(feature_type::STYLISTIC_ALTERNATIVES, 4);
        assert_eq!(one_on.slot(), one_off.slot());
        assert_ne!(one_on.slot(), two_on.slot());
    }

    #[test]
    fn test_default_selectors() {
        assert!(FontFeature::new(feature_type::FRACTIONS, 0).is_default());
        assert!(!FontFeature::new(feature_type::FRACTIONS, 2).is_default());
        assert!(FontFeature::new(feature_type::STYLISTIC_ALTERNATIVES, 3).is_default());
        assert!(FontFeature::new(feature_type::CONTEXTUAL_ALTERNATES, 0).is_default());
        assert!(!FontFeature::new(feature_type::CONTEXTUAL_ALTERNATES, 1).is_default());
        assert!(!FontFeature::new(feature_type::NUMBER_CASE, 0).is_default());
    }

    #[test]
    fn test_merge_replaces_in_place() {
        let existing = vec![
            FontFeature::new(feature_type::NUMBER_CASE, 1),
            FontFeature::new(feature_type::FRACTIONS, 2),
        ];
        let merged = merge_features(
            &existing,
            vec![
                FontFeature::new(feature_type::NUMBER_CASE, 0),
                FontFeature::new(feature_type::NUMBER_SPACING, 0),
            ],
        );
        assert_eq!(
            merged,
            vec![
                FontFeature::new(feature_type::NUMBER_CASE, 0),
                FontFeature::new(feature_type::FRACTIONS, 2),
                FontFeature::new(feature_type::NUMBER_SPACING, 0),
            ]
        );
    }
}
