//! Font capability objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::environment::ContentSizeCategory;
use super::text_style::TextStyle;
use crate::error::FontError;
use crate::features::{merge_features, FontFeature};

/// Family name used for fonts created from a system text style.
pub const SYSTEM_FAMILY: &str = "system";

/// Which feature types a font accepts when it is reconstructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSupport {
    /// Every feature type is honored.
    #[default]
    All,
    /// Only the listed feature types are honored; others are dropped.
    Only(BTreeSet<u16>),
    /// The font cannot be reconstructed with features at all.
    Fixed,
}

impl FeatureSupport {
    fn is_all(&self) -> bool {
        matches!(self, FeatureSupport::All)
    }

    fn supports(&self, feature: &FontFeature) -> bool {
        match self {
            FeatureSupport::All => true,
            FeatureSupport::Only(types) => types.contains(&feature.feature_type),
            FeatureSupport::Fixed => false,
        }
    }
}

/// An immutable font value: family, point size and active features.
///
/// Every "modification" returns a new font.
///
/// # Example
///
/// ```rust
/// use restyle::Font;
///
/// let font = Font::new("Avenir-Book", 28.0);
/// let smaller = font.with_size(25.0);
/// assert_eq!(font.point_size(), 28.0);
/// assert_eq!(smaller.point_size(), 25.0);
/// assert_eq!(smaller.family(), "Avenir-Book");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    family: String,
    #[serde(rename = "size")]
    point_size: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    features: Vec<FontFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "FeatureSupport::is_all")]
    support: FeatureSupport,
}

impl Font {
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
            features: Vec::new(),
            text_style: None,
            support: FeatureSupport::All,
        }
    }

    /// The system font for `text_style`, sized for `category`.
    pub fn preferred(text_style: TextStyle, category: ContentSizeCategory) -> Self {
        Self {
            text_style: Some(text_style),
            ..Self::new(SYSTEM_FAMILY, text_style.point_size(category))
        }
    }

    /// Returns the font with a restricted set of supported feature types.
    pub fn with_support(mut self, support: FeatureSupport) -> Self {
        self.support = support;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn point_size(&self) -> f64 {
        self.point_size
    }

    /// The active feature settings, in application order.
    pub fn features(&self) -> &[FontFeature] {
        &self.features
    }

    pub fn text_style(&self) -> Option<TextStyle> {
        self.text_style
    }

    pub fn support(&self) -> &FeatureSupport {
        &self.support
    }

    /// Same font at another size. Features and text style are kept.
    pub fn with_size(&self, point_size: f64) -> Font {
        Font {
            point_size,
            ..self.clone()
        }
    }

    /// Same attributes under another family name.
    pub fn with_family(&self, family: impl Into<String>) -> Font {
        Font {
            family: family.into(),
            ..self.clone()
        }
    }

    /// Reconstructs the font with `features` applied over its current ones.
    ///
    /// Features sharing a slot replace each other. Default selectors and
    /// feature types the font does not support are dropped, the way a
    /// platform font strips hints it cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::FeaturesUnsupported`] if the font cannot be
    /// reconstructed with features.
    pub fn with_features(&self, features: &[FontFeature]) -> Result<Font, FontError> {
        if matches!(self.support, FeatureSupport::Fixed) {
            return Err(FontError::FeaturesUnsupported {
                family: self.family.clone(),
            });
        }
        let features = merge_features(&self.features, features.iter().copied())
            .into_iter()
            .filter(|f| !f.is_default() && self.support.supports(f))
            .collect();
        Ok(Font {
            features,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::feature_type;

    #[test]
    fn test_with_features_does_not_mutate_input() {
        let font = Font::new("EBGaramond12-Regular", 24.0);
        let featured = font
            .with_features(&[FontFeature::new(feature_type::NUMBER_CASE, 1)])
            .unwrap();
        assert!(font.features().is_empty());
        assert_eq!(featured.features().len(), 1);
    }

    #[test]
    fn test_with_features_strips_defaults() {
        let font = Font::new("EBGaramond12-Regular", 24.0);
        let featured = font
            .with_features(&[FontFeature::new(feature_type::FRACTIONS, 0)])
            .unwrap();
        assert!(featured.features().is_empty());
    }

    #[test]
    fn test_default_selector_clears_earlier_setting() {
        let font = Font::new("EBGaramond12-Regular", 24.0)
            .with_features(&[FontFeature::new(feature_type::FRACTIONS, 2)])
            .unwrap();
        let cleared = font
            .with_features(&[FontFeature::new(feature_type::FRACTIONS, 0)])
            .unwrap();
        assert!(cleared.features().is_empty());
    }

    #[test]
    fn test_with_features_drops_unsupported_types() {
        let support = FeatureSupport::Only([feature_type::NUMBER_CASE].into_iter().collect());
        let font = Font::new("Avenir-Book", 12.0).with_support(support);
        let featured = font
            .with_features(&[
                FontFeature::new(feature_type::NUMBER_CASE, 1),
                FontFeature::new(feature_type::STYLISTIC_ALTERNATIVES, 2),
            ])
            .unwrap();
        assert_eq!(
            featured.features(),
            &[FontFeature::new(feature_type::NUMBER_CASE, 1)]
        );
    }

    #[test]
    fn test_fixed_font_rejects_features() {
        let font = Font::new("Bitmap", 12.0).with_support(FeatureSupport::Fixed);
        let result = font.with_features(&[FontFeature::new(feature_type::NUMBER_CASE, 1)]);
        assert!(matches!(
            result,
            Err(FontError::FeaturesUnsupported { .. })
        ));
    }

    #[test]
    fn test_with_size_keeps_features() {
        let font = Font::new("Avenir-Book", 28.0)
            .with_features(&[FontFeature::new(feature_type::NUMBER_SPACING, 0)])
            .unwrap();
        let resized = font.with_size(25.0);
        assert_eq!(resized.features(), font.features());
    }

    #[test]
    fn test_preferred_font_carries_text_style() {
        let font = Font::preferred(TextStyle::Title1, ContentSizeCategory::Large);
        assert_eq!(font.text_style(), Some(TextStyle::Title1));
        assert_eq!(font.point_size(), 28.0);
        assert_eq!(font.family(), SYSTEM_FAMILY);
    }

    #[test]
    fn test_serde_omits_empty_fields() {
        let json = serde_json::to_value(Font::new("Avenir-Book", 12.0)).unwrap();
        assert_eq!(json, serde_json::json!({"family": "Avenir-Book", "size": 12.0}));
    }
}
