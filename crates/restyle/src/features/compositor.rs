//! Ordered application of feature providers onto a font.

use log::debug;

use super::{merge_features, FeatureSettings, FontFeature};
use crate::platform::Font;

/// Collects feature settings from providers, in order, and applies them to a
/// font.
///
/// Later providers replace earlier settings in the same slot. Providers that
/// yield no settings leave no trace.
///
/// # Example
///
/// ```rust
/// use restyle::Font;
/// use restyle::features::{FeatureCompositor, NumberCase, NumberSpacing};
///
/// let font = Font::new("Avenir-Book", 14.0);
/// let featured = FeatureCompositor::new()
///     .with(&NumberCase::Upper)
///     .with(&NumberSpacing::Monospaced)
///     .with(&NumberCase::Lower)
///     .apply(&font);
/// assert_eq!(featured.features().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCompositor {
    features: Vec<FontFeature>,
}

impl FeatureCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider's settings.
    pub fn push(&mut self, provider: &dyn FeatureSettings) {
        let settings = provider.feature_settings();
        if settings.is_empty() {
            return;
        }
        self.features = merge_features(&self.features, settings);
    }

    /// Adds a provider's settings, returning the compositor for chaining.
    pub fn with(mut self, provider: &dyn FeatureSettings) -> Self {
        self.push(provider);
        self
    }

    /// The merged settings, one per slot.
    pub fn features(&self) -> &[FontFeature] {
        &self.features
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns `font` reconstructed with the collected settings.
    ///
    /// If the font refuses reconstruction, the original font is returned
    /// unchanged.
    pub fn apply(&self, font: &Font) -> Font {
        if self.features.is_empty() {
            return font.clone();
        }
        match font.with_features(&self.features) {
            Ok(featured) => featured,
            Err(err) => {
                debug!("keeping original font: {}", err);
                font.clone()
            }
        }
    }
}

impl<'a> FromIterator<&'a dyn FeatureSettings> for FeatureCompositor {
    fn from_iter<I: IntoIterator<Item = &'a dyn FeatureSettings>>(iter: I) -> Self {
        let mut compositor = FeatureCompositor::new();
        for provider in iter {
            compositor.push(provider);
        }
        compositor
    }
}
