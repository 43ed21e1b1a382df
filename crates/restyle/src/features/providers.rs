//! The feature providers a style can request.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{feature_type, FeatureSettings, FontFeature};

/// Lining (upper) or old-style (lower) figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCase {
    Upper,
    Lower,
}

impl FeatureSettings for NumberCase {
    fn feature_settings(&self) -> Vec<FontFeature> {
        let selector = match self {
            NumberCase::Upper => 1,
            NumberCase::Lower => 0,
        };
        vec![FontFeature::new(feature_type::NUMBER_CASE, selector)]
    }
}

/// Tabular (monospaced) or proportional figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberSpacing {
    Monospaced,
    Proportional,
}

impl FeatureSettings for NumberSpacing {
    fn feature_settings(&self) -> Vec<FontFeature> {
        let selector = match self {
            NumberSpacing::Monospaced => 0,
            NumberSpacing::Proportional => 1,
        };
        vec![FontFeature::new(feature_type::NUMBER_SPACING, selector)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fractions {
    Disabled,
    Vertical,
    Diagonal,
}

impl FeatureSettings for Fractions {
    fn feature_settings(&self) -> Vec<FontFeature> {
        let selector = match self {
            Fractions::Disabled => 0,
            Fractions::Vertical => 1,
            Fractions::Diagonal => 2,
        };
        vec![FontFeature::new(feature_type::FRACTIONS, selector)]
    }
}

/// Vertical glyph position. The variants are mutually exclusive.
///
/// `Normal` is the absence of a position and contributes no setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalPosition {
    Normal,
    Superscript,
    Subscript,
    Ordinals,
    ScientificInferiors,
}

impl FeatureSettings for VerticalPosition {
    fn feature_settings(&self) -> Vec<FontFeature> {
        let selector = match self {
            VerticalPosition::Normal => return Vec::new(),
            VerticalPosition::Superscript => 1,
            VerticalPosition::Subscript => 2,
            VerticalPosition::Ordinals => 3,
            VerticalPosition::ScientificInferiors => 4,
        };
        vec![FontFeature::new(feature_type::VERTICAL_POSITION, selector)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmallCaps {
    Disabled,
    FromUppercase,
    FromLowercase,
}

impl FeatureSettings for SmallCaps {
    fn feature_settings(&self) -> Vec<FontFeature> {
        let feature = match self {
            SmallCaps::Disabled => FontFeature::new(feature_type::LOWER_CASE, 0),
            SmallCaps::FromUppercase => FontFeature::new(feature_type::UPPER_CASE, 1),
            SmallCaps::FromLowercase => FontFeature::new(feature_type::LOWER_CASE, 1),
        };
        vec![feature]
    }
}

/// Independent on/off flags for the numbered stylistic alternates (1–20).
///
/// Only flags that were explicitly set produce a setting. Whether a font
/// honors a given alternate depends on the font; unsupported ones are dropped
/// when the font is reconstructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StylisticAlternates {
    flags: BTreeMap<u8, bool>,
}

impl StylisticAlternates {
    pub const MAX: u8 = 20;

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets alternate `number` on or off. Numbers outside 1–20 are ignored.
    pub fn set(mut self, number: u8, on: bool) -> Self {
        if (1..=Self::MAX).contains(&number) {
            self.flags.insert(number, on);
        }
        self
    }

    pub fn get(&self, number: u8) -> Option<bool> {
        self.flags.get(&number).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Overlays `other`'s explicitly set flags onto `self`.
    pub fn add(&mut self, other: &StylisticAlternates) {
        self.flags.extend(other.flags.iter().map(|(k, v)| (*k, *v)));
    }
}

impl FeatureSettings for StylisticAlternates {
    fn feature_settings(&self) -> Vec<FontFeature> {
        self.flags
            .iter()
            .map(|(number, on)| {
                let on_selector = u16::from(*number) * 2;
                let selector = if *on { on_selector } else { on_selector + 1 };
                FontFeature::new(feature_type::STYLISTIC_ALTERNATIVES, selector)
            })
            .collect()
    }
}

/// Contextual, swash and contextual swash alternates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextualAlternates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swash: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_swash: Option<bool>,
}

impl ContextualAlternates {
    pub fn contextual(on: bool) -> Self {
        Self {
            contextual: Some(on),
            ..Self::default()
        }
    }

    pub fn swash(on: bool) -> Self {
        Self {
            swash: Some(on),
            ..Self::default()
        }
    }

    pub fn contextual_swash(on: bool) -> Self {
        Self {
            contextual_swash: Some(on),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contextual.is_none() && self.swash.is_none() && self.contextual_swash.is_none()
    }

    /// Overlays `other`'s explicitly set flags onto `self`.
    pub fn add(&mut self, other: &ContextualAlternates) {
        self.contextual = other.contextual.or(self.contextual);
        self.swash = other.swash.or(self.swash);
        self.contextual_swash = other.contextual_swash.or(self.contextual_swash);
    }
}

impl FeatureSettings for ContextualAlternates {
    fn feature_settings(&self) -> Vec<FontFeature> {
        [
            (self.contextual, 0u16),
            (self.swash, 2),
            (self.contextual_swash, 4),
        ]
        .into_iter()
        .filter_map(|(flag, on_selector)| {
            flag.map(|on| {
                let selector = if on { on_selector } else { on_selector + 1 };
                FontFeature::new(feature_type::CONTEXTUAL_ALTERNATES, selector)
            })
        })
        .collect()
    }
}

/// One entry of a style's explicit feature provider list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFeatureProvider {
    NumberCase(NumberCase),
    NumberSpacing(NumberSpacing),
    Fractions(Fractions),
    VerticalPosition(VerticalPosition),
    SmallCaps(SmallCaps),
    StylisticAlternates(StylisticAlternates),
    ContextualAlternates(ContextualAlternates),
    /// Raw settings passed through untouched.
    Custom(Vec<FontFeature>),
}

macro_rules! provider_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for FontFeatureProvider {
                fn from(provider: $variant) -> Self {
                    FontFeatureProvider::$variant(provider)
                }
            }
        )*
    };
}

provider_from!(
    NumberCase,
    NumberSpacing,
    Fractions,
    VerticalPosition,
    SmallCaps,
    StylisticAlternates,
    ContextualAlternates,
);

impl From<FontFeature> for FontFeatureProvider {
    fn from(feature: FontFeature) -> Self {
        FontFeatureProvider::Custom(vec![feature])
    }
}

impl FeatureSettings for FontFeatureProvider {
    fn feature_settings(&self) -> Vec<FontFeature> {
        match self {
            FontFeatureProvider::NumberCase(p) => p.feature_settings(),
            FontFeatureProvider::NumberSpacing(p) => p.feature_settings(),
            FontFeatureProvider::Fractions(p) => p.feature_settings(),
            FontFeatureProvider::VerticalPosition(p) => p.feature_settings(),
            FontFeatureProvider::SmallCaps(p) => p.feature_settings(),
            FontFeatureProvider::StylisticAlternates(p) => p.feature_settings(),
            FontFeatureProvider::ContextualAlternates(p) => p.feature_settings(),
            FontFeatureProvider::Custom(features) => features.clone(),
        }
    }
}
