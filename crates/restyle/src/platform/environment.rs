//! The environment that adaptive styles respond to.

use serde::{Deserialize, Serialize};

/// The user's preferred text size setting.
///
/// Categories are ordered from smallest to largest; [`ordinal`] exposes that
/// order and is what size tables are indexed with.
///
/// [`ordinal`]: ContentSizeCategory::ordinal
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentSizeCategory {
    /// No preference was reported. Treated as [`ContentSizeCategory::Large`].
    Unspecified,
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    /// The seven standard categories, smallest first.
    pub const STANDARD: [ContentSizeCategory; 7] = [
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
    ];

    /// The five accessibility categories, smallest first.
    pub const ACCESSIBILITY: [ContentSizeCategory; 5] = [
        ContentSizeCategory::AccessibilityMedium,
        ContentSizeCategory::AccessibilityLarge,
        ContentSizeCategory::AccessibilityExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Every concrete category, smallest first.
    pub const ALL: [ContentSizeCategory; 12] = [
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
        ContentSizeCategory::AccessibilityMedium,
        ContentSizeCategory::AccessibilityLarge,
        ContentSizeCategory::AccessibilityExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Zero-based position of the category, `ExtraSmall` being 0.
    ///
    /// `Unspecified` reports the ordinal of `Large`.
    pub fn ordinal(self) -> usize {
        match self {
            ContentSizeCategory::Unspecified => ContentSizeCategory::Large.ordinal(),
            other => Self::ALL
                .iter()
                .position(|c| *c == other)
                .unwrap_or(BASELINE_ORDINAL),
        }
    }

    /// Returns the category at `ordinal`, clamping past the largest one.
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self::ALL[ordinal.min(Self::ALL.len() - 1)]
    }

    /// Whether this is one of the accessibility (extra large) categories.
    pub fn is_accessibility(self) -> bool {
        Self::ACCESSIBILITY.contains(&self)
    }
}

/// Ordinal of the baseline category that size tables are relative to.
const BASELINE_ORDINAL: usize = 3;

/// Describes the display context styles are adapted to.
///
/// The engine only ever reads [`Environment::category`]; how the value is
/// obtained from the host is left to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    category: ContentSizeCategory,
}

impl Environment {
    pub fn new(category: ContentSizeCategory) -> Self {
        Self { category }
    }

    /// The preferred content size category.
    pub fn category(&self) -> ContentSizeCategory {
        match self.category {
            ContentSizeCategory::Unspecified => ContentSizeCategory::Large,
            category => category,
        }
    }
}

impl From<ContentSizeCategory> for Environment {
    fn from(category: ContentSizeCategory) -> Self {
        Self::new(category)
    }
}
