//! System text styles and their size for each content size category.

use serde::{Deserialize, Serialize};

use super::environment::ContentSizeCategory;

/// A semantic system text style.
///
/// Fonts created from a text style (see [`Font::preferred`]) carry the style
/// with them, which is what the `Preferred` adaptive style keys on.
///
/// [`Font::preferred`]: crate::Font::preferred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption1,
    Caption2,
}

impl TextStyle {
    /// Point sizes indexed by [`ContentSizeCategory::ordinal`].
    fn size_table(self) -> &'static [f64; 12] {
        match self {
            TextStyle::LargeTitle => &[
                31.0, 32.0, 33.0, 34.0, 36.0, 38.0, 40.0, 44.0, 48.0, 52.0, 56.0, 60.0,
            ],
            TextStyle::Title1 => &[
                25.0, 26.0, 27.0, 28.0, 30.0, 32.0, 34.0, 38.0, 43.0, 48.0, 53.0, 58.0,
            ],
            TextStyle::Title2 => &[
                19.0, 20.0, 21.0, 22.0, 24.0, 26.0, 28.0, 34.0, 39.0, 44.0, 50.0, 56.0,
            ],
            TextStyle::Title3 => &[
                17.0, 18.0, 19.0, 20.0, 22.0, 24.0, 26.0, 31.0, 37.0, 43.0, 49.0, 55.0,
            ],
            TextStyle::Headline | TextStyle::Body => &[
                14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0, 28.0, 33.0, 40.0, 47.0, 53.0,
            ],
            TextStyle::Callout => &[
                13.0, 14.0, 15.0, 16.0, 18.0, 20.0, 22.0, 26.0, 32.0, 38.0, 44.0, 51.0,
            ],
            TextStyle::Subheadline => &[
                12.0, 13.0, 14.0, 15.0, 17.0, 19.0, 21.0, 25.0, 30.0, 36.0, 42.0, 49.0,
            ],
            TextStyle::Footnote => &[
                12.0, 12.0, 12.0, 13.0, 15.0, 17.0, 19.0, 23.0, 27.0, 33.0, 38.0, 44.0,
            ],
            TextStyle::Caption1 => &[
                11.0, 11.0, 11.0, 12.0, 14.0, 16.0, 18.0, 22.0, 26.0, 32.0, 37.0, 43.0,
            ],
            TextStyle::Caption2 => &[
                11.0, 11.0, 11.0, 11.0, 13.0, 15.0, 17.0, 20.0, 24.0, 29.0, 34.0, 40.0,
            ],
        }
    }

    /// The point size of this text style in the given category.
    pub fn point_size(self, category: ContentSizeCategory) -> f64 {
        let table = self.size_table();
        table[category.ordinal().min(table.len() - 1)]
    }
}
