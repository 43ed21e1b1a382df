//! Paragraph-level metrics.
//!
//! A [`ParagraphMetrics`] value is only written into an attribute map when it
//! differs from [`SYSTEM_DEFAULT`]. Comparing against that canonical instance
//! is how the engine tells "never set" apart from "set": a map whose
//! paragraph fields all equal the defaults carries no paragraph key at all.
//! The same comparison drives [`ParagraphMetrics::supply_defaults`], where a
//! field still holding its default value is considered unset.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
    #[default]
    Natural,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreakMode {
    #[default]
    WordWrapping,
    CharWrapping,
    Clipping,
    TruncatingHead,
    TruncatingTail,
    TruncatingMiddle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingDirection {
    #[default]
    Natural,
    LeftToRight,
    RightToLeft,
}

/// A horizontal position that tab characters advance to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabStop {
    pub location: f64,
    #[serde(default, skip_serializing_if = "is_natural")]
    pub alignment: Alignment,
}

fn is_natural(alignment: &Alignment) -> bool {
    *alignment == Alignment::Natural
}

impl TabStop {
    /// A natural-aligned tab stop at `location`.
    pub fn new(location: f64) -> Self {
        Self {
            location,
            alignment: Alignment::Natural,
        }
    }
}

/// Paragraph metrics. `Default` produces the system default instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphMetrics {
    pub line_spacing: f64,
    pub paragraph_spacing: f64,
    pub alignment: Alignment,
    pub first_line_head_indent: f64,
    pub head_indent: f64,
    pub tail_indent: f64,
    pub line_break_mode: LineBreakMode,
    pub minimum_line_height: f64,
    pub maximum_line_height: f64,
    pub base_writing_direction: WritingDirection,
    pub line_height_multiple: f64,
    pub paragraph_spacing_before: f64,
    pub hyphenation_factor: f64,
    pub tab_stops: Vec<TabStop>,
}

/// The canonical "never set" paragraph.
pub static SYSTEM_DEFAULT: Lazy<ParagraphMetrics> = Lazy::new(ParagraphMetrics::default);

impl ParagraphMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field equals [`SYSTEM_DEFAULT`].
    pub fn is_system_default(&self) -> bool {
        *self == *SYSTEM_DEFAULT
    }

    /// Returns `other` with each field that still holds its default value
    /// replaced by the value from `self`.
    ///
    /// `self` acts as the defaults; fields explicitly set in `other` win.
    pub fn supply_defaults(&self, other: &ParagraphMetrics) -> ParagraphMetrics {
        let defaults = &*SYSTEM_DEFAULT;
        let mut paragraph = other.clone();

        macro_rules! inherit {
            ($($field:ident),* $(,)?) => {
                $(
                    if paragraph.$field == defaults.$field {
                        paragraph.$field = self.$field.clone();
                    }
                )*
            };
        }

        inherit!(
            line_spacing,
            paragraph_spacing,
            alignment,
            first_line_head_indent,
            head_indent,
            tail_indent,
            line_break_mode,
            minimum_line_height,
            maximum_line_height,
            base_writing_direction,
            line_height_multiple,
            paragraph_spacing_before,
            hyphenation_factor,
            tab_stops,
        );
        paragraph
    }
}
