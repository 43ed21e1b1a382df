//! Composable style descriptions.
//!
//! A [`StyleSpec`] is a bag of optional properties. Unset is the identity for
//! merging: [`StyleSpec::merge`] keeps the base's value for every field the
//! override leaves unset. Styles are built fluently and combined with
//! `merge`, or folded left to right with [`StyleSpec::merged`].
//!
//! ```rust
//! use restyle::{Font, StyleSpec};
//! use restyle::adaptive::AdaptiveStyle;
//! use restyle::tracking::Tracking;
//!
//! let base = StyleSpec::new()
//!     .font(Font::new("Avenir-Book", 18.0))
//!     .line_spacing(4.0)
//!     .adaptation(AdaptiveStyle::Control);
//! let heading = base.merge(&StyleSpec::new().tracking(Tracking::Adobe(300.0)));
//! let attributes = heading.attributes();
//! assert!(attributes.font().is_some());
//! assert!(attributes.kern().is_some());
//! ```

mod resolve;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::adaptive::AdaptiveStyle;
use crate::attributes::{AttributeMap, AttributeValue};
use crate::features::{
    ContextualAlternates, FontFeatureProvider, Fractions, NumberCase, NumberSpacing, SmallCaps,
    StylisticAlternates, VerticalPosition,
};
use crate::markup::TagStyler;
use crate::paragraph::{Alignment, LineBreakMode, WritingDirection};
use crate::platform::{Color, Font};
use crate::tracking::Tracking;
use crate::transform::TextTransform;

/// Underline and strikethrough line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Single,
    Thick,
    Double,
}

impl LineStyle {
    /// The value stored in an attribute map.
    pub fn raw(self) -> i64 {
        match self {
            LineStyle::Single => 0x01,
            LineStyle::Thick => 0x02,
            LineStyle::Double => 0x09,
        }
    }
}

/// A line style with an optional color of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDecoration {
    pub style: LineStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ligatures {
    Disabled,
    Default,
}

impl Ligatures {
    pub fn raw(self) -> i64 {
        match self {
            Ligatures::Disabled => 0,
            Ligatures::Default => 1,
        }
    }
}

/// A partial style description.
///
/// Every field is optional. Scalar fields are overridden by a merge; feature
/// providers and adaptations accumulate; extra attributes are overlaid key by
/// key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSpec {
    pub font: Option<Font>,
    pub link: Option<String>,
    pub foreground_color: Option<Color>,
    pub background_color: Option<Color>,
    pub underline: Option<LineDecoration>,
    pub strikethrough: Option<LineDecoration>,
    pub baseline_offset: Option<f64>,
    pub ligatures: Option<Ligatures>,

    pub speaks_punctuation: Option<bool>,
    pub speaking_language: Option<String>,
    pub speaking_pitch: Option<f64>,

    // Paragraph metrics
    pub line_spacing: Option<f64>,
    pub paragraph_spacing_after: Option<f64>,
    pub alignment: Option<Alignment>,
    pub first_line_head_indent: Option<f64>,
    pub head_indent: Option<f64>,
    pub tail_indent: Option<f64>,
    pub line_break_mode: Option<LineBreakMode>,
    pub minimum_line_height: Option<f64>,
    pub maximum_line_height: Option<f64>,
    pub base_writing_direction: Option<WritingDirection>,
    pub line_height_multiple: Option<f64>,
    pub paragraph_spacing_before: Option<f64>,
    pub hyphenation_factor: Option<f64>,

    // Font features
    pub number_case: Option<NumberCase>,
    pub number_spacing: Option<NumberSpacing>,
    pub fractions: Option<Fractions>,
    pub vertical_position: Option<VerticalPosition>,
    pub small_caps: BTreeSet<SmallCaps>,
    pub stylistic_alternates: StylisticAlternates,
    pub contextual_alternates: ContextualAlternates,
    pub font_features: Vec<FontFeatureProvider>,

    pub adaptations: Vec<AdaptiveStyle>,
    pub tracking: Option<Tracking>,
    pub transform: Option<TextTransform>,
    pub markup: Option<TagStyler>,
    pub extra_attributes: AttributeMap,
}

macro_rules! setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        impl StyleSpec {
            $(
                pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                    self.$name = Some(value.into());
                    self
                }
            )*
        }
    };
}

setters!(
    font: Font,
    link: String,
    foreground_color: Color,
    background_color: Color,
    baseline_offset: f64,
    ligatures: Ligatures,
    speaks_punctuation: bool,
    speaking_language: String,
    speaking_pitch: f64,
    line_spacing: f64,
    paragraph_spacing_after: f64,
    alignment: Alignment,
    first_line_head_indent: f64,
    head_indent: f64,
    tail_indent: f64,
    line_break_mode: LineBreakMode,
    minimum_line_height: f64,
    maximum_line_height: f64,
    base_writing_direction: WritingDirection,
    line_height_multiple: f64,
    paragraph_spacing_before: f64,
    hyphenation_factor: f64,
    number_case: NumberCase,
    number_spacing: NumberSpacing,
    fractions: Fractions,
    vertical_position: VerticalPosition,
    tracking: Tracking,
    transform: TextTransform,
    markup: TagStyler,
);

impl StyleSpec {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn underline(mut self, style: LineStyle, color: Option<Color>) -> Self {
        self.underline = Some(LineDecoration { style, color });
        self
    }

    pub fn strikethrough(mut self, style: LineStyle, color: Option<Color>) -> Self {
        self.strikethrough = Some(LineDecoration { style, color });
        self
    }

    /// Adds a small caps variant to the set.
    pub fn small_caps(mut self, small_caps: SmallCaps) -> Self {
        self.small_caps.insert(small_caps);
        self
    }

    /// Turns numbered stylistic alternate `number` (1–20) on or off.
    pub fn stylistic_alternate(mut self, number: u8, on: bool) -> Self {
        self.stylistic_alternates = self.stylistic_alternates.set(number, on);
        self
    }

    pub fn contextual_alternates(mut self, alternates: ContextualAlternates) -> Self {
        self.contextual_alternates.add(&alternates);
        self
    }

    /// Appends an explicit feature provider.
    pub fn font_feature(mut self, provider: impl Into<FontFeatureProvider>) -> Self {
        self.font_features.push(provider.into());
        self
    }

    /// Appends an adaptive style.
    pub fn adaptation(mut self, style: AdaptiveStyle) -> Self {
        self.adaptations.push(style);
        self
    }

    pub fn extra_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.extra_attributes.insert(key, value);
        self
    }

    /// Returns `self` with `other` merged over it.
    ///
    /// Scalars set in `other` win. Feature providers and adaptations are
    /// concatenated, `self`'s first. Stylistic and contextual alternates merge
    /// flag by flag; a non-empty small caps set replaces the base set.
    pub fn merge(&self, other: &StyleSpec) -> StyleSpec {
        let mut merged = self.clone();
        merged.add(other);
        merged
    }

    /// Merges `other` over `self` in place.
    pub fn add(&mut self, other: &StyleSpec) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
            };
        }

        take!(
            font,
            link,
            foreground_color,
            background_color,
            underline,
            strikethrough,
            baseline_offset,
            ligatures,
            speaks_punctuation,
            speaking_language,
            speaking_pitch,
            line_spacing,
            paragraph_spacing_after,
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
            number_case,
            number_spacing,
            fractions,
            vertical_position,
            tracking,
            transform,
            markup,
        );

        if !other.small_caps.is_empty() {
            self.small_caps = other.small_caps.clone();
        }
        self.stylistic_alternates.add(&other.stylistic_alternates);
        self.contextual_alternates.add(&other.contextual_alternates);
        self.font_features.extend(other.font_features.iter().cloned());
        self.adaptations.extend(other.adaptations.iter().cloned());
        self.extra_attributes.overlay(&other.extra_attributes);
    }

    /// Left fold of [`merge`](Self::merge) over `specs`, in order.
    pub fn merged<'a, I>(specs: I) -> StyleSpec
    where
        I: IntoIterator<Item = &'a StyleSpec>,
    {
        specs.into_iter().fold(StyleSpec::new(), |acc, spec| acc.merge(spec))
    }

    /// Applies the eager content transform, if any.
    pub fn transformed(&self, text: &str) -> String {
        match self.transform {
            Some(transform) => transform.apply(text),
            None => text.to_string(),
        }
    }
}
