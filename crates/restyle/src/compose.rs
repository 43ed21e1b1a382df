//! Joining fragments into one styled text.
//!
//! A [`Composer`] resolves every fragment against a base style and appends
//! the result, optionally with a separator between fragments. Tabs are
//! placed relative to the width of the line built so far, which is why
//! composition threads a [`LineCursor`] through the fragments.
//!
//! ```rust
//! use restyle::{compose, Fragment, StyleSpec};
//!
//! let text = compose(
//!     vec![Fragment::from("A"), Fragment::from("B"), Fragment::from("C")],
//!     &StyleSpec::new(),
//!     Some("-"),
//! );
//! assert_eq!(text.text(), "A-B-C");
//! ```

use crate::attributes::{keys, AttributeMap};
use crate::measure::{AdvanceMeasurer, LineCursor, TextMeasurer};
use crate::platform::Image;
use crate::style::StyleSpec;
use crate::text::{StyledText, OBJECT_REPLACEMENT};
use crate::transform::{embed, ContentTransformation, Tab};

/// One unit of composition input.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Text styled with the base style.
    Text(String),
    /// Text styled with the base style merged under `style`.
    Styled { text: String, style: StyleSpec },
    /// An inline image, contributing one placeholder character.
    Image(Image),
    /// A tab character whose stop is computed at composition time.
    Tab(Tab),
    /// Already styled text; the base style only fills in what it lacks.
    Sequence(StyledText),
}

impl Fragment {
    pub fn styled(text: impl Into<String>, style: StyleSpec) -> Self {
        Fragment::Styled {
            text: text.into(),
            style,
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<Image> for Fragment {
    fn from(image: Image) -> Self {
        Fragment::Image(image)
    }
}

impl From<Tab> for Fragment {
    fn from(tab: Tab) -> Self {
        Fragment::Tab(tab)
    }
}

impl From<StyledText> for Fragment {
    fn from(text: StyledText) -> Self {
        Fragment::Sequence(text)
    }
}

/// Composes fragments under a base style.
#[derive(Debug, Clone)]
pub struct Composer<M = AdvanceMeasurer> {
    base: StyleSpec,
    separator: Option<String>,
    measurer: M,
}

impl Composer<AdvanceMeasurer> {
    pub fn new(base: StyleSpec) -> Self {
        Self {
            base,
            separator: None,
            measurer: AdvanceMeasurer::default(),
        }
    }
}

impl<M: TextMeasurer> Composer<M> {
    /// Inserts `separator` between adjacent fragments.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Uses `measurer` to measure line widths for tab placement.
    pub fn with_measurer<N: TextMeasurer>(self, measurer: N) -> Composer<N> {
        Composer {
            base: self.base,
            separator: self.separator,
            measurer,
        }
    }

    pub fn base(&self) -> &StyleSpec {
        &self.base
    }

    /// Composes `fragments`, left to right.
    pub fn compose<I>(&self, fragments: I) -> StyledText
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let mut output = StyledText::new();
        let mut cursor = LineCursor::new(&self.measurer);
        let base_attributes = self.base.attributes();

        for (index, fragment) in fragments.into_iter().enumerate() {
            if index > 0 {
                if let Some(separator) = &self.separator {
                    append(&mut output, &mut cursor, separator, base_attributes.clone());
                }
            }
            let fragment: Fragment = fragment.into();
            match fragment {
                Fragment::Text(text) => {
                    let styled = self.base.styled_text(&text);
                    append_styled(&mut output, &mut cursor, &styled);
                }
                Fragment::Styled { text, style } => {
                    let styled = self.base.merge(&style).styled_text(&text);
                    append_styled(&mut output, &mut cursor, &styled);
                }
                Fragment::Image(image) => {
                    let attributes = base_attributes.clone().with(keys::ATTACHMENT, image);
                    append(
                        &mut output,
                        &mut cursor,
                        OBJECT_REPLACEMENT.encode_utf8(&mut [0; 4]),
                        attributes,
                    );
                }
                Fragment::Tab(tab) => {
                    let paragraph = tab.paragraph(cursor.width(), base_attributes.paragraph());
                    let attributes = embed(
                        base_attributes.clone().with(keys::PARAGRAPH_STYLE, paragraph),
                        vec![ContentTransformation::Tab(tab)],
                    );
                    append(&mut output, &mut cursor, "\t", attributes);
                }
                Fragment::Sequence(sequence) => {
                    let filled =
                        sequence.map_attributes(|existing| self.base.supply_defaults(existing));
                    append_styled(&mut output, &mut cursor, &filled);
                }
            }
        }
        output
    }
}

fn append(
    output: &mut StyledText,
    cursor: &mut LineCursor<'_>,
    text: &str,
    attributes: AttributeMap,
) {
    cursor.advance(text, &attributes);
    output.push(text, attributes);
}

fn append_styled(output: &mut StyledText, cursor: &mut LineCursor<'_>, text: &StyledText) {
    for (segment, attributes) in text.segments() {
        append(output, cursor, segment, attributes.clone());
    }
}

/// Composes `fragments` under `base`, with an optional separator.
pub fn compose<I>(fragments: I, base: &StyleSpec, separator: Option<&str>) -> StyledText
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let mut composer = Composer::new(base.clone());
    if let Some(separator) = separator {
        composer = composer.separator(separator);
    }
    composer.compose(fragments)
}
