//! Styled text: a string partitioned into attributed runs.
//!
//! Runs are maximal: two adjacent runs never carry equal attribute maps,
//! because [`StyledText::push`] coalesces them. Run ranges are byte ranges
//! into [`StyledText::text`], non-overlapping, in order, and together cover
//! the whole string.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::adaptive::adapt;
use crate::attributes::{keys, AttributeMap};
use crate::measure::{AdvanceMeasurer, LineCursor, TextMeasurer};
use crate::platform::Environment;
use crate::transform::{extract, ContentTransformation};

/// The placeholder character standing in for an inline attachment.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// A span of text sharing one attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    range: Range<usize>,
    attributes: AttributeMap,
}

impl Run {
    /// Byte range of the run in its text.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }
}

/// Text with attributed runs.
///
/// # Example
///
/// ```rust
/// use restyle::{AttributeMap, StyledText};
///
/// let mut text = StyledText::new();
/// text.push("Hello, ", AttributeMap::new());
/// text.push("world", AttributeMap::new());
/// assert_eq!(text.text(), "Hello, world");
/// assert_eq!(text.runs().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    text: String,
    runs: Vec<Run>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single run of `text` carrying `attributes`.
    pub fn from_text(text: impl AsRef<str>, attributes: AttributeMap) -> Self {
        let mut styled = Self::new();
        styled.push(text.as_ref(), attributes);
        styled
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Each run's text with its attributes, left to right.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &AttributeMap)> {
        self.runs
            .iter()
            .map(move |run| (&self.text[run.range.clone()], &run.attributes))
    }

    /// The attributes in effect at byte `offset`.
    pub fn attributes_at(&self, offset: usize) -> Option<&AttributeMap> {
        let index = self
            .runs
            .partition_point(|run| run.range.end <= offset);
        self.runs
            .get(index)
            .filter(|run| run.range.contains(&offset))
            .map(|run| &run.attributes)
    }

    /// Appends `text` carrying `attributes`.
    ///
    /// Empty text is ignored. Text whose attributes equal those of the last
    /// run extends that run.
    pub fn push(&mut self, text: &str, attributes: AttributeMap) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();
        match self.runs.last_mut() {
            Some(last) if last.attributes == attributes => last.range.end = end,
            _ => self.runs.push(Run {
                range: start..end,
                attributes,
            }),
        }
    }

    /// Appends every run of `other`.
    pub fn append(&mut self, other: &StyledText) {
        for (text, attributes) in other.segments() {
            self.push(text, attributes.clone());
        }
    }

    /// Returns a copy with every run's attributes replaced by `f(attributes)`.
    pub fn map_attributes<F>(&self, mut f: F) -> StyledText
    where
        F: FnMut(&AttributeMap) -> AttributeMap,
    {
        let mut mapped = StyledText::new();
        for (text, attributes) in self.segments() {
            mapped.push(text, f(attributes));
        }
        mapped
    }

    /// Adapts to `environment`, measuring with the default measurer.
    pub fn adapted(&self, environment: &Environment) -> StyledText {
        self.adapted_with(environment, &AdvanceMeasurer::default())
    }

    /// Returns a new styled text adapted to `environment`.
    ///
    /// Runs are processed left to right. Each run's attributes are replaced by
    /// the result of [`adapt`]; its embedded content transformations then
    /// rewrite its text or recompute its tab stop against the line as it
    /// stands in the new text. Rewrites may change the length, so positions
    /// are always taken from the output being built.
    pub fn adapted_with(
        &self,
        environment: &Environment,
        measurer: &dyn TextMeasurer,
    ) -> StyledText {
        let mut adapted = StyledText::new();
        let mut cursor = LineCursor::new(measurer);

        for (text, attributes) in self.segments() {
            let mut attributes = adapt(attributes, environment);
            let mut text = text.to_string();

            for transformation in extract::<ContentTransformation>(&attributes) {
                match transformation {
                    ContentTransformation::Rewrite(rewrite) => text = rewrite.apply(&text),
                    ContentTransformation::Tab(tab) => {
                        let paragraph = tab.paragraph(cursor.width(), attributes.paragraph());
                        attributes.insert(keys::PARAGRAPH_STYLE, paragraph);
                    }
                }
            }

            cursor.advance(&text, &attributes);
            adapted.push(&text, attributes);
        }
        adapted
    }
}
