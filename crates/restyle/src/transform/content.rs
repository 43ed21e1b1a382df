//! Transformations that rewrite the content of a run.

use serde::{Deserialize, Serialize};

use crate::paragraph::{ParagraphMetrics, TabStop};

/// A pure text rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    /// First letter of every word upper case, the rest lower case.
    Capitalized,
}

impl TextTransform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextTransform::Uppercase => text.to_uppercase(),
            TextTransform::Lowercase => text.to_lowercase(),
            TextTransform::Capitalized => capitalize(text),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Horizontal tab placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// A gap of the given width after the current line content.
    Spacer(f64),
    /// Align to an absolute indent; wrapped lines hang at the same indent.
    HeadIndent(f64),
}

impl Tab {
    /// Paragraph metrics for a tab character placed after `line_width` of
    /// content on the current line.
    ///
    /// `current` supplies every field the tab does not own. The tab stops are
    /// replaced by the single stop the tab advances to.
    pub fn paragraph(
        &self,
        line_width: f64,
        current: Option<&ParagraphMetrics>,
    ) -> ParagraphMetrics {
        let mut paragraph = current.cloned().unwrap_or_default();
        match *self {
            Tab::Spacer(width) => {
                paragraph.tab_stops = vec![TabStop::new(line_width + width)];
            }
            Tab::HeadIndent(indent) => {
                paragraph.tab_stops = vec![TabStop::new(indent)];
                paragraph.head_indent = indent;
            }
        }
        paragraph
    }
}

/// A transformation applied to a run's content when a styled text is adapted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTransformation {
    /// Replace the run's text.
    Rewrite(TextTransform),
    /// Recompute the tab stop from the re-measured line.
    Tab(Tab),
}
