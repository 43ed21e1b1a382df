//! Tag markup front end.
//!
//! [`TagStyler`] maps tag names to styles and splits marked-up text into
//! segments, each paired with the merged style of the tags enclosing it:
//!
//! ```rust
//! use restyle::{Color, StyleSpec};
//! use restyle::markup::TagStyler;
//!
//! let styler = TagStyler::new()
//!     .rule("em", StyleSpec::new().foreground_color(Color::rgb(200, 0, 0)));
//! let segments = styler.parse("plain <em>loud</em> &amp; plain").unwrap();
//! let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
//! assert_eq!(texts, vec!["plain ", "loud", " & plain"]);
//! ```
//!
//! The syntax is a small subset of XML: `<name>` opens, `</name>` closes,
//! `<name/>` is an empty element, attributes inside a tag are ignored, and
//! the five predefined entities plus numeric character references are
//! decoded. Tags without a rule are accepted and contribute no style.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::MarkupError;
use crate::registry::NamedStyles;
use crate::style::StyleSpec;

/// A run of markup-free text and the style its enclosing tags select.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub style: StyleSpec,
}

/// Maps tag names to styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagStyler {
    rules: BTreeMap<String, StyleSpec>,
}

impl TagStyler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A styler with one rule per style name in `styles`, aliases included.
    pub fn from_registry(styles: &NamedStyles) -> Self {
        let rules = styles
            .names()
            .filter_map(|name| styles.get(name).map(|spec| (name.to_string(), spec.clone())))
            .collect();
        Self { rules }
    }

    /// Adds a rule, returning the styler for chaining.
    pub fn rule(mut self, tag: impl Into<String>, style: StyleSpec) -> Self {
        self.rules.insert(tag.into(), style);
        self
    }

    pub fn style(&self, tag: &str) -> Option<&StyleSpec> {
        self.rules.get(tag)
    }

    /// Splits `source` into styled segments.
    ///
    /// Nested tags merge outer to inner. Every tag ends the current segment;
    /// empty segments are not produced.
    ///
    /// # Errors
    ///
    /// Fails on unterminated or mismatched tags, tags left open at the end,
    /// and unknown entities.
    pub fn parse(&self, source: &str) -> Result<Vec<Segment>, MarkupError> {
        let mut segments = Vec::new();
        let mut open: Vec<(String, usize)> = Vec::new();
        let mut buffer = String::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(pos) = rest.find(|c: char| c == '<' || c == '&') {
            buffer.push_str(&rest[..pos]);
            let start = offset + pos;
            let tail = &rest[pos..];

            let consumed = if tail.starts_with('<') {
                let end = tail
                    .find('>')
                    .ok_or(MarkupError::UnterminatedTag { offset: start })?;
                self.flush(&mut buffer, &open, &mut segments);
                handle_tag(&tail[1..end], start, &mut open)?;
                end + 1
            } else {
                let end = 1 + tail[1..]
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '#'))
                    .unwrap_or(tail.len() - 1);
                if end > 1 && tail[end..].starts_with(';') {
                    let entity = &tail[1..end];
                    let decoded =
                        decode_entity(entity).ok_or_else(|| MarkupError::UnknownEntity {
                            entity: entity.to_string(),
                            offset: start,
                        })?;
                    buffer.push(decoded);
                    end + 1
                } else {
                    // A bare ampersand is literal text.
                    buffer.push('&');
                    1
                }
            };

            rest = &tail[consumed..];
            offset = start + consumed;
        }
        buffer.push_str(rest);

        if let Some((tag, offset)) = open.pop() {
            return Err(MarkupError::Unbalanced { tag, offset });
        }
        self.flush(&mut buffer, &open, &mut segments);
        Ok(segments)
    }

    fn flush(&self, buffer: &mut String, open: &[(String, usize)], segments: &mut Vec<Segment>) {
        if buffer.is_empty() {
            return;
        }
        let style = StyleSpec::merged(open.iter().filter_map(|(tag, _)| self.rules.get(tag)));
        segments.push(Segment {
            text: std::mem::take(buffer),
            style,
        });
    }
}

fn handle_tag(
    content: &str,
    offset: usize,
    open: &mut Vec<(String, usize)>,
) -> Result<(), MarkupError> {
    if let Some(name) = content.strip_prefix('/') {
        let name = name.trim();
        return match open.pop() {
            Some((tag, _)) if tag == name => Ok(()),
            Some((tag, _)) => Err(MarkupError::UnexpectedClose {
                expected: Some(tag),
                found: name.to_string(),
                offset,
            }),
            None => Err(MarkupError::UnexpectedClose {
                expected: None,
                found: name.to_string(),
                offset,
            }),
        };
    }
    if content.trim_end().ends_with('/') {
        return Ok(());
    }
    let name = content.split_whitespace().next().unwrap_or_default();
    open.push((name.to_string(), offset));
    Ok(())
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
