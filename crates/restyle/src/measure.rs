//! Text measurement for tab placement.
//!
//! The engine does no shaping. A [`TextMeasurer`] estimates the advance width
//! of a run so the composer can place tab stops after it; [`LineCursor`]
//! tracks the width of the current line across runs.

use unicode_width::UnicodeWidthChar;

use crate::attributes::AttributeMap;
use crate::text::OBJECT_REPLACEMENT;

/// Point size assumed for runs without a font.
pub const DEFAULT_POINT_SIZE: f64 = 12.0;

/// Measures the advance width of a piece of text.
///
/// `text` never contains line breaks or tab characters; [`LineCursor`] splits
/// those out before measuring.
pub trait TextMeasurer {
    fn width(&self, text: &str, attributes: &AttributeMap) -> f64;
}

/// Estimates width from display columns.
///
/// Each column is `advance_ratio` of the point size wide, each character adds
/// the run's kerning, and an attachment placeholder is as wide as its image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceMeasurer {
    pub advance_ratio: f64,
}

impl AdvanceMeasurer {
    pub fn new(advance_ratio: f64) -> Self {
        Self { advance_ratio }
    }
}

impl Default for AdvanceMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.5 }
    }
}

impl TextMeasurer for AdvanceMeasurer {
    fn width(&self, text: &str, attributes: &AttributeMap) -> f64 {
        let point_size = attributes
            .font()
            .map(|font| font.point_size())
            .unwrap_or(DEFAULT_POINT_SIZE);
        let column = point_size * self.advance_ratio;
        let kern = attributes.kern().unwrap_or(0.0);
        let attachment = attributes.attachment();

        text.chars()
            .map(|c| match (c, attachment) {
                (OBJECT_REPLACEMENT, Some(image)) => image.width,
                _ => c.width().unwrap_or(0) as f64 * column + kern,
            })
            .sum()
    }
}

/// The width of the line being built.
pub struct LineCursor<'m> {
    measurer: &'m dyn TextMeasurer,
    width: f64,
}

impl<'m> LineCursor<'m> {
    pub fn new(measurer: &'m dyn TextMeasurer) -> Self {
        Self {
            measurer,
            width: 0.0,
        }
    }

    /// Width from the last line break to the current end.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Moves past `text` styled with `attributes`.
    ///
    /// A line break resets the width. A tab jumps to the first tab stop of the
    /// run's paragraph past the current position, or stays put if there is
    /// none.
    pub fn advance(&mut self, text: &str, attributes: &AttributeMap) {
        let mut rest = text;
        while let Some(pos) = rest.find(|c: char| c == '\n' || c == '\t') {
            self.width += self.measure(&rest[..pos], attributes);
            if rest[pos..].starts_with('\n') {
                self.width = 0.0;
            } else {
                self.width = next_tab_stop(self.width, attributes).unwrap_or(self.width);
            }
            rest = &rest[pos + 1..];
        }
        self.width += self.measure(rest, attributes);
    }

    fn measure(&self, text: &str, attributes: &AttributeMap) -> f64 {
        if text.is_empty() {
            0.0
        } else {
            self.measurer.width(text, attributes)
        }
    }
}

fn next_tab_stop(position: f64, attributes: &AttributeMap) -> Option<f64> {
    attributes
        .paragraph()?
        .tab_stops
        .iter()
        .map(|stop| stop.location)
        .find(|location| *location > position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::keys;
    use crate::paragraph::{ParagraphMetrics, TabStop};
    use crate::platform::{Font, Image};

    fn font_map(size: f64) -> AttributeMap {
        AttributeMap::new().with(keys::FONT, Font::new("Mono", size))
    }

    #[test]
    fn test_width_scales_with_point_size() {
        let measurer = AdvanceMeasurer::default();
        assert_eq!(measurer.width("abcd", &font_map(10.0)), 20.0);
        assert_eq!(measurer.width("abcd", &font_map(20.0)), 40.0);
    }

    #[test]
    fn test_default_size_without_font() {
        let measurer = AdvanceMeasurer::default();
        assert_eq!(measurer.width("ab", &AttributeMap::new()), 12.0);
    }

    #[test]
    fn test_wide_characters_take_two_columns() {
        let measurer = AdvanceMeasurer::default();
        assert_eq!(measurer.width("日本", &font_map(10.0)), 20.0);
    }

    #[test]
    fn test_kerning_adds_per_character() {
        let measurer = AdvanceMeasurer::default();
        let map = font_map(10.0).with(keys::KERN, 1.0);
        assert_eq!(measurer.width("abc", &map), 18.0);
    }

    #[test]
    fn test_attachment_measures_as_image() {
        let measurer = AdvanceMeasurer::default();
        let map = font_map(10.0).with(keys::ATTACHMENT, Image::new("star", 16.0, 16.0));
        assert_eq!(measurer.width("\u{FFFC}", &map), 16.0);
    }

    #[test]
    fn test_cursor_resets_on_newline() {
        let measurer = AdvanceMeasurer::default();
        let mut cursor = LineCursor::new(&measurer);
        cursor.advance("abcd\nab", &font_map(10.0));
        assert_eq!(cursor.width(), 10.0);
    }

    #[test]
    fn test_cursor_jumps_to_tab_stop() {
        let measurer = AdvanceMeasurer::default();
        let paragraph = ParagraphMetrics {
            tab_stops: vec![TabStop::new(5.0), TabStop::new(40.0)],
            ..ParagraphMetrics::default()
        };
        let map = font_map(10.0).with(keys::PARAGRAPH_STYLE, paragraph);
        let mut cursor = LineCursor::new(&measurer);
        cursor.advance("ab\tc", &map);
        assert_eq!(cursor.width(), 45.0);
    }

    #[test]
    fn test_tab_without_stops_does_not_move() {
        let measurer = AdvanceMeasurer::default();
        let mut cursor = LineCursor::new(&measurer);
        cursor.advance("ab\t", &font_map(10.0));
        assert_eq!(cursor.width(), 10.0);
    }
}
