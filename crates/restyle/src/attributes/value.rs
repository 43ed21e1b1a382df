//! Attribute values.

use serde::{Deserialize, Serialize};

use crate::paragraph::ParagraphMetrics;
use crate::platform::{Color, Font, Image};
use crate::transform::Transformation;

/// A value stored in an [`AttributeMap`](super::AttributeMap).
///
/// The set of variants is closed so resolution stays total. Host values the
/// engine does not understand travel through [`AttributeValue::Extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    Font(Font),
    Color(Color),
    Number(f64),
    /// The raw value of an enumeration (underline style, ligature setting).
    Enum(i64),
    Bool(bool),
    Text(String),
    Paragraph(ParagraphMetrics),
    Attachment(Image),
    /// Embedded transformations, in application order.
    Transformations(Vec<Transformation>),
    /// An opaque host value passed through untouched.
    Extra(serde_json::Value),
}

impl AttributeValue {
    pub fn as_font(&self) -> Option<&Font> {
        match self {
            AttributeValue::Font(font) => Some(font),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            AttributeValue::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<i64> {
        match self {
            AttributeValue::Enum(raw) => Some(*raw),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&ParagraphMetrics> {
        match self {
            AttributeValue::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_attachment(&self) -> Option<&Image> {
        match self {
            AttributeValue::Attachment(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_transformations(&self) -> Option<&[Transformation]> {
        match self {
            AttributeValue::Transformations(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_extra(&self) -> Option<&serde_json::Value> {
        match self {
            AttributeValue::Extra(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Font> for AttributeValue {
    fn from(font: Font) -> Self {
        AttributeValue::Font(font)
    }
}

impl From<Color> for AttributeValue {
    fn from(color: Color) -> Self {
        AttributeValue::Color(color)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<ParagraphMetrics> for AttributeValue {
    fn from(paragraph: ParagraphMetrics) -> Self {
        AttributeValue::Paragraph(paragraph)
    }
}

impl From<Image> for AttributeValue {
    fn from(image: Image) -> Self {
        AttributeValue::Attachment(image)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        AttributeValue::Extra(value)
    }
}
