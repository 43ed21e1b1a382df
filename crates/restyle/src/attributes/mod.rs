//! Flat attribute maps.
//!
//! An [`AttributeMap`] is what a resolved style turns into and what every run
//! of a [`StyledText`](crate::StyledText) carries. Keys are plain strings; the
//! well-known ones live in [`keys`]. One key,
//! [`keys::TRANSFORMATIONS`], is reserved for the embedded transformation list
//! (see [`crate::transform`]).

mod value;

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

pub use value::AttributeValue;

use crate::paragraph::ParagraphMetrics;
use crate::platform::{Color, Font, Image};

/// Well-known attribute keys.
pub mod keys {
    pub const FONT: &str = "font";
    pub const LINK: &str = "link";
    pub const FOREGROUND_COLOR: &str = "foreground_color";
    pub const BACKGROUND_COLOR: &str = "background_color";
    pub const UNDERLINE_STYLE: &str = "underline_style";
    pub const UNDERLINE_COLOR: &str = "underline_color";
    pub const STRIKETHROUGH_STYLE: &str = "strikethrough_style";
    pub const STRIKETHROUGH_COLOR: &str = "strikethrough_color";
    pub const BASELINE_OFFSET: &str = "baseline_offset";
    pub const LIGATURE: &str = "ligature";
    pub const KERN: &str = "kern";
    pub const PARAGRAPH_STYLE: &str = "paragraph_style";
    pub const ATTACHMENT: &str = "attachment";
    pub const SPEECH_PUNCTUATION: &str = "speech_punctuation";
    pub const SPEECH_LANGUAGE: &str = "speech_language";
    pub const SPEECH_PITCH: &str = "speech_pitch";
    pub use crate::transform::TRANSFORMATIONS_KEY as TRANSFORMATIONS;
}

/// A mapping from attribute key to value.
///
/// Maps are cheap to compare and serialize; iteration order is by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    entries: BTreeMap<String, AttributeValue>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Inserts `value` only if it is present. An absent value leaves any
    /// existing entry alone.
    pub fn update<V: Into<AttributeValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.entries.insert(key.to_string(), value.into());
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    /// Returns the map with `key` set, for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Copies every entry of `other` into `self`, replacing same-keyed ones.
    pub fn overlay(&mut self, other: &AttributeMap) {
        for (key, value) in other.iter() {
            self.entries.insert(key.to_string(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn font(&self) -> Option<&Font> {
        self.get(keys::FONT).and_then(AttributeValue::as_font)
    }

    pub fn paragraph(&self) -> Option<&ParagraphMetrics> {
        self.get(keys::PARAGRAPH_STYLE)
            .and_then(AttributeValue::as_paragraph)
    }

    pub fn color(&self, key: &str) -> Option<&Color> {
        self.get(key).and_then(AttributeValue::as_color)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttributeValue::as_number)
    }

    pub fn kern(&self) -> Option<f64> {
        self.number(keys::KERN)
    }

    pub fn attachment(&self) -> Option<&Image> {
        self.get(keys::ATTACHMENT)
            .and_then(AttributeValue::as_attachment)
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, AttributeValue);
    type IntoIter = btree_map::IntoIter<String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_skips_absent_values() {
        let mut map = AttributeMap::new();
        map.update::<f64>(keys::KERN, None);
        assert!(map.is_empty());

        map.update(keys::KERN, Some(2.0));
        assert_eq!(map.kern(), Some(2.0));
    }

    #[test]
    fn test_update_absent_keeps_existing() {
        let mut map = AttributeMap::new().with(keys::KERN, 1.0);
        map.update::<f64>(keys::KERN, None);
        assert_eq!(map.kern(), Some(1.0));
    }

    #[test]
    fn test_overlay_replaces_same_keys() {
        let mut base = AttributeMap::new()
            .with("a", 1.0)
            .with("b", 2.0);
        let top = AttributeMap::new().with("b", 3.0).with("c", 4.0);
        base.overlay(&top);
        assert_eq!(base.number("a"), Some(1.0));
        assert_eq!(base.number("b"), Some(3.0));
        assert_eq!(base.number("c"), Some(4.0));
    }

    #[test]
    fn test_typed_getters_ignore_wrong_variants() {
        let map = AttributeMap::new().with(keys::FONT, "not a font");
        assert!(map.font().is_none());
        assert!(map.contains_key(keys::FONT));
    }

    #[test]
    fn test_from_iterator() {
        let map: AttributeMap = vec![("x", 1.0), ("y", 2.0)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let map = AttributeMap::new().with(keys::KERN, 1.5);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"kern": {"number": 1.5}}));
    }
}
