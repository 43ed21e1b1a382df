//! Named styles and aliases.
//!
//! A [`NamedStyles`] registry holds concrete [`StyleSpec`]s under names, plus
//! aliases that point at other names. Aliases support a layered pattern: a
//! semantic name ("timestamp") aliases a presentation name ("caption"),
//! which holds the concrete style.
//!
//! ```rust
//! use restyle::{Font, StyleSpec};
//! use restyle::registry::NamedStyles;
//!
//! let styles = NamedStyles::new()
//!     .add("caption", StyleSpec::new().font(Font::new("Avenir-Book", 11.0)))
//!     .add("timestamp", "caption");
//! assert!(styles.validate().is_ok());
//! assert_eq!(styles.get("timestamp"), styles.get("caption"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StyleValidationError;
use crate::style::StyleSpec;

/// A registry entry: a concrete style or the name of another entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleEntry {
    Alias(String),
    Concrete(StyleSpec),
}

impl From<StyleSpec> for StyleEntry {
    fn from(spec: StyleSpec) -> Self {
        StyleEntry::Concrete(spec)
    }
}

impl From<&str> for StyleEntry {
    fn from(target: &str) -> Self {
        StyleEntry::Alias(target.to_string())
    }
}

impl From<String> for StyleEntry {
    fn from(target: String) -> Self {
        StyleEntry::Alias(target)
    }
}

/// A registry of named styles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedStyles {
    entries: BTreeMap<String, StyleEntry>,
}

impl NamedStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named entry, returning the registry for chaining.
    ///
    /// The value is either a [`StyleSpec`] or the name of another entry.
    pub fn add<V: Into<StyleEntry>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<V: Into<StyleEntry>>(&mut self, name: &str, value: V) {
        self.entries.insert(name.to_string(), value.into());
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entry(&self, name: &str) -> Option<&StyleEntry> {
        self.entries.get(name)
    }

    /// The concrete style `name` resolves to, following aliases.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn get(&self, name: &str) -> Option<&StyleSpec> {
        let mut current = name;
        for _ in 0..=self.entries.len() {
            match self.entries.get(current)? {
                StyleEntry::Concrete(spec) => return Some(spec),
                StyleEntry::Alias(target) => current = target.as_str(),
            }
        }
        None
    }

    /// Checks that every alias resolves to a concrete style.
    ///
    /// # Errors
    ///
    /// Returns the first dangling alias or cycle found, in name order.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for (name, entry) in &self.entries {
            if let StyleEntry::Alias(_) = entry {
                self.validate_chain(name)?;
            }
        }
        Ok(())
    }

    fn validate_chain(&self, start: &str) -> Result<(), StyleValidationError> {
        let mut path = vec![start.to_string()];
        let mut current = start;
        while let Some(StyleEntry::Alias(target)) = self.entries.get(current) {
            if path.iter().any(|seen| seen == target) {
                path.push(target.clone());
                return Err(StyleValidationError::CycleDetected { path });
            }
            if !self.entries.contains_key(target) {
                return Err(StyleValidationError::UnresolvedAlias {
                    from: current.to_string(),
                    to: target.clone(),
                });
            }
            path.push(target.clone());
            current = target.as_str();
        }
        Ok(())
    }
}
