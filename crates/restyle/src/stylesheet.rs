//! YAML stylesheets.
//!
//! A stylesheet is a mapping from style name to either a style or the name of
//! another style:
//!
//! ```yaml
//! body:
//!   font: { family: Avenir-Book, size: 17 }
//!   line_spacing: 4
//!   adaptations: [body]
//! caption:
//!   font: { family: Avenir-Book, size: 12 }
//!   foreground_color: "#666666"
//!   adaptations: [control]
//! timestamp: caption
//! ```
//!
//! Loading validates aliases, so a stylesheet that loads has no dangling
//! aliases and no cycles.

use std::path::Path;

use crate::error::StylesheetError;
use crate::markup::TagStyler;
use crate::registry::NamedStyles;
use crate::style::StyleSpec;

/// A validated set of named styles loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    styles: NamedStyles,
}

impl Stylesheet {
    /// Parses and validates a stylesheet.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::Parse`] for malformed YAML, unknown style
    /// fields or bad color literals, and [`StylesheetError::Validation`] for
    /// broken aliases.
    pub fn from_yaml_str(source: &str) -> Result<Self, StylesheetError> {
        let styles: NamedStyles = if source.trim().is_empty() {
            NamedStyles::new()
        } else {
            serde_yaml::from_str(source)?
        };
        styles.validate()?;
        Ok(Self { styles })
    }

    /// Reads and parses the stylesheet at `path`.
    ///
    /// # Errors
    ///
    /// As [`Stylesheet::from_yaml_str`], plus [`StylesheetError::Io`] when the
    /// file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    pub fn styles(&self) -> &NamedStyles {
        &self.styles
    }

    pub fn into_styles(self) -> NamedStyles {
        self.styles
    }

    /// The style registered as `name`, following aliases.
    pub fn get(&self, name: &str) -> Option<&StyleSpec> {
        self.styles.get(name)
    }

    /// A markup styler whose tags are this stylesheet's style names.
    pub fn tag_styler(&self) -> TagStyler {
        TagStyler::from_registry(&self.styles)
    }
}
