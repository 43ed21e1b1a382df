//! Error types.
//!
//! Resolution, adaptation and composition never fail. Errors only come from
//! configuration (stylesheets, named style aliases), from the markup front
//! end, and from font reconstruction, and the last two are absorbed by the
//! engine.

use std::path::PathBuf;

/// A broken alias chain in a [`NamedStyles`](crate::registry::NamedStyles)
/// registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValidationError {
    /// `from` aliases `to`, which names no registered style.
    UnresolvedAlias { from: String, to: String },
    /// Following aliases from the first name of `path` leads back into it.
    CycleDetected { path: Vec<String> },
}

impl std::fmt::Display for StyleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValidationError::UnresolvedAlias { from, to } => {
                write!(f, "named style '{}' is an alias of unknown style '{}'", from, to)
            }
            StyleValidationError::CycleDetected { path } => {
                write!(f, "alias cycle between named styles: {}", path.join(" -> "))
            }
        }
    }
}

impl std::error::Error for StyleValidationError {}

/// Error returned when a font cannot be reconstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The font does not accept feature settings at all.
    FeaturesUnsupported { family: String },
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::FeaturesUnsupported { family } => {
                write!(f, "font '{}' cannot be reconstructed with features", family)
            }
        }
    }
}

impl std::error::Error for FontError {}

/// Error returned by the tag markup parser.
///
/// Offsets are byte positions in the markup source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A tag was opened and never closed.
    Unbalanced { tag: String, offset: usize },
    /// A closing tag does not match the innermost open tag.
    UnexpectedClose {
        expected: Option<String>,
        found: String,
        offset: usize,
    },
    /// A `<` without a matching `>`.
    UnterminatedTag { offset: usize },
    /// An `&name;` sequence that is not a known entity.
    UnknownEntity { entity: String, offset: usize },
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupError::Unbalanced { tag, offset } => {
                write!(f, "unbalanced tag <{}> opened at {}", tag, offset)
            }
            MarkupError::UnexpectedClose {
                expected: Some(expected),
                found,
                offset,
            } => write!(
                f,
                "unexpected </{}> at {}, expected </{}>",
                found, offset, expected
            ),
            MarkupError::UnexpectedClose {
                expected: None,
                found,
                offset,
            } => write!(f, "unexpected </{}> at {} with no open tag", found, offset),
            MarkupError::UnterminatedTag { offset } => {
                write!(f, "unterminated tag starting at {}", offset)
            }
            MarkupError::UnknownEntity { entity, offset } => {
                write!(f, "unknown entity &{}; at {}", entity, offset)
            }
        }
    }
}

impl std::error::Error for MarkupError {}

/// Error returned when loading a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum StylesheetError {
    #[error("failed to read stylesheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid stylesheet: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Validation(#[from] StyleValidationError),
}
