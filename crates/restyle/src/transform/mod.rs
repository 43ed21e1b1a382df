//! Replayable transformations embedded in attribute maps.
//!
//! Resolving a style stores, next to the concrete attributes, a list of
//! data-only descriptors under [`TRANSFORMATIONS_KEY`]. Adapting the map later
//! replays those descriptors without needing the style that produced it.
//!
//! The list is append-only: [`embed`] never replaces or reorders what is
//! already there, so each run of a composed text keeps its own chain.

mod content;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::adaptive::AdaptiveStyleTransformation;
use crate::attributes::{AttributeMap, AttributeValue};

pub use content::{ContentTransformation, Tab, TextTransform};

/// The reserved attribute key holding the embedded transformation list.
pub const TRANSFORMATIONS_KEY: &str = "restyle.transformations";

/// One embedded transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    /// Recomputes attributes (font, kerning) for a new environment.
    AdaptiveStyle(AdaptiveStyleTransformation),
    /// Rewrites the text or paragraph of the run that carries it.
    AttributedContent(ContentTransformation),
}

impl From<AdaptiveStyleTransformation> for Transformation {
    fn from(transformation: AdaptiveStyleTransformation) -> Self {
        Transformation::AdaptiveStyle(transformation)
    }
}

impl From<ContentTransformation> for Transformation {
    fn from(transformation: ContentTransformation) -> Self {
        Transformation::AttributedContent(transformation)
    }
}

/// Types that can be filtered out of an embedded transformation list.
pub trait Embedded: Clone {
    fn from_embedded(transformation: &Transformation) -> Option<&Self>;
}

impl Embedded for Transformation {
    fn from_embedded(transformation: &Transformation) -> Option<&Self> {
        Some(transformation)
    }
}

impl Embedded for AdaptiveStyleTransformation {
    fn from_embedded(transformation: &Transformation) -> Option<&Self> {
        match transformation {
            Transformation::AdaptiveStyle(t) => Some(t),
            _ => None,
        }
    }
}

impl Embedded for ContentTransformation {
    fn from_embedded(transformation: &Transformation) -> Option<&Self> {
        match transformation {
            Transformation::AttributedContent(t) => Some(t),
            _ => None,
        }
    }
}

/// Appends `transformations` to the list embedded in `map`.
///
/// The key is only created when there is something to embed.
pub fn embed<I>(mut map: AttributeMap, transformations: I) -> AttributeMap
where
    I: IntoIterator,
    I::Item: Into<Transformation>,
{
    let incoming: Vec<Transformation> = transformations.into_iter().map(Into::into).collect();
    if incoming.is_empty() {
        return map;
    }
    let mut list = match map.remove(TRANSFORMATIONS_KEY) {
        Some(AttributeValue::Transformations(list)) => list,
        Some(other) => {
            debug!("replacing malformed transformation entry: {:?}", other);
            Vec::new()
        }
        None => Vec::new(),
    };
    list.extend(incoming);
    map.insert(TRANSFORMATIONS_KEY, AttributeValue::Transformations(list));
    map
}

/// The embedded transformations of type `T`, in embedding order.
///
/// A reserved key holding anything other than a transformation list is
/// ignored.
pub fn extract<T: Embedded>(map: &AttributeMap) -> Vec<T> {
    match map.get(TRANSFORMATIONS_KEY) {
        Some(AttributeValue::Transformations(list)) => list
            .iter()
            .filter_map(T::from_embedded)
            .cloned()
            .collect(),
        Some(other) => {
            debug!("ignoring malformed transformation entry: {:?}", other);
            Vec::new()
        }
        None => Vec::new(),
    }
}
