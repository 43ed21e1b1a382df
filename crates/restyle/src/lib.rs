//! # Restyle
//!
//! Composable text styles, resolved into flat attribute maps that can be
//! re-resolved when the reader's preferred text size changes.
//!
//! ## Concepts
//!
//! - [`StyleSpec`]: a partial style. Styles merge, with the override winning
//!   for every field it sets, and resolve into an [`AttributeMap`].
//! - [`AttributeMap`]: the resolved attributes of a run of text. Besides fonts,
//!   colors and paragraph metrics it carries a list of embedded
//!   [`Transformation`]s recording how to adapt the run later.
//! - [`StyledText`]: text partitioned into runs of equal attributes.
//! - [`Composer`]: joins text, images and tabs under a base style.
//! - [`adapt`] and [`StyledText::adapted`]: replay the embedded
//!   transformations for a new [`Environment`].
//!
//! ## Quick start
//!
//! ```rust
//! use restyle::{ContentSizeCategory, Environment, Font, StyleSpec};
//! use restyle::adaptive::AdaptiveStyle;
//!
//! let style = StyleSpec::new()
//!     .font(Font::new("Avenir-Book", 28.0))
//!     .adaptation(AdaptiveStyle::Control);
//!
//! let text = style.styled_text("Hello");
//! let large = text.adapted(&Environment::new(ContentSizeCategory::ExtraExtraExtraLarge));
//!
//! let font = large.attributes_at(0).and_then(|a| a.font()).unwrap();
//! assert_eq!(font.point_size(), 34.0);
//! ```
//!
//! ## Composition
//!
//! ```rust
//! use restyle::{Composer, Fragment, StyleSpec, Tab};
//!
//! let text = Composer::new(StyleSpec::new())
//!     .compose(vec![
//!         Fragment::from("Name"),
//!         Fragment::from(Tab::Spacer(10.0)),
//!         Fragment::from("Value"),
//!     ]);
//! assert_eq!(text.text(), "Name\tValue");
//! ```
//!
//! ## Stylesheets
//!
//! Named styles can be loaded from YAML with [`Stylesheet`]; see the
//! [`stylesheet`] module.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! installs a logger. Markup that fails to parse and per-mille tracking
//! resolved without a font are reported at `warn`; rejected font features
//! and malformed embedded transformation entries at `debug`.

pub mod adaptive;
pub mod attributes;
pub mod compose;
pub mod error;
pub mod features;
pub mod markup;
pub mod measure;
pub mod paragraph;
pub mod platform;
pub mod registry;
pub mod style;
pub mod stylesheet;
pub mod text;
pub mod tracking;
pub mod transform;

pub use adaptive::{adapt, AdaptiveStyle, AdaptiveStyleTransformation, SizeCurve};
pub use attributes::{keys, AttributeMap, AttributeValue};
pub use compose::{compose, Composer, Fragment};
pub use error::{FontError, MarkupError, StyleValidationError, StylesheetError};
pub use features::{FeatureCompositor, FeatureSettings, FontFeature, FontFeatureProvider};
pub use markup::TagStyler;
pub use measure::{AdvanceMeasurer, TextMeasurer};
pub use paragraph::{Alignment, LineBreakMode, ParagraphMetrics, TabStop, WritingDirection};
pub use platform::{Color, ContentSizeCategory, Environment, Font, Image, TextStyle};
pub use registry::NamedStyles;
pub use style::{Ligatures, LineDecoration, LineStyle, StyleSpec};
pub use stylesheet::Stylesheet;
pub use text::{Run, StyledText};
pub use tracking::Tracking;
pub use transform::{ContentTransformation, Tab, TextTransform, Transformation};
