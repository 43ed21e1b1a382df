//! Capability objects the engine consumes as immutable values.
//!
//! - [`Font`]: family, point size and feature settings, reconstructible with
//!   new features or a new size
//! - [`Color`]: an RGBA color
//! - [`Image`]: an inline image, measured by its width
//! - [`TextStyle`]: a semantic system text style with per-category sizes
//! - [`Environment`] / [`ContentSizeCategory`]: the display context that
//!   adaptive styles respond to

mod color;
mod environment;
mod font;
mod image;
mod text_style;

pub use color::{Color, ColorParseError};
pub use environment::{ContentSizeCategory, Environment};
pub use font::{FeatureSupport, Font, SYSTEM_FAMILY};
pub use image::Image;
pub use text_style::TextStyle;
