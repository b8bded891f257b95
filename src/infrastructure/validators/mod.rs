//! Content validators
//!
//! Concrete implementations of the ContentValidator port.

mod svg_icon;

pub use svg_icon::{SvgIconValidator, DEFAULT_ICON_FIELD, DEFAULT_MAX_ICON_BYTES};
