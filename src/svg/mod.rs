//! Minimal SVG model: path construction and document assembly.
//!
//! Only the handful of primitives the brand assets need are modelled. Markup is
//! produced by a single serialization pass over the structured document.

pub mod document;
pub mod path;

use std::fmt;

pub use document::{Circle, Definition, Element, FillRule, Paint, SvgDocument};
pub use path::{build_path, PathCommand, PathData};

/// Formats a coordinate or length for markup.
///
/// Rounds to three decimals, drops trailing zeros and never prints `-0`,
/// so `56.00000000000001` becomes `56` and `7.50` becomes `7.5`.
#[derive(Debug, Clone, Copy)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;
        // Normalize -0.0
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{rounded}")
    }
}
