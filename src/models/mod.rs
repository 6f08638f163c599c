//! Data models for the brand assets.
//!
//! Plain value types with no I/O: design-grid geometry, colors and the palette.

pub mod geometry;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use geometry::{Point, Transform};
pub use palette::Palette;
pub use rgb::RgbColor;
