//! Design-grid geometry: points and the scale/offset transform.
//!
//! Letterforms are drawn in an abstract 100×100 grid and placed on the page
//! by a [`Transform`]: uniform scale first, then translation.

/// A point in the 100×100 design grid (or, after transformation, in page units).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Uniform scale followed by an (x, y) translation.
///
/// # Coordinate Conversion
///
/// - Page X = `x * scale + offset_x`
/// - Page Y = `y * scale + offset_y`
///
/// A non-positive scale collapses or mirrors geometry. It is not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Uniform scale factor
    pub scale: f64,
    /// Horizontal translation applied after scaling
    pub offset_x: f64,
    /// Vertical translation applied after scaling
    pub offset_y: f64,
}

impl Transform {
    /// The identity transform (scale 1, no offset).
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0);

    /// Creates a new transform.
    #[must_use]
    pub const fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Returns a copy translated by a further `(dx, dy)` in page units.
    #[must_use]
    pub fn then_offset(self, dx: f64, dy: f64) -> Self {
        Self {
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y + dy,
            ..self
        }
    }

    /// Maps a design-grid point to page coordinates.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
