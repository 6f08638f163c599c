//! Polygon path construction.
//!
//! Turns an ordered list of design-grid points into a closed SVG outline.
//! Every letterform, the mark and the ornate sparkle go through [`build_path`].

use std::fmt;

use tracing::trace;

use super::Number;
use crate::models::{Point, Transform};

/// A single drawing instruction in a path description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour at the point (`M x,y`)
    MoveTo(Point),
    /// Straight line to the point (`L x,y`)
    LineTo(Point),
    /// Close the current contour back to its start (`Z`)
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "M {},{}", Number(p.x), Number(p.y)),
            Self::LineTo(p) => write!(f, "L {},{}", Number(p.x), Number(p.y)),
            Self::Close => f.write_str("Z"),
        }
    }
}

/// An ordered sequence of path commands, possibly spanning several contours.
///
/// Serializes to the value of an SVG `d` attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Traces one closed contour through `points` after applying `transform`.
    ///
    /// Emits a move to the first point, a line to every following point in
    /// input order, then a close. Nothing is reordered or deduplicated. An
    /// empty input produces an empty path.
    #[must_use]
    pub fn trace(points: &[Point], transform: &Transform) -> Self {
        let Some((first, rest)) = points.split_first() else {
            trace!("tracing an empty contour");
            return Self::new();
        };

        let mut commands = Vec::with_capacity(points.len() + 1);
        commands.push(PathCommand::MoveTo(transform.apply(*first)));
        commands.extend(rest.iter().map(|p| PathCommand::LineTo(transform.apply(*p))));
        commands.push(PathCommand::Close);

        Self { commands }
    }

    /// Appends the contours of `other` after this path's contours.
    ///
    /// Used for glyphs with holes: outer outline first, then cutouts.
    pub fn extend(&mut self, other: Self) {
        self.commands.extend(other.commands);
    }

    /// Returns the commands in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands, including moves and closes.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of contours (one per move command).
    pub fn contour_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// The starting point of the first contour, if any.
    pub fn first_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Returns true if every contour ends with a close command.
    pub fn is_closed(&self) -> bool {
        !self.commands.is_empty()
            && self.commands.iter().enumerate().all(|(i, c)| match c {
                PathCommand::MoveTo(_) => i == 0 || self.commands[i - 1] == PathCommand::Close,
                _ => true,
            })
            && self.commands.last() == Some(&PathCommand::Close)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Builds a closed path through `points`, each mapped to
/// `(x * scale + offset_x, y * scale + offset_y)`.
///
/// Pure and deterministic: identical inputs always give identical output, and
/// the traversal order is exactly the input order. At least two points make a
/// meaningful outline; two points still produce a closed (degenerate) path.
///
/// # Examples
///
/// ```
/// use nebulagen::models::Point;
/// use nebulagen::svg::build_path;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let path = build_path(&square, 2.0, 5.0, 5.0);
/// assert_eq!(path.to_string(), "M 5,5 L 25,5 L 25,25 L 5,25 Z");
/// ```
#[must_use]
pub fn build_path(points: &[Point], scale: f64, offset_x: f64, offset_y: f64) -> PathData {
    PathData::trace(points, &Transform::new(scale, offset_x, offset_y))
}
