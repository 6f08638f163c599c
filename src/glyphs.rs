//! Letterform outlines and wordmark layout.
//!
//! Every glyph is a set of closed contours in a 100×100 design grid plus a
//! horizontal advance. Glyphs with counters (B, A) list the outer contour first
//! and are filled with the even-odd rule so the inner contours cut out.

use anyhow::Result;
use tracing::debug;

use crate::models::{Point, Transform};
use crate::svg::{Element, Paint, PathData};

const fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// A letterform: closed contours in the design grid and its advance width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// The character this glyph draws
    pub character: char,
    /// Closed contours; the first is the outer outline
    pub contours: &'static [&'static [Point]],
    /// Horizontal pen advance in design units
    pub advance: f64,
}

impl Glyph {
    /// Returns true if the glyph has inner contours (holes).
    pub fn has_holes(&self) -> bool {
        self.contours.len() > 1
    }

    /// Traces every contour under `transform` into one path description.
    pub fn path(&self, transform: &Transform) -> PathData {
        let mut data = PathData::new();
        for contour in self.contours {
            data.extend(PathData::trace(contour, transform));
        }
        data
    }

    /// The glyph as a drawable element, even-odd filled when it has holes.
    ///
    /// Returns `None` for glyphs without contours (the space).
    pub fn element(&self, transform: &Transform, fill: Paint) -> Option<Element> {
        if self.contours.is_empty() {
            return None;
        }
        let data = self.path(transform);
        Some(if self.has_holes() {
            Element::evenodd_path(data, fill)
        } else {
            Element::path(data, fill)
        })
    }
}

/// The stylized "N", used both as the standalone mark and in the wordmark.
pub const MARK_OUTLINE: &[Point] = &[
    pt(0.0, 0.0),
    pt(30.0, 0.0),
    pt(70.0, 70.0),
    pt(70.0, 0.0),
    pt(100.0, 0.0),
    pt(100.0, 100.0),
    pt(70.0, 100.0),
    pt(30.0, 30.0),
    pt(30.0, 100.0),
    pt(0.0, 100.0),
];

const E_OUTLINE: &[Point] = &[
    pt(0.0, 0.0),
    pt(80.0, 0.0),
    pt(80.0, 20.0),
    pt(20.0, 20.0),
    pt(20.0, 40.0),
    pt(60.0, 40.0),
    pt(60.0, 60.0),
    pt(20.0, 60.0),
    pt(20.0, 80.0),
    pt(80.0, 80.0),
    pt(80.0, 100.0),
    pt(0.0, 100.0),
];

const B_OUTER: &[Point] = &[
    pt(0.0, 0.0),
    pt(60.0, 0.0),
    pt(80.0, 20.0),
    pt(80.0, 40.0),
    pt(60.0, 50.0),
    pt(80.0, 60.0),
    pt(80.0, 80.0),
    pt(60.0, 100.0),
    pt(0.0, 100.0),
];

const B_UPPER_COUNTER: &[Point] = &[
    pt(20.0, 20.0),
    pt(50.0, 20.0),
    pt(60.0, 30.0),
    pt(50.0, 40.0),
    pt(20.0, 40.0),
];

const B_LOWER_COUNTER: &[Point] = &[
    pt(20.0, 60.0),
    pt(50.0, 60.0),
    pt(60.0, 70.0),
    pt(50.0, 80.0),
    pt(20.0, 80.0),
];

const U_OUTLINE: &[Point] = &[
    pt(0.0, 0.0),
    pt(20.0, 0.0),
    pt(20.0, 80.0),
    pt(60.0, 80.0),
    pt(60.0, 0.0),
    pt(80.0, 0.0),
    pt(80.0, 100.0),
    pt(0.0, 100.0),
];

const L_OUTLINE: &[Point] = &[
    pt(0.0, 0.0),
    pt(20.0, 0.0),
    pt(20.0, 80.0),
    pt(80.0, 80.0),
    pt(80.0, 100.0),
    pt(0.0, 100.0),
];

const A_OUTER: &[Point] = &[
    pt(40.0, 0.0),
    pt(60.0, 0.0),
    pt(100.0, 100.0),
    pt(80.0, 100.0),
    pt(70.0, 70.0),
    pt(30.0, 70.0),
    pt(20.0, 100.0),
    pt(0.0, 100.0),
];

const A_COUNTER: &[Point] = &[pt(40.0, 50.0), pt(60.0, 50.0), pt(50.0, 20.0)];

const X_OUTLINE: &[Point] = &[
    pt(0.0, 0.0),
    pt(25.0, 0.0),
    pt(50.0, 40.0),
    pt(75.0, 0.0),
    pt(100.0, 0.0),
    pt(65.0, 50.0),
    pt(100.0, 100.0),
    pt(75.0, 100.0),
    pt(50.0, 60.0),
    pt(25.0, 100.0),
    pt(0.0, 100.0),
    pt(35.0, 50.0),
];

/// Every glyph the wordmark can draw.
pub const GLYPHS: &[Glyph] = &[
    Glyph {
        character: 'N',
        contours: &[MARK_OUTLINE],
        advance: 120.0,
    },
    Glyph {
        character: 'E',
        contours: &[E_OUTLINE],
        advance: 100.0,
    },
    Glyph {
        character: 'B',
        contours: &[B_OUTER, B_UPPER_COUNTER, B_LOWER_COUNTER],
        advance: 100.0,
    },
    Glyph {
        character: 'U',
        contours: &[U_OUTLINE],
        advance: 100.0,
    },
    Glyph {
        character: 'L',
        contours: &[L_OUTLINE],
        advance: 100.0,
    },
    Glyph {
        character: 'A',
        contours: &[A_OUTER, A_COUNTER],
        advance: 120.0,
    },
    Glyph {
        character: ' ',
        contours: &[],
        advance: 40.0,
    },
    Glyph {
        character: 'X',
        contours: &[X_OUTLINE],
        advance: 120.0,
    },
];

/// Looks up the glyph for a character (case-insensitive).
pub fn glyph_for(character: char) -> Option<&'static Glyph> {
    let upper = character.to_ascii_uppercase();
    GLYPHS.iter().find(|g| g.character == upper)
}

/// A laid-out line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Wordmark {
    /// One element per drawn glyph, filled with `currentColor`
    pub elements: Vec<Element>,
    /// Pen position after the last glyph, in page units
    pub width: f64,
}

/// Lays out `text` left to right starting at `(origin_x, origin_y)`.
///
/// Each glyph is drawn at the current pen position and the pen then advances by
/// `advance * scale`. The returned width is the final pen position, so it
/// includes the origin offset. Characters without a glyph are an error.
pub fn layout_wordmark(text: &str, scale: f64, origin_x: f64, origin_y: f64) -> Result<Wordmark> {
    let mut elements = Vec::new();
    let mut pen = Transform::new(scale, origin_x, origin_y);

    for character in text.chars() {
        let Some(glyph) = glyph_for(character) else {
            anyhow::bail!("No glyph for character '{character}' in wordmark \"{text}\"");
        };
        if let Some(element) = glyph.element(&pen, Paint::CurrentColor) {
            elements.push(element);
        }
        pen = pen.then_offset(glyph.advance * scale, 0.0);
    }

    debug!(
        "laid out wordmark \"{}\": {} glyphs, width {}",
        text,
        elements.len(),
        pen.offset_x
    );

    Ok(Wordmark {
        elements,
        width: pen.offset_x,
    })
}
