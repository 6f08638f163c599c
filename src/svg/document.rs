//! SVG document accumulator.
//!
//! Assets append structured definitions and elements to an [`SvgDocument`],
//! which is serialized once when written. No call site builds markup by hand.

use std::fmt::{self, Write};

use tracing::debug;

use super::{Number, PathData};
use crate::models::RgbColor;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const INDENT: &str = "  ";

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// A flat color
    Color(RgbColor),
    /// Inherit the CSS `color` of the enclosing group
    CurrentColor,
    /// Reference to a definition by id (gradient or pattern)
    Url(String),
}

impl Paint {
    /// Reference to a definition with the given id.
    pub fn url(id: impl Into<String>) -> Self {
        Self::Url(id.into())
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::CurrentColor => f.write_str("currentColor"),
            Self::Url(id) => write!(f, "url(#{id})"),
        }
    }
}

/// Fill rule for paths with several contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// SVG default; the attribute is omitted
    #[default]
    NonZero,
    /// Overlapping contours alternate, so inner contours cut holes
    EvenOdd,
}

/// A circle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Center X
    pub cx: f64,
    /// Center Y
    pub cy: f64,
    /// Radius
    pub r: f64,
    /// Fill paint
    pub fill: Paint,
    /// Whole-element opacity (`opacity`)
    pub opacity: Option<f64>,
    /// Fill-only opacity (`fill-opacity`)
    pub fill_opacity: Option<f64>,
}

impl Circle {
    /// Creates an opaque circle.
    pub fn new(cx: f64, cy: f64, r: f64, fill: Paint) -> Self {
        Self {
            cx,
            cy,
            r,
            fill,
            opacity: None,
            fill_opacity: None,
        }
    }

    /// Sets the element opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets the fill opacity.
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = Some(fill_opacity);
        self
    }
}

/// A drawable element in the document body or inside a definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A filled outline
    Path {
        /// Path description (`d` attribute)
        data: PathData,
        /// Fill paint
        fill: Paint,
        /// Fill rule; even-odd for glyphs with holes
        fill_rule: FillRule,
    },
    /// A circle
    Circle(Circle),
    /// A rectangle covering the whole viewport (100% × 100%)
    FullRect {
        /// Fill paint
        fill: Paint,
    },
    /// A group, optionally setting the CSS color inherited by `currentColor`
    Group {
        /// Color for `currentColor` fills inside the group
        color: Option<RgbColor>,
        /// Grouped elements, drawn in order
        children: Vec<Element>,
    },
}

impl Element {
    /// A path with the default fill rule.
    pub fn path(data: PathData, fill: Paint) -> Self {
        Self::Path {
            data,
            fill,
            fill_rule: FillRule::NonZero,
        }
    }

    /// A path filled with the even-odd rule.
    pub fn evenodd_path(data: PathData, fill: Paint) -> Self {
        Self::Path {
            data,
            fill,
            fill_rule: FillRule::EvenOdd,
        }
    }

    /// A group that colors its `currentColor` children.
    pub fn colored_group(color: RgbColor, children: Vec<Self>) -> Self {
        Self::Group {
            color: Some(color),
            children,
        }
    }

    fn write_markup(&self, out: &mut String, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        match self {
            Self::Path {
                data,
                fill,
                fill_rule,
            } => {
                write!(out, "{pad}<path d=\"{data}\"")?;
                if *fill_rule == FillRule::EvenOdd {
                    out.push_str(" fill-rule=\"evenodd\"");
                }
                writeln!(out, " fill=\"{fill}\" />")
            }
            Self::Circle(circle) => {
                write!(
                    out,
                    "{pad}<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
                    Number(circle.cx),
                    Number(circle.cy),
                    Number(circle.r),
                    circle.fill
                )?;
                if let Some(opacity) = circle.opacity {
                    write!(out, " opacity=\"{}\"", Number(opacity))?;
                }
                if let Some(fill_opacity) = circle.fill_opacity {
                    write!(out, " fill-opacity=\"{}\"", Number(fill_opacity))?;
                }
                writeln!(out, " />")
            }
            Self::FullRect { fill } => {
                writeln!(out, "{pad}<rect width=\"100%\" height=\"100%\" fill=\"{fill}\" />")
            }
            Self::Group { color, children } => {
                match color {
                    Some(color) => writeln!(out, "{pad}<g style=\"color:{color}\">")?,
                    None => writeln!(out, "{pad}<g>")?,
                }
                for child in children {
                    child.write_markup(out, depth + 1)?;
                }
                writeln!(out, "{pad}</g>")
            }
        }
    }
}

/// A reusable paint server declared in `<defs>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Diagonal two-stop gradient from the top-left to the bottom-right corner
    LinearGradient {
        /// Reference id
        id: String,
        /// Color at 0%
        from: RgbColor,
        /// Color at 100%
        to: RgbColor,
    },
    /// A tile repeated in user space
    Pattern {
        /// Reference id
        id: String,
        /// Tile width
        width: f64,
        /// Tile height
        height: f64,
        /// Tile contents
        elements: Vec<Element>,
    },
}

impl Definition {
    /// The id other elements use to reference this definition.
    pub fn id(&self) -> &str {
        match self {
            Self::LinearGradient { id, .. } | Self::Pattern { id, .. } => id,
        }
    }

    fn write_markup(&self, out: &mut String, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        let inner = INDENT.repeat(depth + 1);
        match self {
            Self::LinearGradient { id, from, to } => {
                writeln!(
                    out,
                    "{pad}<linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">"
                )?;
                writeln!(
                    out,
                    "{inner}<stop offset=\"0%\" style=\"stop-color:{from};stop-opacity:1\" />"
                )?;
                writeln!(
                    out,
                    "{inner}<stop offset=\"100%\" style=\"stop-color:{to};stop-opacity:1\" />"
                )?;
                writeln!(out, "{pad}</linearGradient>")
            }
            Self::Pattern {
                id,
                width,
                height,
                elements,
            } => {
                writeln!(
                    out,
                    "{pad}<pattern id=\"{id}\" x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" patternUnits=\"userSpaceOnUse\">",
                    Number(*width),
                    Number(*height)
                )?;
                for element in elements {
                    element.write_markup(out, depth + 1)?;
                }
                writeln!(out, "{pad}</pattern>")
            }
        }
    }
}

/// A standalone SVG document with a `0 0 width height` coordinate frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    definitions: Vec<Definition>,
    elements: Vec<Element>,
}

impl SvgDocument {
    /// Creates an empty document.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            definitions: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Declares a definition. A second definition with an id already
    /// declared is ignored, so shared gradients are emitted once.
    pub fn define(&mut self, definition: Definition) -> &mut Self {
        if self.definitions.iter().any(|d| d.id() == definition.id()) {
            debug!("definition '{}' already declared, skipping", definition.id());
        } else {
            self.definitions.push(definition);
        }
        self
    }

    /// Appends an element to the body.
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Appends several elements to the body, in order.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) -> &mut Self {
        self.elements.extend(elements);
        self
    }

    /// Document width in user units.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Document height in user units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Declared definitions, in declaration order.
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Body elements, in drawing order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Serializes the document to SVG markup.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }

    fn write_markup(&self, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"{SVG_NAMESPACE}\">",
            w = self.width,
            h = self.height
        )?;
        if !self.definitions.is_empty() {
            writeln!(out, "{INDENT}<defs>")?;
            for definition in &self.definitions {
                definition.write_markup(out, 2)?;
            }
            writeln!(out, "{INDENT}</defs>")?;
        }
        for element in &self.elements {
            element.write_markup(out, 1)?;
        }
        out.push_str("</svg>\n");
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_markup(&mut out)?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use crate::svg::build_path;

    fn triangle() -> PathData {
        build_path(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
            ],
            1.0,
            0.0,
            0.0,
        )
    }

    #[test]
    fn test_empty_document_frame() {
        let doc = SvgDocument::new(120, 60);
        assert_eq!(
            doc.to_markup(),
            "<svg width=\"120\" height=\"60\" viewBox=\"0 0 120 60\" xmlns=\"http://www.w3.org/2000/svg\">\n</svg>\n"
        );
    }

    #[test]
    fn test_path_and_fill_rule() {
        let mut doc = SvgDocument::new(10, 10);
        doc.push(Element::path(triangle(), Paint::CurrentColor))
            .push(Element::evenodd_path(triangle(), Paint::Color(RgbColor::new(255, 0, 0))));

        let markup = doc.to_markup();
        assert!(markup.contains("  <path d=\"M 0,0 L 10,0 L 5,10 Z\" fill=\"currentColor\" />\n"));
        assert!(markup.contains("fill-rule=\"evenodd\" fill=\"#FF0000\""));
        assert_eq!(markup.matches("fill-rule").count(), 1);
    }

    #[test]
    fn test_defs_are_deduplicated_by_id() {
        let gradient = Definition::LinearGradient {
            id: "g".to_string(),
            from: RgbColor::new(0, 0, 0),
            to: RgbColor::new(255, 255, 255),
        };
        let mut doc = SvgDocument::new(10, 10);
        doc.define(gradient.clone()).define(gradient);

        assert_eq!(doc.definitions().len(), 1);
        let markup = doc.to_markup();
        assert_eq!(markup.matches("<linearGradient").count(), 1);
        assert!(markup.contains("stop-color:#000000;stop-opacity:1"));
        assert!(markup.contains("stop-color:#FFFFFF;stop-opacity:1"));
    }

    #[test]
    fn test_group_and_circle_markup() {
        let mut doc = SvgDocument::new(50, 50);
        doc.push(Element::colored_group(
            RgbColor::new(0x11, 0x18, 0x27),
            vec![Element::Circle(
                Circle::new(10.0, 70.0, 3.0, Paint::Color(RgbColor::new(0x06, 0xB6, 0xD4)))
                    .with_opacity(0.6),
            )],
        ));

        let markup = doc.to_markup();
        assert!(markup.contains("  <g style=\"color:#111827\">\n"));
        assert!(markup.contains(
            "    <circle cx=\"10\" cy=\"70\" r=\"3\" fill=\"#06B6D4\" opacity=\"0.6\" />\n"
        ));
        assert!(markup.contains("  </g>\n"));
    }

    #[test]
    fn test_pattern_definition() {
        let mut doc = SvgDocument::new(400, 400);
        doc.define(Definition::Pattern {
            id: "stars".to_string(),
            width: 100.0,
            height: 100.0,
            elements: vec![Element::Circle(
                Circle::new(10.0, 10.0, 1.5, Paint::Color(RgbColor::new(255, 255, 255)))
                    .with_fill_opacity(0.5),
            )],
        })
        .push(Element::FullRect {
            fill: Paint::url("stars"),
        });

        let markup = doc.to_markup();
        assert!(markup.contains(
            "<pattern id=\"stars\" x=\"0\" y=\"0\" width=\"100\" height=\"100\" patternUnits=\"userSpaceOnUse\">"
        ));
        assert!(markup.contains("r=\"1.5\" fill=\"#FFFFFF\" fill-opacity=\"0.5\""));
        assert!(markup.contains("<rect width=\"100%\" height=\"100%\" fill=\"url(#stars)\" />"));
        assert!(markup.find("<defs>").unwrap() < markup.find("<rect").unwrap());
    }
}
