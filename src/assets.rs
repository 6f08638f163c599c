//! Asset assembly.
//!
//! Each brand asset is a fixed composition of the mark, the wordmark and a few
//! decorative primitives. Only the colors vary, and those come from the
//! configured [`Palette`].
//!
//! | Asset | Size | Content |
//! |---|---|---|
//! | `nebula-x-mark.svg` | 100×100 | mark, gradient fill |
//! | `nebula-x-splash.svg` | 400×400 | mark at 3×, gradient fill |
//! | `nebula-x-wordmark.svg` | width×60 | wordmark, Starlight White |
//! | `nebula-x-logo-light.svg` | width×80 | mark + wordmark, Space Navy text |
//! | `nebula-x-logo-dark.svg` | width×80 | mark + wordmark, Starlight White text |
//! | `nebula-x-logo-ornate-*.svg` | width×80 | logo + circles and sparkle |
//! | `space-bg-pattern.svg` | 400×400 | tiled star field |
//! | `favicon.svg` | 100×100 | same content as the mark |

use anyhow::Result;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::branding::{GRADIENT_ID, PRODUCT_NAME, STAR_PATTERN_ID};
use crate::config::Config;
use crate::glyphs::{layout_wordmark, MARK_OUTLINE};
use crate::models::{Palette, Point, RgbColor};
use crate::svg::{build_path, Circle, Definition, Element, Paint, SvgDocument};

// Mark placement
const MARK_SIZE: u32 = 100;
const MARK_SCALE: f64 = 0.8;
const MARK_OFFSET: f64 = 10.0;

const SPLASH_SIZE: u32 = 400;
const SPLASH_SCALE: f64 = 3.0;
const SPLASH_OFFSET: f64 = 50.0;

// Wordmark placement
const WORDMARK_SCALE: f64 = 0.5;
const WORDMARK_HEIGHT: u32 = 60;

// Logo placement: small mark on the left, wordmark to its right
const LOGO_HEIGHT: u32 = 80;
const LOGO_MARK_SCALE: f64 = 0.6;
const LOGO_MARK_OFFSET_Y: f64 = 10.0;
const LOGO_TEXT_X: f64 = 70.0;
const LOGO_TEXT_Y: f64 = 15.0;

const PATTERN_SIZE: u32 = 400;
const PATTERN_TILE: f64 = 100.0;

/// Four-pointed sparkle drawn above the mark on the ornate logos, in page units.
const SPARKLE: &[Point] = &[
    Point::new(50.0, -10.0),
    Point::new(52.0, -4.0),
    Point::new(58.0, -2.0),
    Point::new(52.0, 0.0),
    Point::new(50.0, 6.0),
    Point::new(48.0, 0.0),
    Point::new(42.0, -2.0),
    Point::new(48.0, -4.0),
];

/// The generated assets, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Standalone mark
    Mark,
    /// Mark at splash-screen size
    Splash,
    /// Product name without the mark
    Wordmark,
    /// Mark plus wordmark for light backgrounds
    LogoLight,
    /// Mark plus wordmark for dark backgrounds
    LogoDark,
    /// Light logo with decorative accents
    LogoOrnateLight,
    /// Dark logo with decorative accents
    LogoOrnateDark,
    /// Tiled star-field background
    SpacePattern,
    /// Browser favicon
    Favicon,
}

impl AssetKind {
    /// Every asset, in generation order.
    pub const ALL: [Self; 9] = [
        Self::Mark,
        Self::Splash,
        Self::Wordmark,
        Self::LogoLight,
        Self::LogoDark,
        Self::LogoOrnateLight,
        Self::LogoOrnateDark,
        Self::SpacePattern,
        Self::Favicon,
    ];

    /// The output filename.
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Mark => "nebula-x-mark.svg",
            Self::Splash => "nebula-x-splash.svg",
            Self::Wordmark => "nebula-x-wordmark.svg",
            Self::LogoLight => "nebula-x-logo-light.svg",
            Self::LogoDark => "nebula-x-logo-dark.svg",
            Self::LogoOrnateLight => "nebula-x-logo-ornate-light.svg",
            Self::LogoOrnateDark => "nebula-x-logo-ornate-dark.svg",
            Self::SpacePattern => "space-bg-pattern.svg",
            Self::Favicon => "favicon.svg",
        }
    }

    /// Filename without the `.svg` extension.
    pub fn stem(self) -> &'static str {
        self.filename().trim_end_matches(".svg")
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename())
    }
}

impl FromStr for AssetKind {
    type Err = anyhow::Error;

    /// Accepts the filename (`nebula-x-mark.svg`), the stem (`nebula-x-mark`)
    /// or the stem without the product prefix (`mark`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                wanted == kind.filename()
                    || wanted == kind.stem()
                    || kind.stem().strip_prefix("nebula-x-") == Some(wanted)
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.stem()).collect();
                anyhow::anyhow!("Unknown asset '{}'. Known assets: {}", wanted, known.join(", "))
            })
    }
}

/// A finished asset: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Which asset this is
    pub kind: AssetKind,
    /// The complete document
    pub document: SvgDocument,
}

impl Asset {
    /// The output filename.
    pub fn filename(&self) -> &'static str {
        self.kind.filename()
    }
}

/// Builds asset documents from a configuration.
#[derive(Debug, Clone, Copy)]
pub struct AssetAssembler<'a> {
    palette: &'a Palette,
}

impl<'a> AssetAssembler<'a> {
    /// Creates an assembler drawing with the configured palette.
    pub fn new(config: &'a Config) -> Self {
        Self {
            palette: &config.palette,
        }
    }

    /// Builds every asset in generation order.
    pub fn build_all(&self) -> Result<Vec<Asset>> {
        self.build_many(&AssetKind::ALL)
    }

    /// Builds the given assets, in the given order.
    pub fn build_many(&self, kinds: &[AssetKind]) -> Result<Vec<Asset>> {
        kinds.iter().map(|kind| self.build(*kind)).collect()
    }

    /// Builds one asset.
    pub fn build(&self, kind: AssetKind) -> Result<Asset> {
        let document = match kind {
            AssetKind::Mark | AssetKind::Favicon => {
                self.mark_document(MARK_SIZE, MARK_SCALE, MARK_OFFSET)
            }
            AssetKind::Splash => self.mark_document(SPLASH_SIZE, SPLASH_SCALE, SPLASH_OFFSET),
            AssetKind::Wordmark => self.wordmark_document()?,
            AssetKind::LogoLight => self.logo_document(self.palette.space_navy, false)?,
            AssetKind::LogoDark => self.logo_document(self.palette.starlight_white, false)?,
            AssetKind::LogoOrnateLight => self.logo_document(self.palette.space_navy, true)?,
            AssetKind::LogoOrnateDark => {
                self.logo_document(self.palette.starlight_white, true)?
            }
            AssetKind::SpacePattern => self.pattern_document(),
        };

        debug!(
            "assembled {} ({}x{})",
            kind,
            document.width(),
            document.height()
        );

        Ok(Asset { kind, document })
    }

    fn nebula_gradient(&self) -> Definition {
        Definition::LinearGradient {
            id: GRADIENT_ID.to_string(),
            from: self.palette.nebula_purple,
            to: self.palette.cosmic_cyan,
        }
    }

    fn mark_element(scale: f64, offset_x: f64, offset_y: f64) -> Element {
        Element::path(
            build_path(MARK_OUTLINE, scale, offset_x, offset_y),
            Paint::url(GRADIENT_ID),
        )
    }

    fn mark_document(&self, size: u32, scale: f64, offset: f64) -> SvgDocument {
        let mut document = SvgDocument::new(size, size);
        document
            .define(self.nebula_gradient())
            .push(Self::mark_element(scale, offset, offset));
        document
    }

    fn wordmark_document(&self) -> Result<SvgDocument> {
        let wordmark = layout_wordmark(PRODUCT_NAME, WORDMARK_SCALE, 0.0, 0.0)?;

        let mut document = SvgDocument::new(wordmark.width as u32, WORDMARK_HEIGHT);
        document.push(Element::colored_group(
            self.palette.starlight_white,
            wordmark.elements,
        ));
        Ok(document)
    }

    fn logo_document(&self, text_color: RgbColor, ornate: bool) -> Result<SvgDocument> {
        let wordmark = layout_wordmark(PRODUCT_NAME, WORDMARK_SCALE, LOGO_TEXT_X, LOGO_TEXT_Y)?;
        let width = wordmark.width as u32;

        let mut document = SvgDocument::new(width, LOGO_HEIGHT);
        document
            .define(self.nebula_gradient())
            .push(Self::mark_element(LOGO_MARK_SCALE, 0.0, LOGO_MARK_OFFSET_Y))
            .push(Element::colored_group(text_color, wordmark.elements));

        if ornate {
            document.extend(self.ornaments(width));
        }
        Ok(document)
    }

    /// Decorative accents for the ornate logos.
    ///
    /// The gold circle tracks the right edge of the logo; the cyan circle and
    /// the sparkle sit at fixed positions around the mark.
    fn ornaments(&self, logo_width: u32) -> Vec<Element> {
        let gold = Paint::Color(self.palette.stellar_gold);
        vec![
            Element::Circle(
                Circle::new(f64::from(logo_width) - 10.0, 10.0, 5.0, gold.clone())
                    .with_opacity(0.8),
            ),
            Element::Circle(
                Circle::new(10.0, 70.0, 3.0, Paint::Color(self.palette.cosmic_cyan))
                    .with_opacity(0.6),
            ),
            Element::path(build_path(SPARKLE, 1.0, 0.0, 0.0), gold),
        ]
    }

    fn pattern_document(&self) -> SvgDocument {
        let white = Paint::Color(self.palette.starlight_white);
        let gold = Paint::Color(self.palette.stellar_gold);

        let mut document = SvgDocument::new(PATTERN_SIZE, PATTERN_SIZE);
        document
            .define(Definition::Pattern {
                id: STAR_PATTERN_ID.to_string(),
                width: PATTERN_TILE,
                height: PATTERN_TILE,
                elements: vec![
                    Element::Circle(Circle::new(10.0, 10.0, 1.5, white.clone()).with_fill_opacity(0.5)),
                    Element::Circle(Circle::new(50.0, 60.0, 2.5, white).with_fill_opacity(0.3)),
                    Element::Circle(Circle::new(80.0, 30.0, 2.0, gold).with_fill_opacity(0.4)),
                ],
            })
            .push(Element::FullRect {
                fill: Paint::Color(self.palette.deep_space),
            })
            .push(Element::FullRect {
                fill: Paint::url(STAR_PATTERN_ID),
            });
        document
    }
}
