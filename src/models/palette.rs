//! The Nebula X brand color palette.
//!
//! Every asset pulls its colors from a [`Palette`] value owned by the
//! configuration. The palette is never mutated after startup.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Semantic color names used across the brand assets.
///
/// Deserialized from the `[palette]` table of a config file. Missing entries
/// fall back to the brand defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Near-black background of the star field.
    pub deep_space: RgbColor,
    /// Dark text color for light backgrounds.
    pub space_navy: RgbColor,
    /// Start of the mark gradient.
    pub nebula_purple: RgbColor,
    /// End of the mark gradient, also used for small accents.
    pub cosmic_cyan: RgbColor,
    /// Accent color for stars and ornaments.
    pub stellar_gold: RgbColor,
    /// Light text color for dark backgrounds.
    pub starlight_white: RgbColor,
    /// Success accent (reserved for UI assets).
    pub aurora_green: RgbColor,
    /// Error accent (reserved for UI assets).
    pub mars_red: RgbColor,
}

impl Palette {
    /// The brand palette as shipped.
    pub const BRAND: Self = Self {
        deep_space: RgbColor::new(0x0B, 0x0D, 0x17),
        space_navy: RgbColor::new(0x11, 0x18, 0x27),
        nebula_purple: RgbColor::new(0x7C, 0x3A, 0xED),
        cosmic_cyan: RgbColor::new(0x06, 0xB6, 0xD4),
        stellar_gold: RgbColor::new(0xF5, 0x9E, 0x0B),
        starlight_white: RgbColor::new(0xF1, 0xF5, 0xF9),
        aurora_green: RgbColor::new(0x10, 0xB9, 0x81),
        mars_red: RgbColor::new(0xEF, 0x44, 0x44),
    };

    /// Returns every entry with its display name, in palette order.
    pub fn entries(&self) -> [(&'static str, RgbColor); 8] {
        [
            ("Deep Space", self.deep_space),
            ("Space Navy", self.space_navy),
            ("Nebula Purple", self.nebula_purple),
            ("Cosmic Cyan", self.cosmic_cyan),
            ("Stellar Gold", self.stellar_gold),
            ("Starlight White", self.starlight_white),
            ("Aurora Green", self.aurora_green),
            ("Mars Red", self.mars_red),
        ]
    }

    /// Looks up a color by its display name ("Stellar Gold") or field name
    /// ("stellar_gold"), ignoring case.
    pub fn get(&self, name: &str) -> Option<RgbColor> {
        let wanted = name.trim().replace('_', " ");
        self.entries()
            .into_iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(&wanted))
            .map(|(_, color)| color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::BRAND
    }
}
