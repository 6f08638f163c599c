//! Branding and product identity.
//!
//! This module centralizes the product name, binary name, default output
//! location and shared definition ids so a rename only touches one place.

/// The human-readable product name, also the text rendered by the wordmark.
pub const PRODUCT_NAME: &str = "NEBULA X";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "nebulagen";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Procedural generator for the Nebula X SVG brand assets";

/// Output directory used when neither `--out-dir` nor a config file overrides it.
///
/// Relative to the current working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "nebula-x-assets";

/// Id of the purple-to-cyan gradient referenced by the mark.
pub const GRADIENT_ID: &str = "nebula_gradient";

/// Id of the star-field tile referenced by the background pattern.
pub const STAR_PATTERN_ID: &str = "stars";
