//! Nebula X brand asset generator
//!
//! This library builds the Nebula X logo mark, wordmark, logo variants,
//! background pattern and favicon as SVG documents from literal polygon
//! outlines, and writes them to an output directory.

// Module declarations
pub mod assets;
pub mod branding;
pub mod config;
pub mod generator;
pub mod glyphs;
pub mod models;
pub mod svg;
pub mod writer;

pub use generator::generate;
