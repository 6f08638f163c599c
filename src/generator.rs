//! End-to-end generation: assemble the requested assets and write them out.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::assets::{AssetAssembler, AssetKind};
use crate::config::Config;
use crate::writer::AssetWriter;

/// Generates `kinds` (every asset when empty) into the configured directory.
///
/// Output depends only on the configuration: no timestamps or random ids, so
/// repeated runs rewrite byte-identical files. Returns the paths written.
pub fn generate(config: &Config, kinds: &[AssetKind]) -> Result<Vec<PathBuf>> {
    let kinds: &[AssetKind] = if kinds.is_empty() {
        &AssetKind::ALL
    } else {
        kinds
    };

    let assets = AssetAssembler::new(config).build_many(kinds)?;
    let writer = AssetWriter::new(&config.output_dir);
    let written = writer.write_all(&assets)?;

    info!(
        "generated {} assets in {}",
        written.len(),
        writer.output_dir().display()
    );
    Ok(written)
}
