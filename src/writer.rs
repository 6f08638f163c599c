//! Writing generated assets to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::assets::Asset;

/// Writes serialized assets into one output directory.
///
/// Plain synchronous writes: no temp files, no retries. A failed write stops
/// the caller and files already written stay where they are.
#[derive(Debug, Clone)]
pub struct AssetWriter {
    output_dir: PathBuf,
}

impl AssetWriter {
    /// Creates a writer targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The target directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Creates the output directory (and parents) if it does not exist.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.output_dir.exists() {
            debug!("creating output directory {}", self.output_dir.display());
        }
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })
    }

    /// Serializes and writes one asset, overwriting any existing file.
    ///
    /// Returns the path written.
    pub fn write(&self, asset: &Asset) -> Result<PathBuf> {
        let path = self.output_dir.join(asset.filename());
        let markup = asset.document.to_markup();

        fs::write(&path, &markup)
            .with_context(|| format!("Failed to write asset file: {}", path.display()))?;

        debug!("wrote {} bytes to {}", markup.len(), path.display());
        Ok(path)
    }

    /// Writes every asset in order, printing one confirmation line per file.
    ///
    /// Stops at the first failure.
    pub fn write_all(&self, assets: &[Asset]) -> Result<Vec<PathBuf>> {
        self.ensure_dir()?;

        let mut written = Vec::with_capacity(assets.len());
        for asset in assets {
            written.push(self.write(asset)?);
            println!("Created {}", asset.filename());
        }
        Ok(written)
    }
}
