//! Nebula X brand asset generator
//!
//! Writes the mark, wordmark, logos, background pattern and favicon as SVG
//! files. Run without arguments to generate everything into `nebula-x-assets/`.
//!
//! # Usage
//!
//! ```bash
//! # Generate every asset with the brand palette
//! nebulagen
//!
//! # Write elsewhere, or only some assets
//! nebulagen --out-dir dist/brand --only mark --only favicon
//!
//! # Override colors from a config file
//! nebulagen --config brand.toml
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nebulagen::assets::AssetKind;
use nebulagen::branding::APP_DESCRIPTION;
use nebulagen::config::Config;

/// Nebula X brand asset generator
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Output directory (defaults to ./nebula-x-assets)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// TOML file overriding the output directory and palette
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only generate the named asset (repeatable), e.g. `mark` or `favicon.svg`
    #[arg(long, value_name = "NAME")]
    only: Vec<AssetKind>,

    /// List the asset filenames and exit
    #[arg(long)]
    list: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        for kind in AssetKind::ALL {
            println!("{}", kind.filename());
        }
        return Ok(());
    }

    // Explicit flags win over the config file, which wins over defaults
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(out_dir) = cli.out_dir {
        config = config.with_output_dir(out_dir);
    }
    config.validate()?;
    debug!("effective configuration: {:?}", config);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    nebulagen::generate(&config, &cli.only)?;

    Ok(())
}
