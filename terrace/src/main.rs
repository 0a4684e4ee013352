//! Renders a noise graph described in JSON5 to a greyscale heightmap.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{DEFAULT_CONFIG, RenderConfig};
use render::NoiseMap;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "terrace")]
#[command(about = "Render a composed noise graph to a PGM heightmap", long_about = None)]
struct Args {
    /// Graph description (JSON5). Uses the built-in terrain when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write the image
    #[arg(long, value_name = "PATH", default_value = "terrain.pgm")]
    output: PathBuf,

    /// Output width in pixels, overriding the configuration
    #[arg(long, value_name = "PIXELS")]
    width: Option<usize>,

    /// Output height in pixels, overriding the configuration
    #[arg(long, value_name = "PIXELS")]
    height: Option<usize>,
}

/// Installs the `fmt` subscriber and forwards library `log` records to it.
///
/// `RUST_LOG` overrides the default `info` filter.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the tracing subscriber")?;
    tracing_log::LogTracer::init().context("failed to bridge log records")
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::parse(DEFAULT_CONFIG).context("built-in configuration")?,
    };
    let width = args.width.unwrap_or(config.width);
    let height = args.height.unwrap_or(config.height);

    let (graph, root) = config.build_graph()?;
    tracing::info!(
        nodes = graph.len(),
        root = %config.root,
        width,
        height,
        "rendering"
    );

    let start = Instant::now();
    let map = NoiseMap::render(&graph, root, &config.region, width, height)
        .with_context(|| format!("failed to evaluate `{}`", config.root))?;
    let elapsed = start.elapsed();

    if let Some((lo, hi)) = map.bounds() {
        tracing::info!(
            samples = map.width() * map.height(),
            min = lo,
            max = hi,
            ?elapsed,
            "sampled heightmap"
        );
    }

    map.save_pgm(&args.output)?;
    tracing::info!(path = %args.output.display(), "wrote image");
    Ok(())
}
