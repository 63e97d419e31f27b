use clap::Parser;
use px2vec::{Coverage, Paint, SvgOptions, VectorizeConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "px2vec", about = "Pixel art to color-keyed SVG paths")]
struct Cli {
    /// Input image path (PNG, GIF, BMP, ...)
    #[arg(short, long)]
    input: PathBuf,

    /// Output SVG path
    #[arg(short, long)]
    output: PathBuf,

    /// Output size multiplier (viewBox stays in pixels)
    #[arg(long, default_value = "1")]
    scale: u32,

    /// Paint areas as filled rectangles instead of strokes
    #[arg(long)]
    fill: bool,

    /// Emit every cell of each area, not just its border
    #[arg(long)]
    solid: bool,

    /// Background color to skip, as RRGGBBAA hex
    #[arg(
        long,
        default_value = "00000000",
        value_parser = parse_rgba,
        conflicts_with = "keep_background"
    )]
    background: u32,

    /// Emit the background area too
    #[arg(long)]
    keep_background: bool,

    /// Process areas on a single thread
    #[arg(long)]
    serial: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "px2vec=debug" } else { "px2vec=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let background = if cli.keep_background {
        None
    } else {
        Some(cli.background)
    };

    let config = VectorizeConfig {
        background,
        coverage: if cli.solid {
            Coverage::Solid
        } else {
            Coverage::Border
        },
        parallel: !cli.serial,
        ..VectorizeConfig::default()
    };
    let options = SvgOptions {
        scale: cli.scale,
        paint: if cli.fill { Paint::Fill } else { Paint::Stroke },
    };

    let t_start = Instant::now();
    let grid = px2vec::bitmap::load(&cli.input)?;
    let result = px2vec::vectorize(&grid, &config)?;
    px2vec::output::write_svg(&cli.output, result.width, result.height, &result.areas, &options)?;

    let instructions: usize = result.areas.iter().map(|a| a.instructions.len()).sum();
    eprintln!(
        "  {}x{} px \u{2192} {} areas \u{00b7} {} instructions \u{00b7} {} overruns  ({}ms)",
        result.width,
        result.height,
        result.areas.len(),
        instructions,
        result.overruns.len(),
        t_start.elapsed().as_millis(),
    );
    eprintln!("  \u{2713} {}", cli.output.display());

    Ok(())
}

/// Parse `RRGGBBAA` (optionally `#`-prefixed) into a packed color.
fn parse_rgba(value: &str) -> Result<u32, String> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected 8 hex digits (RRGGBBAA), got '{}'", value));
    }
    u32::from_str_radix(hex, 16).map_err(|e| e.to_string())
}
