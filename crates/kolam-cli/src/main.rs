//! Command line interface for kolamru
//!
//! Examples:
//!   kolam grid                                  # 5x5 loops, SVG on stdout
//!   kolam grid --preset checkerboard -o out.png # one of the stock layouts
//!   kolam grid --select border --symmetry rot   # outer ring, half-turn only
//!   kolam flower -o flower.svg                  # diamond lattice flower
//!   kolam flower --transparent -o flower.png    # no white backdrop

mod raster;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use kolamru::render::{defaults, svg::render_svg};
use kolamru::{FlowerConfig, GridConfig, KolamError, Selection, SvgOptions, SymmetrySet};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "kolam",
    version,
    about = "Draw kolam line art as SVG or PNG"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Output file; the extension picks the format (.svg or .png)
    #[clap(long, short = 'o', global = true)]
    output: Option<PathBuf>,

    /// PNG width in pixels
    #[clap(long, default_value_t = 800, global = true)]
    png_width: u32,

    /// Leave the background transparent instead of white
    #[clap(long, global = true)]
    transparent: bool,
}

impl Cli {
    fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            background: (!self.transparent).then(|| defaults::BACKGROUND.to_string()),
            ..SvgOptions::default()
        }
    }

    fn backdrop(&self) -> Option<tiny_skia::Color> {
        (!self.transparent).then_some(tiny_skia::Color::WHITE)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rounded loops over a rectangular dot grid
    Grid(GridArgs),
    /// Outer arcs and a central flower on a diamond lattice
    Flower(FlowerArgs),
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Start from a stock layout
    #[clap(long, value_parser = ["full-grid", "checkerboard", "diamond"])]
    preset: Option<String>,

    /// Dot rows
    #[clap(long)]
    rows: Option<u32>,

    /// Dot columns
    #[clap(long)]
    cols: Option<u32>,

    #[clap(long)]
    spacing: Option<f64>,

    /// Which cells get a loop: all, checker, border, diamond:<radius>
    #[clap(long)]
    select: Option<Selection>,

    /// Comma-separated mirrors: h, v, rot ("" for none)
    #[clap(long)]
    symmetry: Option<SymmetrySet>,

    /// Corner radius of each loop, at most half the spacing
    #[clap(long)]
    loop_radius: Option<f64>,

    /// Hide the lattice dots
    #[clap(long)]
    no_dots: bool,

    #[clap(long)]
    title: Option<String>,
}

impl GridArgs {
    fn into_config(self) -> GridConfig {
        let mut config = self
            .preset
            .as_deref()
            .and_then(GridConfig::preset)
            .unwrap_or_default();
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if let Some(select) = self.select {
            config.cell_selection = select;
        }
        if let Some(symmetry) = self.symmetry {
            config.symmetry = symmetry;
        }
        if let Some(radius) = self.loop_radius {
            config.loop_radius = radius;
        }
        if self.no_dots {
            config.show_dots = false;
        }
        if self.title.is_some() {
            config.title = self.title;
        }
        config
    }
}

#[derive(Args, Debug)]
struct FlowerArgs {
    #[clap(long)]
    spacing: Option<f64>,

    /// Dot radius in spacing units
    #[clap(long)]
    dot_size: Option<f64>,

    /// Lattice half-extent
    #[clap(long)]
    half_extent: Option<u32>,

    #[clap(long)]
    title: Option<String>,
}

impl FlowerArgs {
    fn into_config(self) -> FlowerConfig {
        let mut config = FlowerConfig::default();
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if let Some(dot_size) = self.dot_size {
            config.dot_size = dot_size;
        }
        if let Some(n) = self.half_extent {
            config.half_extent = n;
        }
        config.title = self.title;
        config
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = cli.svg_options();
    let backdrop = cli.backdrop();
    let scene = match cli.command {
        Command::Grid(args) => kolamru::grid_kolam(&args.into_config())?,
        Command::Flower(args) => kolamru::flower_kolam(&args.into_config())?,
    };
    let svg = render_svg(&scene, options);

    match cli.output {
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
        Some(path) => write_output(&path, &svg, cli.png_width, backdrop)?,
    }
    Ok(())
}

fn write_output(
    path: &Path,
    svg: &str,
    png_width: u32,
    backdrop: Option<tiny_skia::Color>,
) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let bytes = match ext.as_deref() {
        Some("svg") => svg.as_bytes().to_vec(),
        Some("png") => raster::svg_to_png(svg, png_width, backdrop)?,
        _ => bail!(
            "cannot tell the output format of {}; use .svg or .png",
            path.display()
        ),
    };
    fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote kolam");
    Ok(())
}

fn log_filter() -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(directives.as_deref())
}

/// `RUST_LOG` directives when set and valid, otherwise warnings only.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> ExitCode {
    // stdout may carry the SVG, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<KolamError>() {
                Some(kolam) => eprintln!("{:?}", miette::Report::new(kolam.clone())),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
