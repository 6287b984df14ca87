//! Igor Plot Operator - command line entry point
//!
//! Loads a figure (JSON, or the built-in demo) and writes an Igor Text file
//! that rebuilds it when opened in Igor Pro.
//!
//! Usage:
//! ```bash
//! igor_plot_operator --figure figure.json --output figure.itx
//! igor_plot_operator --demo > demo.itx
//! RUST_LOG=debug igor_plot_operator --demo --output demo.itx
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use igor_plot_operator::figure::demo;
use igor_plot_operator::igor::ItxSession;
use igor_plot_operator::{convert, ConverterConfig, Figure};

#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Convert a matplotlib-style figure into an Igor Text file
#[derive(Parser, Debug)]
#[command(name = "igor_plot_operator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Figure description (JSON)
    #[arg(short, long, conflicts_with = "demo")]
    figure: Option<PathBuf>,

    /// Use the built-in demonstration figure
    #[arg(long)]
    demo: bool,

    /// Converter configuration (JSON); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output .itx file; standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every emitted command
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let figure = load_figure(&cli)?;
    let config = match &cli.config {
        Some(path) => ConverterConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConverterConfig::default(),
    };

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut session = ItxSession::new(writer)?;
    let legend_waves = convert(&figure, &mut session, &config).context("Conversion failed")?;

    tracing::info!(
        waves = session.waves_written(),
        commands = session.commands_written(),
        legend_traces = legend_waves.len(),
        "Igor Text written"
    );
    session.finish()?;

    Ok(())
}

fn load_figure(cli: &Cli) -> Result<Figure> {
    if cli.demo {
        return Ok(demo::sample_figure()?);
    }
    match &cli.figure {
        Some(path) => Figure::from_path(path)
            .with_context(|| format!("Failed to load figure {}", path.display())),
        None => bail!("Either --figure <FILE> or --demo is required"),
    }
}

/// Logs go to stderr so stdout can carry the Igor Text output
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
