use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use packet_diagram::observe::TracingObserver;
use packet_diagram::{load_definition, render_with, Format};

/// Render RFC-style packet diagrams from a YAML or TOML definition
#[derive(Parser)]
#[command(name = "packet-diagram", version)]
struct Args {
    /// Definition file (YAML, or TOML when the extension is .toml)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (standard output when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Standalone SVG document
    Svg,
    /// Drawing primitives as JSON
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let config = load_definition(file, Format::from_path(&args.input))
        .with_context(|| format!("loading definition from {}", args.input.display()))?;
    tracing::info!(
        fields = config.fields.len(),
        bits = config.total_bits(),
        rows = config.total_rows(),
        "loaded definition"
    );

    let scene = render_with(&config, &mut TracingObserver).context("laying out diagram")?;
    let mut body = match args.format {
        OutputFormat::Svg => scene.to_svg().context("writing SVG")?,
        OutputFormat::Json => serde_json::to_string_pretty(&scene).context("serializing scene")?,
    };
    if !body.ends_with('\n') {
        body.push('\n');
    }

    write_output(args.output.as_deref(), &body)
}

fn write_output(path: Option<&Path>, body: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote diagram");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(body.as_bytes()).context("writing to stdout")?;
            stdout.flush().context("flushing stdout")
        }
    }
}
