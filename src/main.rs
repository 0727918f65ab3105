//! CLI entry point: load a file, optionally clean its column names, print a glimpse.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use data_glimpse::columns::{clean_column_names, CollisionPolicy, NormalizeOptions};
use data_glimpse::glimpse::{build_report, render_report, GlimpseOptions};
use data_glimpse::load::{load_frame, LoadOptions, TableFormat};
use tracing::{debug, info};

/// CLI-compatible input format enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Csv,
    Json,
    Ndjson,
    Parquet,
}

impl From<CliFormat> for TableFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Csv => TableFormat::Csv,
            CliFormat::Json => TableFormat::Json,
            CliFormat::Ndjson => TableFormat::NdJson,
            CliFormat::Parquet => TableFormat::Parquet,
        }
    }
}

/// Print a compact per-column preview of a tabular file.
#[derive(Debug, Parser)]
#[command(name = "data-glimpse", version, about)]
struct Args {
    /// Input file (.csv, .json, .ndjson/.jsonl, .parquet/.pq)
    path: PathBuf,

    /// Force the input format instead of inferring it from the extension
    #[arg(long, value_enum)]
    format: Option<CliFormat>,

    /// Rename columns to canonical snake-case labels before previewing
    #[arg(long)]
    clean_names: bool,

    /// Fail instead of renaming when two labels normalize to the same name
    #[arg(long, requires = "clean_names")]
    reject_collisions: bool,

    /// Values previewed per column
    #[arg(short = 'n', long, default_value_t = 5)]
    sample_size: usize,

    /// Preview a seeded random subset of rows instead of the first rows
    #[arg(long)]
    random: bool,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Display width of the column-name field
    #[arg(long, default_value_t = 25)]
    name_width: usize,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "error" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet);
    debug!(?args, "parsed arguments");

    let load_opts = LoadOptions {
        format: args.format.map(TableFormat::from),
        ..Default::default()
    };
    let mut df = load_frame(&args.path, &load_opts)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    info!(rows = df.height(), columns = df.width(), "loaded {}", args.path.display());

    if args.clean_names {
        let normalize_opts = NormalizeOptions {
            on_collision: if args.reject_collisions {
                CollisionPolicy::Reject
            } else {
                CollisionPolicy::Allow
            },
        };
        clean_column_names(&mut df, &normalize_opts).context("failed to clean column names")?;
    }

    let glimpse_opts = GlimpseOptions {
        sample_size: args.sample_size,
        random: args.random,
        seed: args.seed,
        name_width: args.name_width,
        ..Default::default()
    };
    let report = build_report(&df, &glimpse_opts);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).context("failed to write report")?;
        writeln!(out)?;
    } else {
        render_report(&report, &glimpse_opts, &mut out).context("failed to write report")?;
    }
    out.flush()?;
    Ok(())
}
