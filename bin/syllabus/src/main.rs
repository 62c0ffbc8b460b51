//! Syllabus CLI
//!
//! Renders a training event schedule into a static HTML page.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use syllabus::cmd::generate::{self, GenerateOptions};

/// Command-line interface for Syllabus.
#[derive(Parser)]
#[command(
    name = "syllabus",
    version,
    about = "Generate a static HTML page for a training event schedule"
)]
struct Cli {
    /// Path to the YAML schedule file
    schedule: PathBuf,

    /// Host of the shared student server
    #[arg(long)]
    host: Option<String>,

    /// SSH port of the shared student server [default: 22]
    #[arg(long)]
    port: Option<u16>,

    /// Path to configuration file (defaults to ./syllabus.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the page to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    syllabus::init_tracing(cli.verbose);

    generate::run(&GenerateOptions {
        schedule: &cli.schedule,
        config: cli.config.as_deref(),
        host: cli.host.as_deref(),
        port: cli.port,
        output: cli.output.as_deref(),
    })
}
