//! Generate command - renders the schedule page

use std::{io::Write, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use syllabus_core::{Config, Event};
use syllabus_generator::{BuildOutput, Builder};

/// Options for a single generate run.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions<'a> {
    /// YAML schedule to render.
    pub schedule: &'a Path,
    /// Optional configuration file.
    pub config: Option<&'a Path>,
    /// Shared server host override.
    pub host: Option<&'a str>,
    /// Shared server port override.
    pub port: Option<u16>,
    /// Write the page here instead of stdout.
    pub output: Option<&'a Path>,
}

/// Run the generate command.
///
/// The page is fully rendered before anything is written, so a failure never
/// leaves partial output behind.
pub fn run(options: &GenerateOptions<'_>) -> Result<()> {
    let output = build(options)?;

    match options.output {
        Some(path) => {
            std::fs::write(path, &output.html)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.html.as_bytes())
                .wrap_err("Failed to write page to stdout")?;
            stdout.flush()?;
        }
    }

    tracing::info!(stats = ?output.stats, "generate completed successfully");
    Ok(())
}

/// Load configuration and schedule, then run the build pipeline.
pub fn build(options: &GenerateOptions<'_>) -> Result<BuildOutput> {
    tracing::info!(
        schedule = %options.schedule.display(),
        config = ?options.config,
        host = ?options.host,
        port = ?options.port,
        "Starting generate"
    );

    let config = Config::load_or_default(options.config)
        .wrap_err("Failed to load configuration")?
        .with_shared_server(options.host, options.port);

    tracing::debug!(?config, "Loaded configuration");

    let event = Event::load(options.schedule).wrap_err("Failed to load schedule")?;

    let output = Builder::new(config).build(event).wrap_err("Build failed")?;

    if output.stats.unresolved_links > 0 {
        tracing::warn!(
            count = output.stats.unresolved_links,
            "some decks or labs are not under the publishing root and were not linked"
        );
    }

    Ok(output)
}
