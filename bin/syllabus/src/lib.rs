//! Syllabus CLI Library
//!
//! Command implementations and logging setup for the `syllabus` binary.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use syllabus::cmd::generate::{self, GenerateOptions};
//!
//! generate::run(&GenerateOptions {
//!     schedule: Path::new("schedule.yaml"),
//!     config: None,
//!     host: Some("lab.example.com"),
//!     port: None,
//!     output: None,
//! })
//! .unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use syllabus_core::{Config, Event};
pub use syllabus_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// Logs are written to stderr so they never mix with the page on stdout.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
