//! Build orchestration.
//!
//! Runs the page pipeline for one event: resolve links, assign the shared
//! server roster, render.

use std::time::Instant;

use syllabus_core::{Config, Event};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    html::{HtmlError, HtmlGenerator},
    links::{content_path, resolve_links},
    roster::assign_roster,
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of schedule periods.
    pub periods: usize,

    /// Number of sessions (items with a name).
    pub sessions: usize,

    /// Number of break items.
    pub breaks: usize,

    /// Decks that resolved to a published link.
    pub deck_links: usize,

    /// Labs that resolved to a published link.
    pub lab_links: usize,

    /// Non-empty deck or lab paths that did not resolve.
    pub unresolved_links: usize,

    /// Number of students on the roster.
    pub students: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

impl BuildStats {
    fn collect(event: &Event) -> Self {
        let mut stats = Self {
            periods: event.schedule.len(),
            students: event.students.len(),
            ..Self::default()
        };

        for item in event.items() {
            if item.is_break() {
                stats.breaks += 1;
            } else {
                stats.sessions += 1;
            }
            if !item.deck_link_path.is_empty() {
                stats.deck_links += 1;
            }
            if !item.lab_link_path.is_empty() {
                stats.lab_links += 1;
            }
            for source in [&item.deck_source_path, &item.lab_source_path] {
                if !source.is_empty() && content_path(source).is_none() {
                    stats.unresolved_links += 1;
                }
            }
        }

        stats
    }
}

/// Output of a build: the rendered page and its statistics.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub html: String,
    pub stats: BuildStats,
}

/// Page builder that orchestrates the pipeline.
#[derive(Debug)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full pipeline over a freshly loaded event.
    pub fn build(&self, event: Event) -> Result<BuildOutput> {
        let start = Instant::now();
        info!(title = %event.title, "starting build");

        // 1. Resolve deck and lab links
        let event = resolve_links(event);
        debug!("links resolved");

        // 2. Assign logins on the shared server
        let server = &self.config.shared_server;
        let event = assign_roster(event, &server.host, server.port);
        debug!(host = %server.host, port = server.port, "roster assigned");

        // 3. Render
        let generator = HtmlGenerator::new(self.config.page.clone());
        let html = generator.generate(&event)?;

        let mut stats = BuildStats::collect(&event);
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            periods = stats.periods,
            sessions = stats.sessions,
            students = stats.students,
            bytes = html.len(),
            "build complete"
        );

        Ok(BuildOutput { html, stats })
    }
}
