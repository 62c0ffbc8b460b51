//! Link resolution for schedule items.
//!
//! Decks and labs are written as markdown under the publishing root and
//! served two different ways: a deck becomes a directory with an index page,
//! a lab is opened through the labs viewer by anchor.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use syllabus_core::{Event, EventPeriod, ScheduleItem};
use tracing::warn;

/// Publishing root every resolvable source path starts with.
pub const PUBLISH_PREFIX: &str = "public/";

static SOURCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}(.+)\.md", regex::escape(PUBLISH_PREFIX)))
        .expect("source path pattern is a valid regex")
});

/// Which derived link of an item a source path feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Deck,
    Lab,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deck => f.write_str("deck"),
            Self::Lab => f.write_str("lab"),
        }
    }
}

/// A non-empty source path that does not follow the publishing convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedLink {
    pub period: String,
    pub item: String,
    pub kind: LinkKind,
    pub source_path: String,
}

/// Extract the content path between the first publishing prefix and the last
/// `.md` after it.
#[must_use]
pub fn content_path(source: &str) -> Option<&str> {
    SOURCE_PATTERN
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Published URL of a slide deck, or an empty string if it does not resolve.
#[must_use]
pub fn deck_link(source: &str) -> String {
    content_path(source)
        .map(|path| format!("/{path}/index.html"))
        .unwrap_or_default()
}

/// Published URL of a lab, or an empty string if it does not resolve.
#[must_use]
pub fn lab_link(source: &str) -> String {
    content_path(source)
        .map(|path| format!("/labs#!{path}.md"))
        .unwrap_or_default()
}

/// Return the item with both derived links filled from its source paths.
#[must_use]
pub fn resolve_item(item: ScheduleItem) -> ScheduleItem {
    ScheduleItem {
        deck_link_path: deck_link(&item.deck_source_path),
        lab_link_path: lab_link(&item.lab_source_path),
        ..item
    }
}

/// Return the event with every schedule item's links resolved.
///
/// Paths that do not resolve leave the link empty and are logged as
/// warnings; they are never an error.
#[must_use]
pub fn resolve_links(event: Event) -> Event {
    for link in unresolved_links(&event) {
        warn!(
            period = %link.period,
            item = %link.item,
            kind = %link.kind,
            source = %link.source_path,
            "source path is not under the publishing root, no link generated"
        );
    }

    let schedule = event
        .schedule
        .into_iter()
        .map(|period| EventPeriod {
            items: period.items.into_iter().map(resolve_item).collect(),
            ..period
        })
        .collect();

    Event { schedule, ..event }
}

/// List every non-empty deck or lab path that does not resolve.
#[must_use]
pub fn unresolved_links(event: &Event) -> Vec<UnresolvedLink> {
    let mut unresolved = Vec::new();

    for period in &event.schedule {
        for item in &period.items {
            let sources = [
                (LinkKind::Deck, &item.deck_source_path),
                (LinkKind::Lab, &item.lab_source_path),
            ];
            for (kind, source) in sources {
                if !source.is_empty() && content_path(source).is_none() {
                    unresolved.push(UnresolvedLink {
                        period: period.label.clone(),
                        item: item.name.clone(),
                        kind,
                        source_path: source.clone(),
                    });
                }
            }
        }
    }

    unresolved
}
