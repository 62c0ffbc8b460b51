//! Training event model and schedule loading.
//!
//! An [`Event`] is decoded once from a YAML schedule file. Derived fields
//! (published links, student logins and connection details) are never read
//! from input; they are filled in later by the generator.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// A complete training event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event title.
    pub title: String,

    /// Where the event takes place.
    pub location: String,

    /// Schedule periods in presentation order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: Vec<EventPeriod>,

    /// Student roster.
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<Student>,
}

/// One day or block within the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPeriod {
    /// Period label (e.g. "Day 1").
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,

    /// Items in presentation order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ScheduleItem>,
}

/// A single session, or a visual break when `name` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Markdown source of the slide deck.
    #[serde(rename = "deck", default, deserialize_with = "null_as_default")]
    pub deck_source_path: String,

    /// Published deck URL, empty when the deck does not resolve.
    #[serde(skip_deserializing)]
    pub deck_link_path: String,

    /// Markdown source of the lab.
    #[serde(rename = "lab", default, deserialize_with = "null_as_default")]
    pub lab_source_path: String,

    /// Published lab URL, empty when the lab does not resolve.
    #[serde(skip_deserializing)]
    pub lab_link_path: String,
}

/// A student on the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(skip_deserializing)]
    pub login: String,

    #[serde(skip_deserializing)]
    pub host: String,

    #[serde(skip_deserializing)]
    pub ssh_port: u16,
}

impl Event {
    /// Load an event from a YAML schedule file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::source_unavailable(path, e))?;
        let event = Self::from_yaml(&content).map_err(|e| CoreError::malformed_source(path, e))?;

        debug!(
            path = %path.display(),
            periods = event.schedule.len(),
            students = event.students.len(),
            "loaded schedule"
        );
        Ok(event)
    }

    /// Decode an event from a YAML document.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Iterate over every schedule item across all periods, in order.
    pub fn items(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.schedule.iter().flat_map(|period| period.items.iter())
    }
}

impl EventPeriod {
    /// Whether the period has nothing scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ScheduleItem {
    /// Whether this item is a visual break rather than a session.
    #[must_use]
    pub fn is_break(&self) -> bool {
        self.name.is_empty()
    }
}

impl Student {
    /// Mailbox form `Name <email>`, or `None` when there is no email.
    #[must_use]
    pub fn mailbox(&self) -> Option<String> {
        (!self.email.is_empty()).then(|| format!("{} <{}>", self.name, self.email))
    }
}

/// Treat an explicit YAML `null` (a key with no value) like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
