//! Syllabus Core Library
//!
//! Event model, schedule loading, configuration, and error handling for the
//! Syllabus training page generator.

pub mod config;
pub mod error;
pub mod event;

pub use config::{Config, DEFAULT_SSH_PORT, PageConfig, SharedServerConfig};
pub use error::{CoreError, Result};
pub use event::{Event, EventPeriod, ScheduleItem, Student};
