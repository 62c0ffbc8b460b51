//! Syllabus Generator Library
//!
//! Turns a loaded training event into a publishable HTML page.
//!
//! # Modules
//!
//! - [`links`] - Deck and lab link resolution
//! - [`roster`] - Shared-server login assignment
//! - [`html`] - HTML page rendering
//! - [`build`] - Pipeline orchestration

pub mod build;
pub mod html;
pub mod links;
pub mod roster;

pub use build::{BuildError, BuildOutput, BuildStats, Builder};
pub use html::{HtmlError, HtmlGenerator};
pub use links::{LinkKind, PUBLISH_PREFIX, UnresolvedLink, resolve_links, unresolved_links};
pub use roster::assign_roster;
