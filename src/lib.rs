//! Navigation demo application
//!
//! Three bottom-navigation tabs (home, dashboard, notifications) and a user
//! details screen reached from home with a first and last name. Screens render
//! as text; navigation runs on the in-process controller from `nav-host`.
//!
//! # Modules
//!
//! - [`destinations`] - The closed set of screens and their routes
//! - [`screens`] - Text renderers and screen actions
//! - [`graph`] - Route table setup
//! - [`activity`] - Main window host and user commands
//! - [`config`] - JSON configuration
//! - [`logging`] - Tracing subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod activity;
pub mod config;
pub mod destinations;
pub mod graph;
pub mod logging;
pub mod screens;

pub use activity::{Command, CommandError, MainActivity};
pub use config::AppConfig;
pub use destinations::{Screen, ScreenKind};
pub use graph::setup_graph;

/// Bundled Fluent resources; the first entry is the fallback locale
pub const LOCALE_SOURCES: [(&str, &str); 2] = [
    ("en-US", include_str!("../locales/en-US/main.ftl")),
    ("es", include_str!("../locales/es/main.ftl")),
];
