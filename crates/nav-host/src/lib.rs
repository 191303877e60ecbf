//! Navigation host for the navigation demo
//!
//! This crate turns UI intents into navigation-engine calls and provides a
//! reference in-process engine that owns the route table and the back stack.
//!
//! # Modules
//!
//! - [`options`] - Declarative navigation options (single top, save/restore, pop up to)
//! - [`engine`] - The engine contract and destination-changed events
//! - [`controller`] - Back-stack engine over a route table
//! - [`navigator`] - Stateless façade used by UI event handlers
//! - [`tabs`] - Bottom navigation wiring
//! - [`app_bar`] - Title tracking from destination changes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app_bar;
pub mod controller;
pub mod engine;
pub mod navigator;
pub mod options;
pub mod tabs;

pub use app_bar::AppBar;
pub use controller::{BackStackEntry, ListenerId, NavController};
pub use engine::{DestinationChanged, DestinationInfo, EntryId, NavigationEngine};
pub use navigator::Navigator;
pub use options::{NavOptions, PopUpTarget, PopUpTo};
pub use tabs::{BottomNavigation, TabItem};
