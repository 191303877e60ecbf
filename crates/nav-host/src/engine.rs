//! The navigation engine contract

use std::fmt;

use routing::{RouteArgs, RouteError};
use uuid::Uuid;

use crate::options::NavOptions;

/// Path-matching traversal primitive
///
/// Implementations own the back stack. Unmatched paths are reported as
/// [`RouteError::Unmatched`] and callers pass them through untouched.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationEngine {
    /// Navigate to a resolved path
    fn navigate(&mut self, path: &str, options: &NavOptions) -> Result<(), RouteError>;
}

/// Unique id of one back-stack entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What a listener learns about a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationInfo {
    /// Registered path template
    pub template: String,
    /// Destination key
    pub key: String,
    /// Display label
    pub label: String,
}

/// Notification sent whenever the current destination changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationChanged {
    /// Entry that was current before, if any
    pub previous: Option<EntryId>,
    /// Destination now current
    pub destination: DestinationInfo,
    /// Arguments of the now-current entry
    pub arguments: RouteArgs,
}
