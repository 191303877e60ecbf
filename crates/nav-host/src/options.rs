//! Navigation options understood by the engine

use serde::{Deserialize, Serialize};

/// Where a pop-up-to instruction stops
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "template", rename_all = "snake_case")]
pub enum PopUpTarget {
    /// Topmost entry with this path template
    Template(String),
    /// The table's start destination
    StartDestination,
    /// Below every entry: pops the whole back stack
    Root,
}

/// Pop entries off the back stack before navigating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopUpTo {
    /// Entry to pop up to
    pub target: PopUpTarget,
    /// Also pop the target entry itself
    pub inclusive: bool,
    /// Keep the popped entries so a later navigation can restore them
    pub save_state: bool,
}

/// Options passed through to the engine with each navigation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOptions {
    /// Reuse the top entry when it is already the target destination
    #[serde(default)]
    pub single_top: bool,
    /// Restore a previously saved stack for the target destination
    #[serde(default)]
    pub restore_state: bool,
    /// Pop entries before navigating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop_up_to: Option<PopUpTo>,
}

impl NavOptions {
    /// Plain push navigation
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that drop every prior back-stack entry
    pub fn clearing_history() -> Self {
        Self::new().pop_up_to(PopUpTarget::Root, true, false)
    }

    /// Enable or disable single-top launch
    pub fn launch_single_top(mut self, enabled: bool) -> Self {
        self.single_top = enabled;
        self
    }

    /// Enable or disable state restoration
    pub fn restore_state(mut self, enabled: bool) -> Self {
        self.restore_state = enabled;
        self
    }

    /// Pop up to `target` before navigating
    pub fn pop_up_to(mut self, target: PopUpTarget, inclusive: bool, save_state: bool) -> Self {
        self.pop_up_to = Some(PopUpTo {
            target,
            inclusive,
            save_state,
        });
        self
    }

    /// Whether these options drop the whole back stack
    pub fn clears_history(&self) -> bool {
        matches!(
            self.pop_up_to,
            Some(PopUpTo {
                target: PopUpTarget::Root,
                ..
            })
        )
    }
}
