//! App bar title bound to destination changes

use std::sync::Arc;

use parking_lot::RwLock;

use crate::controller::{ListenerId, NavController};

/// Title shown above the current screen
///
/// Clones share the same title.
#[derive(Debug, Clone)]
pub struct AppBar {
    title: Arc<RwLock<String>>,
    default_title: String,
}

impl AppBar {
    /// Create an app bar showing `default_title` until bound
    pub fn new(default_title: impl Into<String>) -> Self {
        let default_title = default_title.into();
        Self {
            title: Arc::new(RwLock::new(default_title.clone())),
            default_title,
        }
    }

    /// Current title
    pub fn title(&self) -> String {
        self.title.read().clone()
    }

    /// Follow the controller's current destination label
    ///
    /// Destinations without a label show the default title.
    pub fn bind<R>(&self, controller: &mut NavController<R>) -> ListenerId {
        let title = Arc::clone(&self.title);
        let default_title = self.default_title.clone();
        controller.add_on_destination_changed_listener(move |event| {
            let label = &event.destination.label;
            *title.write() = if label.is_empty() {
                default_title.clone()
            } else {
                label.clone()
            };
        })
    }
}
