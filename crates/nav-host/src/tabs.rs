//! Bottom navigation wiring
//!
//! Every tab navigates with the same options: launch single top, restore the
//! tab's saved stack, and pop up to the start destination while saving the
//! popped entries. Switching away from a tab and back therefore returns to
//! where the user left it.

use routing::RouteError;

use crate::engine::NavigationEngine;
use crate::navigator::Navigator;
use crate::options::{NavOptions, PopUpTarget};

/// One bottom-navigation item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Item identifier reported by the UI
    pub id: String,
    /// Display label
    pub label: String,
    /// Path of the tab's root destination
    pub path: String,
}

impl TabItem {
    /// Create a tab item
    pub fn new(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Bottom navigation bar state
#[derive(Debug, Clone)]
pub struct BottomNavigation {
    items: Vec<TabItem>,
    options: NavOptions,
    selected: Option<usize>,
}

impl BottomNavigation {
    /// Create a bar; the first item starts selected
    pub fn new(items: Vec<TabItem>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self {
            items,
            options: Self::tab_options(),
            selected,
        }
    }

    /// Options used for every tab navigation
    pub fn tab_options() -> NavOptions {
        NavOptions::new()
            .launch_single_top(true)
            .restore_state(true)
            .pop_up_to(PopUpTarget::StartDestination, false, true)
    }

    /// All items in display order
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// Currently highlighted item
    pub fn selected(&self) -> Option<&TabItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Handle a tap on item `id`
    ///
    /// Returns `Ok(false)` when no item has that id.
    pub fn on_item_selected<E: NavigationEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        id: &str,
    ) -> Result<bool, RouteError> {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return Ok(false);
        };
        Navigator::new(engine).go_to(&self.items[index].path, &self.options)?;
        self.selected = Some(index);
        Ok(true)
    }

    /// Highlight the item whose root is `template`, if any
    ///
    /// Destinations that are not tab roots leave the selection alone.
    pub fn sync_selection(&mut self, template: &str) {
        if let Some(index) = self.items.iter().position(|item| item.path == template) {
            self.selected = Some(index);
        }
    }
}
