//! Reference back-stack engine
//!
//! [`NavController`] owns the route table and an ordered back stack. It
//! implements the options from [`crate::options`] the way a platform engine
//! does: pop up to a target (optionally saving what was popped), restore a
//! saved stack, reuse a single-top entry, or push.

use std::collections::HashMap;

use routing::{RouteArgs, RouteEntry, RouteError, RouteTable};

use crate::engine::{DestinationChanged, DestinationInfo, EntryId, NavigationEngine};
use crate::options::{NavOptions, PopUpTarget, PopUpTo};

// =============================================================================
// Back Stack Entries
// =============================================================================

/// One visited destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStackEntry {
    id: EntryId,
    destination: DestinationInfo,
    arguments: RouteArgs,
}

impl BackStackEntry {
    fn new<R>(route: &RouteEntry<R>, arguments: RouteArgs) -> Self {
        Self {
            id: EntryId::new(),
            destination: DestinationInfo {
                template: route.template().to_string(),
                key: route.key().to_string(),
                label: route.label().to_string(),
            },
            arguments,
        }
    }

    /// Unique id of this entry
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Destination shown by this entry
    pub fn destination(&self) -> &DestinationInfo {
        &self.destination
    }

    /// Path template of the destination
    pub fn template(&self) -> &str {
        &self.destination.template
    }

    /// Arguments the destination was opened with
    pub fn arguments(&self) -> &RouteArgs {
        &self.arguments
    }
}

/// Handle for removing a destination-changed listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&DestinationChanged)>;

// =============================================================================
// Controller
// =============================================================================

/// Navigation engine owning the route table and the back stack
pub struct NavController<R> {
    table: RouteTable<R>,
    back_stack: Vec<BackStackEntry>,
    /// Saved stacks by id
    saved_stacks: HashMap<u64, Vec<BackStackEntry>>,
    /// Saved stack id by the template of each entry it holds
    saved_by_template: HashMap<String, u64>,
    next_saved_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl<R> NavController<R> {
    /// Create a controller showing the table's start destination
    pub fn new(table: RouteTable<R>) -> Self {
        let start = table.start_destination();
        let root = BackStackEntry::new(start, start.default_args());
        tracing::info!(
            "Navigation graph ready with {} destinations, start {}",
            table.len(),
            root.template()
        );

        Self {
            table,
            back_stack: vec![root],
            saved_stacks: HashMap::new(),
            saved_by_template: HashMap::new(),
            next_saved_id: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// The route table this controller navigates
    pub fn table(&self) -> &RouteTable<R> {
        &self.table
    }

    /// Current (top) entry
    pub fn current(&self) -> Option<&BackStackEntry> {
        self.back_stack.last()
    }

    /// All entries, bottom to top
    pub fn back_stack(&self) -> &[BackStackEntry] {
        &self.back_stack
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Whether a back navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.back_stack.len() > 1
    }

    /// Whether a saved stack exists for `template`
    pub fn has_saved_state(&self, template: &str) -> bool {
        self.saved_by_template.contains_key(template)
    }

    /// Renderer and arguments of the current entry
    pub fn render_current(&self) -> Option<(&R, &RouteArgs)> {
        let entry = self.current()?;
        let route = self.table.get(entry.template())?;
        Some((route.renderer(), entry.arguments()))
    }

    /// Pop the top entry (returns true if popped, false if at root)
    pub fn pop_back(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            return false;
        }
        let popped = self.back_stack.pop();
        tracing::debug!(
            "Popped {}",
            popped.as_ref().map(BackStackEntry::template).unwrap_or_default()
        );
        self.dispatch(popped.map(|entry| entry.id));
        true
    }

    /// Register a destination-changed listener
    ///
    /// The listener is invoked right away with the current destination.
    pub fn add_on_destination_changed_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&DestinationChanged) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;

        let mut listener: Listener = Box::new(listener);
        if let Some(event) = self.current_event(None) {
            listener(&event);
        }
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener (returns true if it was registered)
    pub fn remove_on_destination_changed_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn current_event(&self, previous: Option<EntryId>) -> Option<DestinationChanged> {
        self.current().map(|entry| DestinationChanged {
            previous,
            destination: entry.destination.clone(),
            arguments: entry.arguments.clone(),
        })
    }

    fn dispatch(&mut self, previous: Option<EntryId>) {
        let Some(event) = self.current_event(previous) else {
            return;
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    fn pop_up_to(&mut self, pop: &PopUpTo) {
        let cut = match &pop.target {
            PopUpTarget::Root => Some(0),
            PopUpTarget::StartDestination => {
                let template = self.table.start_destination().template().to_string();
                self.position_of(&template, pop.inclusive)
            }
            PopUpTarget::Template(template) => self.position_of(template, pop.inclusive),
        };
        let Some(cut) = cut else {
            tracing::debug!("Pop up to {:?} ignored: not on the back stack", pop.target);
            return;
        };

        let popped: Vec<BackStackEntry> = self.back_stack.drain(cut..).collect();
        if pop.save_state && !popped.is_empty() {
            let id = self.next_saved_id;
            self.next_saved_id += 1;
            for entry in &popped {
                self.saved_by_template.insert(entry.template().to_string(), id);
            }
            tracing::debug!("Saved {} entries as stack {}", popped.len(), id);
            self.saved_stacks.insert(id, popped);
        }
    }

    /// Index from which entries get popped for a template target
    fn position_of(&self, template: &str, inclusive: bool) -> Option<usize> {
        self.back_stack
            .iter()
            .rposition(|entry| entry.template() == template)
            .map(|index| if inclusive { index } else { index + 1 })
    }

    fn restore(&mut self, template: &str) -> bool {
        let Some(id) = self.saved_by_template.get(template).copied() else {
            return false;
        };
        self.saved_by_template.retain(|_, saved| *saved != id);
        let Some(entries) = self.saved_stacks.remove(&id) else {
            return false;
        };
        tracing::debug!("Restored {} entries from stack {}", entries.len(), id);
        self.back_stack.extend(entries);
        true
    }
}

impl<R> NavigationEngine for NavController<R> {
    fn navigate(&mut self, path: &str, options: &NavOptions) -> Result<(), RouteError> {
        let (route, arguments) = match self.table.resolve(path) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::warn!("Navigation to {} failed: {}", path, err);
                return Err(err);
            }
        };
        let template = route.template().to_string();
        let entry = BackStackEntry::new(route, arguments);

        tracing::debug!("Navigating to {} with {:?}", path, options);
        let previous = self.current().map(BackStackEntry::id);

        if let Some(pop) = &options.pop_up_to {
            self.pop_up_to(pop);
        }

        let restored = options.restore_state && self.restore(&template);
        if !restored {
            let reuse_top = options.single_top
                && self.current().is_some_and(|top| top.template() == template);
            if !reuse_top {
                self.back_stack.push(entry);
            } else if let Some(top) = self.back_stack.last_mut() {
                top.arguments = entry.arguments;
            }
        }

        self.dispatch(previous);
        Ok(())
    }
}

impl<R> std::fmt::Debug for NavController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavController")
            .field("back_stack", &self.back_stack)
            .field("saved_stacks", &self.saved_stacks.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
