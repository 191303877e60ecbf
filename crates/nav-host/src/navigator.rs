//! Navigation façade for UI event handlers
//!
//! A [`Navigator`] borrows the engine for the duration of one event and turns
//! "go to X" intents into engine calls. It holds no state of its own.

use routing::{Routable, RouteError};

use crate::engine::NavigationEngine;
use crate::options::NavOptions;

/// Stateless translation from navigation intent to engine calls
pub struct Navigator<'a, E: NavigationEngine + ?Sized> {
    engine: &'a mut E,
}

impl<'a, E: NavigationEngine + ?Sized> Navigator<'a, E> {
    /// Wrap an engine
    pub fn new(engine: &'a mut E) -> Self {
        Self { engine }
    }

    /// Navigate to a resolved path with caller-supplied options
    pub fn go_to(&mut self, path: impl AsRef<str>, options: &NavOptions) -> Result<(), RouteError> {
        self.engine.navigate(path.as_ref(), options)
    }

    /// Navigate after dropping every prior back-stack entry
    pub fn go_to_clearing_history(&mut self, path: impl AsRef<str>) -> Result<(), RouteError> {
        self.engine
            .navigate(path.as_ref(), &NavOptions::clearing_history())
    }

    /// Bind a typed destination and navigate to it
    pub fn go_to_route<T: Routable + ?Sized>(
        &mut self,
        route: &T,
        options: &NavOptions,
    ) -> Result<(), RouteError> {
        let route = route.to_route()?;
        self.go_to(route, options)
    }
}
