//! Static route table
//!
//! The table maps each destination's full path template to the renderer that
//! displays it, a display label resolved from string resources, and the
//! declared argument types and defaults. It is built once at startup and is
//! read-only afterwards.

use std::collections::HashMap;

use i18n::StringResources;
use serde::{Deserialize, Serialize};

use crate::args::{decode, RouteArgs};
use crate::destination::{ConcreteRoute, Destination, SEPARATOR};
use crate::error::{ConfigError, ConfigResult, Result, RouteError};

// =============================================================================
// Argument Declarations
// =============================================================================

/// Type tag of a declared argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    /// Plain string value
    #[default]
    String,
}

/// Declared type and default of one destination parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Parameter name
    pub name: String,
    /// Value type
    pub arg_type: ArgType,
    /// Value used when a caller leaves the argument out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ArgumentSpec {
    /// Declare a string argument without a default
    pub fn string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: ArgType::String,
            default_value: None,
        }
    }

    /// Set the default value
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

// =============================================================================
// Route Registration
// =============================================================================

/// One destination awaiting registration
#[derive(Debug, Clone)]
pub struct RouteSpec<R> {
    destination: Destination,
    renderer: R,
    label_id: Option<String>,
    arguments: Vec<ArgumentSpec>,
}

impl<R> RouteSpec<R> {
    /// Register `destination`, displayed by `renderer`
    pub fn new(destination: Destination, renderer: R) -> Self {
        Self {
            destination,
            renderer,
            label_id: None,
            arguments: Vec::new(),
        }
    }

    /// String resource id of the display label
    pub fn label(mut self, label_id: impl Into<String>) -> Self {
        self.label_id = Some(label_id.into());
        self
    }

    /// Declare an argument's type and default
    pub fn argument(mut self, spec: ArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }
}

/// A registered destination
#[derive(Debug, Clone)]
pub struct RouteEntry<R> {
    destination: Destination,
    renderer: R,
    label: String,
    arguments: Vec<ArgumentSpec>,
}

impl<R> RouteEntry<R> {
    /// Registered destination
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Full path template
    pub fn template(&self) -> &str {
        self.destination.path_template()
    }

    /// Destination key
    pub fn key(&self) -> &str {
        self.destination.key()
    }

    /// Screen that displays this destination
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Display label, empty when none was declared
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Argument declarations, in parameter order
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Declaration for one argument
    pub fn argument(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.iter().find(|spec| spec.name == name)
    }

    /// Declared defaults as an argument bag
    pub fn default_args(&self) -> RouteArgs {
        self.arguments
            .iter()
            .filter_map(|spec| {
                spec.default_value
                    .as_ref()
                    .map(|value| (spec.name.clone(), value.clone()))
            })
            .collect()
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// Read-only mapping from path templates to registered destinations
#[derive(Debug, Clone)]
pub struct RouteTable<R> {
    entries: Vec<RouteEntry<R>>,
    by_template: HashMap<String, usize>,
    by_key: HashMap<String, usize>,
    start: usize,
}

impl<R> RouteTable<R> {
    /// Start building a table whose start destination is `start`
    pub fn builder(start: &Destination) -> RouteTableBuilder<R> {
        RouteTableBuilder::new(start.path_template())
    }

    /// Number of registered destinations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered destinations in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<R>> {
        self.entries.iter()
    }

    /// Look up by exact template
    pub fn get(&self, template: &str) -> Option<&RouteEntry<R>> {
        self.by_template.get(template).map(|&index| &self.entries[index])
    }

    /// Look up by destination key
    pub fn get_by_key(&self, key: &str) -> Option<&RouteEntry<R>> {
        self.by_key.get(key).map(|&index| &self.entries[index])
    }

    /// Destination shown first
    pub fn start_destination(&self) -> &RouteEntry<R> {
        &self.entries[self.start]
    }

    /// Match a resolved path against the registered templates
    ///
    /// The key must be registered and the path must carry exactly one segment
    /// per declared parameter. Declared defaults are not applied here; bind
    /// them with [`RouteTable::bind_with_defaults`] before navigating.
    pub fn resolve(&self, path: &str) -> Result<(&RouteEntry<R>, RouteArgs)> {
        let key = path.split(SEPARATOR).next().unwrap_or_default();
        let entry = self
            .get_by_key(key)
            .ok_or_else(|| RouteError::Unmatched(path.to_string()))?;

        let segment_count = match path.strip_prefix(key) {
            Some("") | None => 0,
            Some(rest) => rest.split(SEPARATOR).count() - 1,
        };
        if segment_count != entry.destination.arity() {
            return Err(RouteError::Unmatched(path.to_string()));
        }

        let args = decode(&entry.destination, path)?;
        Ok((entry, args))
    }

    /// Bind values for `key`, substituting declared defaults for `None`
    pub fn bind_with_defaults<V: AsRef<str>>(
        &self,
        key: &str,
        values: &[Option<V>],
    ) -> Result<ConcreteRoute> {
        let entry = self
            .get_by_key(key)
            .ok_or_else(|| RouteError::Unmatched(key.to_string()))?;
        let destination = &entry.destination;
        if values.len() != destination.arity() {
            return Err(RouteError::ArityMismatch {
                key: key.to_string(),
                expected: destination.arity(),
                actual: values.len(),
            });
        }

        let filled: Vec<Option<String>> = destination
            .parameter_names()
            .iter()
            .zip(values)
            .map(|(name, value)| match value {
                Some(value) => Some(value.as_ref().to_string()),
                None => entry
                    .argument(name)
                    .and_then(|spec| spec.default_value.clone()),
            })
            .collect();
        destination.bind(&filled)
    }
}

/// Collects routes and validates them into a [`RouteTable`]
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<R> {
    start_template: String,
    routes: Vec<RouteSpec<R>>,
}

impl<R> RouteTableBuilder<R> {
    /// Create a builder for a table starting at `start_template`
    pub fn new(start_template: impl Into<String>) -> Self {
        Self {
            start_template: start_template.into(),
            routes: Vec::new(),
        }
    }

    /// Add a destination
    pub fn route(mut self, spec: RouteSpec<R>) -> Self {
        self.routes.push(spec);
        self
    }

    /// Validate every route and build the table
    ///
    /// Labels are resolved through `resources` here, once.
    pub fn build(self, resources: &dyn StringResources) -> ConfigResult<RouteTable<R>> {
        let mut entries: Vec<RouteEntry<R>> = Vec::with_capacity(self.routes.len());
        let mut by_template = HashMap::new();
        let mut by_key = HashMap::new();

        for spec in self.routes {
            let template = spec.destination.path_template().to_string();
            let key = spec.destination.key().to_string();

            if by_template.contains_key(&template) {
                return Err(ConfigError::DuplicateTemplate(template));
            }
            if let Some(&existing) = by_key.get(&key) {
                let existing: &RouteEntry<R> = &entries[existing];
                return Err(ConfigError::ConflictingKey {
                    key,
                    existing: existing.template().to_string(),
                    conflicting: template,
                });
            }

            let names = spec.destination.parameter_names();
            if let Some(undeclared) = spec.arguments.iter().find(|arg| !names.contains(&arg.name)) {
                return Err(ConfigError::UndeclaredArgument {
                    template,
                    name: undeclared.name.clone(),
                });
            }
            let arguments = names
                .iter()
                .map(|name| {
                    spec.arguments
                        .iter()
                        .rev()
                        .find(|arg| arg.name == *name)
                        .cloned()
                        .unwrap_or_else(|| ArgumentSpec::string(name.clone()))
                })
                .collect();

            let label = spec
                .label_id
                .as_deref()
                .map(|id| resources.get_string(id))
                .unwrap_or_default();

            tracing::debug!("Registered route {} ({})", template, label);

            by_template.insert(template, entries.len());
            by_key.insert(key, entries.len());
            entries.push(RouteEntry {
                destination: spec.destination,
                renderer: spec.renderer,
                label,
                arguments,
            });
        }

        let start = *by_template
            .get(&self.start_template)
            .ok_or(ConfigError::UnknownStartDestination(self.start_template))?;

        Ok(RouteTable {
            entries,
            by_template,
            by_key,
            start,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::StaticStrings;

    fn strings() -> StaticStrings {
        StaticStrings::new()
            .with("title_home", "Home")
            .with("title_details", "Details")
    }

    fn home() -> Destination {
        Destination::new("home").unwrap()
    }

    fn details() -> Destination {
        Destination::with_parameters("details_details", ["firstName", "lastName"]).unwrap()
    }

    fn table() -> RouteTable<&'static str> {
        RouteTable::builder(&home())
            .route(RouteSpec::new(home(), "home_screen").label("title_home"))
            .route(
                RouteSpec::new(details(), "details_screen")
                    .label("title_details")
                    .argument(ArgumentSpec::string("firstName").default_value("first"))
                    .argument(ArgumentSpec::string("lastName").default_value("last")),
            )
            .build(&strings())
            .unwrap()
    }

    #[test]
    fn test_build_resolves_labels_and_arguments() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.start_destination().template(), "home");

        let entry = table.get("details_details/{firstName}/{lastName}").unwrap();
        assert_eq!(entry.label(), "Details");
        assert_eq!(*entry.renderer(), "details_screen");
        assert_eq!(entry.arguments().len(), 2);
        assert_eq!(
            entry.argument("lastName").unwrap().default_value.as_deref(),
            Some("last")
        );
        assert_eq!(entry.argument("firstName").unwrap().arg_type, ArgType::String);
    }

    #[test]
    fn test_registration_order_preserved() {
        let table = table();
        let templates: Vec<&str> = table.iter().map(RouteEntry::template).collect();
        assert_eq!(templates, vec!["home", "details_details/{firstName}/{lastName}"]);
    }

    #[test]
    fn test_duplicate_template_fails() {
        let result = RouteTable::builder(&home())
            .route(RouteSpec::new(home(), 1))
            .route(RouteSpec::new(home(), 2))
            .build(&strings());
        assert_eq!(
            result.unwrap_err(),
            ConfigError::DuplicateTemplate("home".to_string())
        );
    }

    #[test]
    fn test_conflicting_key_fails() {
        let other = Destination::with_parameters("home", ["tab"]).unwrap();
        let result = RouteTable::builder(&home())
            .route(RouteSpec::new(home(), 1))
            .route(RouteSpec::new(other, 2))
            .build(&strings());
        assert!(matches!(
            result,
            Err(ConfigError::ConflictingKey { ref key, .. }) if key == "home"
        ));
    }

    #[test]
    fn test_undeclared_argument_fails() {
        let result = RouteTable::builder(&home())
            .route(RouteSpec::new(home(), ()).argument(ArgumentSpec::string("tab")))
            .build(&strings());
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UndeclaredArgument {
                template: "home".to_string(),
                name: "tab".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_start_fails() {
        let result = RouteTable::builder(&details())
            .route(RouteSpec::new(home(), ()))
            .build(&strings());
        assert!(matches!(
            result,
            Err(ConfigError::UnknownStartDestination(_))
        ));
    }

    #[test]
    fn test_undeclared_specs_default_to_string() {
        let table = RouteTable::builder(&details())
            .route(RouteSpec::new(details(), ()))
            .build(&strings())
            .unwrap();
        let entry = table.start_destination();
        assert_eq!(entry.label(), "");
        assert_eq!(entry.argument("firstName"), Some(&ArgumentSpec::string("firstName")));
        assert!(entry.default_args().is_empty());
    }

    #[test]
    fn test_resolve_paths() {
        let table = table();

        let (entry, args) = table.resolve("home").unwrap();
        assert_eq!(entry.template(), "home");
        assert!(args.is_empty());

        let (entry, args) = table.resolve("details_details/John/Doe").unwrap();
        assert_eq!(*entry.renderer(), "details_screen");
        assert_eq!(args.get("firstName"), Some("John"));
        assert_eq!(args.get("lastName"), Some("Doe"));
    }

    #[test]
    fn test_resolve_unmatched() {
        let table = table();
        for path in ["", "settings", "home/extra", "details_details/John", "details_details"] {
            assert_eq!(
                table.resolve(path).map(|(entry, _)| entry.template().to_string()),
                Err(RouteError::Unmatched(path.to_string())),
                "path {path:?}"
            );
        }
    }

    #[test]
    fn test_bind_with_defaults() {
        let table = table();
        let route = table
            .bind_with_defaults("details_details", &[Some("John"), None])
            .unwrap();
        assert_eq!(route.resolved_path(), "details_details/John/last");
        assert!(matches!(
            table.bind_with_defaults::<&str>("nowhere", &[]),
            Err(RouteError::Unmatched(_))
        ));
    }

    #[test]
    fn test_short_path_needs_defaults_bound_first() {
        let table = table();
        assert_eq!(
            table.resolve("details_details/John").unwrap_err(),
            RouteError::Unmatched("details_details/John".to_string())
        );

        let route = table
            .bind_with_defaults("details_details", &[Some("John"), None])
            .unwrap();
        let (entry, args) = table.resolve(route.resolved_path()).unwrap();
        assert_eq!(*entry.renderer(), "details_screen");
        assert_eq!(args.get("firstName"), Some("John"));
        assert_eq!(args.get("lastName"), Some("last"));
    }

    #[test]
    fn test_default_args() {
        let table = table();
        let defaults = table.get_by_key("details_details").unwrap().default_args();
        assert_eq!(defaults.get("firstName"), Some("first"));
        assert_eq!(defaults.get("lastName"), Some("last"));
    }
}
