//! Destination identity and concrete routes
//!
//! A [`Destination`] is a key plus an ordered list of parameter names. Its
//! path template (`key/{first}/{second}`) is derived once at construction and
//! is what the route table registers. Binding one value per parameter yields a
//! [`ConcreteRoute`] whose resolved path is what gets navigated to.

use std::fmt;

use serde::Serialize;

use crate::args::encode_segment;
use crate::error::{ConfigError, ConfigResult, Result, RouteError};

/// Separator between the key and each path segment
pub const SEPARATOR: char = '/';

const RESERVED: [char; 3] = [SEPARATOR, '{', '}'];

/// Build the path template for a key and its parameter names
///
/// Purely structural: the key is not escaped.
pub fn build_template<S: AsRef<str>>(key: &str, parameter_names: &[S]) -> String {
    let mut template = String::from(key);
    for name in parameter_names {
        template.push(SEPARATOR);
        template.push('{');
        template.push_str(name.as_ref());
        template.push('}');
    }
    template
}

/// A uniquely keyed, navigable screen definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Destination {
    key: String,
    parameter_names: Vec<String>,
    path_template: String,
}

impl Destination {
    /// Create a destination without parameters
    pub fn new(key: impl Into<String>) -> ConfigResult<Self> {
        Self::with_parameters(key, std::iter::empty::<String>())
    }

    /// Create a destination with ordered parameter names
    pub fn with_parameters<I, S>(key: impl Into<String>, parameter_names: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        if key.contains(&RESERVED[..]) {
            return Err(ConfigError::InvalidKey(key));
        }

        let mut names: Vec<String> = Vec::new();
        for name in parameter_names {
            let name = name.into();
            if name.is_empty() || name.contains(&RESERVED[..]) {
                return Err(ConfigError::InvalidParameterName { key, name });
            }
            if names.contains(&name) {
                return Err(ConfigError::DuplicateParameter { key, name });
            }
            names.push(name);
        }

        let path_template = build_template(&key, &names);
        Ok(Self {
            key,
            parameter_names: names,
            path_template,
        })
    }

    /// Stable identifier
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Declared parameter names, in order
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    /// Full template registered with the route table
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.parameter_names.len()
    }

    /// Whether any parameters are declared
    pub fn is_parameterized(&self) -> bool {
        !self.parameter_names.is_empty()
    }

    /// Concrete route for a destination without parameters
    ///
    /// The resolved path is the key itself.
    pub fn route(&self) -> Result<ConcreteRoute> {
        self.bind::<&str>(&[])
    }

    /// Bind one value per declared parameter
    ///
    /// Every value must be present: a `None` is rejected rather than
    /// producing a shorter path that would not match the registered template.
    pub fn bind<V: AsRef<str>>(&self, values: &[Option<V>]) -> Result<ConcreteRoute> {
        if values.len() != self.arity() {
            return Err(RouteError::ArityMismatch {
                key: self.key.clone(),
                expected: self.arity(),
                actual: values.len(),
            });
        }

        let mut bound = Vec::with_capacity(values.len());
        let mut resolved_path = self.key.clone();
        for (name, value) in self.parameter_names.iter().zip(values) {
            let value: &str = value
                .as_ref()
                .map(|v| v.as_ref())
                .ok_or_else(|| RouteError::MissingValue {
                    key: self.key.clone(),
                    name: name.clone(),
                })?;
            resolved_path.push(SEPARATOR);
            resolved_path.push_str(&encode_segment(value));
            bound.push(value.to_string());
        }

        Ok(ConcreteRoute {
            key: self.key.clone(),
            path_template: self.path_template.clone(),
            values: bound,
            resolved_path,
        })
    }

    /// Bind values that are all known to be present
    pub fn bind_all<V: AsRef<str>>(&self, values: &[V]) -> Result<ConcreteRoute> {
        let values: Vec<Option<&str>> = values.iter().map(|v| Some(v.as_ref())).collect();
        self.bind(&values)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_template)
    }
}

/// A destination with bound argument values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConcreteRoute {
    key: String,
    path_template: String,
    values: Vec<String>,
    resolved_path: String,
}

impl ConcreteRoute {
    /// Destination key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Template of the destination this route was bound from
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Bound values, in parameter order, unencoded
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Path to hand to the navigation engine
    pub fn resolved_path(&self) -> &str {
        &self.resolved_path
    }

    /// Take the resolved path
    pub fn into_path(self) -> String {
        self.resolved_path
    }
}

impl AsRef<str> for ConcreteRoute {
    fn as_ref(&self) -> &str {
        &self.resolved_path
    }
}

impl fmt::Display for ConcreteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolved_path)
    }
}

/// A typed destination set, usually an enum with one variant per screen
pub trait Routable {
    /// Key of this variant's destination
    fn key(&self) -> &'static str;

    /// Parameter names of this variant's destination
    fn parameter_names(&self) -> &'static [&'static str];

    /// Values carried by this variant, in parameter order
    fn arguments(&self) -> Vec<Option<String>>;

    /// Destination definition for this variant
    fn destination(&self) -> ConfigResult<Destination> {
        Destination::with_parameters(self.key(), self.parameter_names().iter().copied())
    }

    /// Concrete route carrying this variant's values
    fn to_route(&self) -> Result<ConcreteRoute> {
        self.destination()?.bind(&self.arguments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> Destination {
        Destination::with_parameters("details_details", ["firstName", "lastName"]).unwrap()
    }

    #[test]
    fn test_template_without_parameters_is_key() {
        let home = Destination::new("home").unwrap();
        assert_eq!(home.path_template(), "home");
        assert!(!home.is_parameterized());
        assert_eq!(build_template::<&str>("home", &[]), "home");
    }

    #[test]
    fn test_template_with_parameters() {
        assert_eq!(details().path_template(), "details_details/{firstName}/{lastName}");
        assert_eq!(build_template("a", &["x", "y", "z"]), "a/{x}/{y}/{z}");
        assert_eq!(details().to_string(), details().path_template());
    }

    #[test]
    fn test_template_is_deterministic() {
        assert_eq!(details(), details());
        assert_eq!(details().path_template(), details().path_template());
    }

    #[test]
    fn test_invalid_keys_rejected() {
        assert_eq!(Destination::new(""), Err(ConfigError::EmptyKey));
        assert_eq!(
            Destination::new("details/extra"),
            Err(ConfigError::InvalidKey("details/extra".to_string()))
        );
        assert!(matches!(
            Destination::new("{home}"),
            Err(ConfigError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            Destination::with_parameters("details", ["first/name"]),
            Err(ConfigError::InvalidParameterName { .. })
        ));
        assert!(matches!(
            Destination::with_parameters("details", [""]),
            Err(ConfigError::InvalidParameterName { .. })
        ));
        assert_eq!(
            Destination::with_parameters("details", ["name", "name"]),
            Err(ConfigError::DuplicateParameter {
                key: "details".to_string(),
                name: "name".to_string(),
            })
        );
    }

    #[test]
    fn test_no_argument_route_is_key() {
        let home = Destination::new("home").unwrap();
        let route = home.route().unwrap();
        assert_eq!(route.resolved_path(), "home");
        assert!(route.values().is_empty());
    }

    #[test]
    fn test_no_argument_route_on_parameterized_destination_fails() {
        assert_eq!(
            details().route(),
            Err(RouteError::ArityMismatch {
                key: "details_details".to_string(),
                expected: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn test_bind_parameterized() {
        let route = details().bind(&[Some("John"), Some("Doe")]).unwrap();
        assert_eq!(route.resolved_path(), "details_details/John/Doe");
        assert_eq!(route.values(), ["John".to_string(), "Doe".to_string()]);
        assert_eq!(route.path_template(), "details_details/{firstName}/{lastName}");
        assert_eq!(route.key(), "details_details");
    }

    #[test]
    fn test_bind_partial_arguments_rejected() {
        let result = details().bind(&[Some("John"), None]);
        assert_eq!(
            result,
            Err(RouteError::MissingValue {
                key: "details_details".to_string(),
                name: "lastName".to_string()
            })
        );
    }

    #[test]
    fn test_bind_wrong_count_rejected() {
        assert!(matches!(
            details().bind_all(&["John"]),
            Err(RouteError::ArityMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_bind_escapes_separator() {
        let route = details().bind_all(&["Jean/Luc", "Picard"]).unwrap();
        assert_eq!(route.resolved_path(), "details_details/Jean%2FLuc/Picard");
        assert_eq!(route.values()[0], "Jean/Luc");
    }

    enum Screen {
        Home,
        Profile { handle: String },
    }

    impl Routable for Screen {
        fn key(&self) -> &'static str {
            match self {
                Screen::Home => "home",
                Screen::Profile { .. } => "profile",
            }
        }

        fn parameter_names(&self) -> &'static [&'static str] {
            match self {
                Screen::Home => &[],
                Screen::Profile { .. } => &["handle"],
            }
        }

        fn arguments(&self) -> Vec<Option<String>> {
            match self {
                Screen::Home => Vec::new(),
                Screen::Profile { handle } => vec![Some(handle.clone())],
            }
        }
    }

    #[test]
    fn test_routable_builds_routes() {
        assert_eq!(Screen::Home.to_route().unwrap().resolved_path(), "home");

        let profile = Screen::Profile {
            handle: "alice".to_string(),
        };
        assert_eq!(profile.destination().unwrap().path_template(), "profile/{handle}");
        assert_eq!(profile.to_route().unwrap().to_string(), "profile/alice");
    }

    #[test]
    fn test_route_serialization() {
        let route = details().bind_all(&["John", "Doe"]).unwrap();
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["resolved_path"], "details_details/John/Doe");
    }
}
