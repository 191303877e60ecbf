//! Error types for route construction and matching

use thiserror::Error;

/// Programming mistakes detected while building destinations or the route table
///
/// These abort startup; they are never recovered at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Destination key is empty
    #[error("Destination key is empty")]
    EmptyKey,

    /// Destination key contains a reserved character
    #[error("Invalid destination key: {0}")]
    InvalidKey(String),

    /// Parameter name is empty or contains a reserved character
    #[error("Invalid parameter name `{name}` on destination `{key}`")]
    InvalidParameterName {
        /// Destination key
        key: String,
        /// Offending name
        name: String,
    },

    /// Parameter name declared twice on one destination
    #[error("Parameter `{name}` declared twice on destination `{key}`")]
    DuplicateParameter {
        /// Destination key
        key: String,
        /// Repeated name
        name: String,
    },

    /// Two routes registered with the same full template
    #[error("Duplicate route template: {0}")]
    DuplicateTemplate(String),

    /// Two routes share a key but declare different templates
    #[error("Destination key `{key}` registered with templates `{existing}` and `{conflicting}`")]
    ConflictingKey {
        /// Shared key
        key: String,
        /// Template registered first
        existing: String,
        /// Template registered later
        conflicting: String,
    },

    /// Argument spec names a parameter the destination does not declare
    #[error("Argument `{name}` is not declared by `{template}`")]
    UndeclaredArgument {
        /// Route template
        template: String,
        /// Unknown argument name
        name: String,
    },

    /// Start destination was never registered
    #[error("Start destination not registered: {0}")]
    UnknownStartDestination(String),
}

/// Errors raised while binding or resolving concrete routes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Wrong number of values for a destination
    #[error("Destination `{key}` expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Destination key
        key: String,
        /// Declared parameter count
        expected: usize,
        /// Supplied value count
        actual: usize,
    },

    /// A declared parameter has no value
    #[error("Missing value for parameter `{name}` of `{key}`")]
    MissingValue {
        /// Destination key
        key: String,
        /// Parameter without a value
        name: String,
    },

    /// No registered destination matches the path
    #[error("No route matches path: {0}")]
    Unmatched(String),

    /// Path segment is not valid percent-encoded UTF-8
    #[error("Malformed path segment: {0}")]
    MalformedSegment(String),

    /// Destination definition itself is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RouteError>;
