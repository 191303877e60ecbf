//! Internationalization for the navigation demo
//!
//! This crate provides i18n support with translation loading,
//! language negotiation, and the string-resource lookup used to
//! label destinations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

use std::collections::HashMap;

pub use lang::{negotiate, parse_locale, DEFAULT_LOCALE};
pub use translator::{I18nError, Result, Translator};

/// Source of human-readable strings keyed by resource id
pub trait StringResources {
    /// Look up the string for `id`
    ///
    /// Implementations never fail: an unknown id yields a placeholder.
    fn get_string(&self, id: &str) -> String;
}

impl<T: StringResources + ?Sized> StringResources for &T {
    fn get_string(&self, id: &str) -> String {
        (**self).get_string(id)
    }
}

/// Fixed in-memory string table
///
/// Unknown ids resolve to the id itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticStrings {
    strings: HashMap<String, String>,
}

impl StaticStrings {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a string
    pub fn with(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(id.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticStrings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl StringResources for StaticStrings {
    fn get_string(&self, id: &str) -> String {
        self.strings
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
