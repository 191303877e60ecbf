//! Argument encoding and decoding
//!
//! Values are percent-encoded per segment, so a value containing the path
//! separator still round-trips. Decoding reads segments back by name in the
//! destination's declared order.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::destination::{Destination, SEPARATOR};
use crate::error::{Result, RouteError};

/// Encode one argument value as a path segment
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Decode one path segment back into its value
pub fn decode_segment(segment: &str) -> Result<String> {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .map_err(|_| RouteError::MalformedSegment(segment.to_string()))
}

/// Recover named arguments from a resolved path
///
/// The path must start with the destination's key. Segments bind to
/// parameter names positionally; names past the last segment are left
/// absent so lookups fall back. Extra segments do not match.
pub fn decode(destination: &Destination, resolved_path: &str) -> Result<RouteArgs> {
    let unmatched = || RouteError::Unmatched(resolved_path.to_string());

    let remainder = resolved_path
        .strip_prefix(destination.key())
        .ok_or_else(unmatched)?;
    let segments: Vec<&str> = if remainder.is_empty() {
        Vec::new()
    } else {
        remainder
            .strip_prefix(SEPARATOR)
            .ok_or_else(unmatched)?
            .split(SEPARATOR)
            .collect()
    };

    if segments.len() > destination.arity() {
        return Err(unmatched());
    }

    let mut args = RouteArgs::new();
    for (name, segment) in destination.parameter_names().iter().zip(segments) {
        args.insert(name.clone(), decode_segment(segment)?);
    }
    Ok(args)
}

/// Named string arguments delivered to a screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteArgs {
    entries: Vec<(String, String)>,
}

impl RouteArgs {
    /// Create an empty argument bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up an argument
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up an argument, substituting `fallback` when it is absent
    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }

    /// Whether the argument is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no arguments are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate arguments in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> Destination {
        Destination::with_parameters("details_details", ["firstName", "lastName"]).unwrap()
    }

    #[test]
    fn test_decode_details() {
        let args = decode(&details(), "details_details/John/Doe").unwrap();
        assert_eq!(args.get("firstName"), Some("John"));
        assert_eq!(args.get("lastName"), Some("Doe"));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let samples: [[&str; 2]; 5] = [
            ["John", "Doe"],
            ["Jean/Luc", "Picard"],
            ["", "trailing"],
            ["Zoë", "Ødegaard"],
            ["100% sure", "a?b#c"],
        ];
        let destination = details();
        for values in samples {
            let route = destination.bind_all(&values).unwrap();
            let args = decode(&destination, route.resolved_path()).unwrap();
            let decoded: Vec<&str> = destination
                .parameter_names()
                .iter()
                .map(|name| args.get(name).unwrap())
                .collect();
            assert_eq!(decoded, values);
        }
    }

    #[test]
    fn test_missing_argument_uses_fallback() {
        let args = decode(&details(), "details_details/John").unwrap();
        assert_eq!(args.get_or("firstName", "Unknown"), "John");
        assert_eq!(args.get_or("lastName", "Unknown"), "Unknown");
        assert!(!args.contains("lastName"));

        let empty = decode(&details(), "details_details").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.get_or("firstName", "Unknown"), "Unknown");
    }

    #[test]
    fn test_decode_no_argument_destination() {
        let home = Destination::new("home").unwrap();
        assert!(decode(&home, "home").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_other_destinations() {
        let home = Destination::new("home").unwrap();
        assert_eq!(
            decode(&home, "homework"),
            Err(RouteError::Unmatched("homework".to_string()))
        );
        assert!(matches!(
            decode(&home, "dashboard"),
            Err(RouteError::Unmatched(_))
        ));
        assert!(matches!(
            decode(&details(), "details_details/a/b/c"),
            Err(RouteError::Unmatched(_))
        ));
    }

    #[test]
    fn test_decode_malformed_segment() {
        assert_eq!(
            decode(&details(), "details_details/%FF/Doe"),
            Err(RouteError::MalformedSegment("%FF".to_string()))
        );
    }

    #[test]
    fn test_segment_codec() {
        assert_eq!(encode_segment("John"), "John");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(decode_segment("a%2Fb%20c").unwrap(), "a/b c");
    }

    #[test]
    fn test_insert_replaces_and_keeps_order() {
        let mut args: RouteArgs = [("firstName", "first"), ("lastName", "last")]
            .into_iter()
            .collect();
        args.insert("firstName", "John");
        let pairs: Vec<_> = args.iter().collect();
        assert_eq!(pairs, vec![("firstName", "John"), ("lastName", "last")]);
    }
}
