//! Locale parsing and negotiation

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

use crate::translator::{I18nError, Result};

/// Locale used when nothing better is requested
pub const DEFAULT_LOCALE: &str = "en-US";

/// Parse a BCP 47 language tag
pub fn parse_locale(tag: &str) -> Result<LanguageIdentifier> {
    tag.parse::<LanguageIdentifier>()
        .map_err(|_| I18nError::InvalidLocale(tag.to_string()))
}

/// Pick the best available locale for the requested list
///
/// Falls back to `default` when no requested locale matches.
pub fn negotiate(
    requested: &[LanguageIdentifier],
    available: &[LanguageIdentifier],
    default: &LanguageIdentifier,
) -> LanguageIdentifier {
    negotiate_languages(
        requested,
        available,
        Some(default),
        NegotiationStrategy::Lookup,
    )
    .first()
    .map(|locale| (*locale).clone())
    .unwrap_or_else(|| default.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|tag| parse_locale(tag).unwrap()).collect()
    }

    #[test]
    fn test_parse_locale() {
        let locale = parse_locale("en-US").unwrap();
        assert_eq!(locale.to_string(), "en-US");
        assert!(matches!(
            parse_locale("not a locale!"),
            Err(I18nError::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_negotiate_region_falls_back_to_language() {
        let available = locales(&["en-US", "es"]);
        let chosen = negotiate(&locales(&["es-MX"]), &available, &available[0]);
        assert_eq!(chosen.to_string(), "es");
    }

    #[test]
    fn test_negotiate_uses_default() {
        let available = locales(&["en-US", "es"]);
        let chosen = negotiate(&locales(&["de-DE"]), &available, &available[0]);
        assert_eq!(chosen.to_string(), "en-US");
    }
}
