//! Fluent-backed translation lookup

use fluent::{FluentBundle, FluentResource};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::lang::{negotiate, parse_locale};
use crate::StringResources;

/// Translation error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// Tag is not a valid language identifier
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Fluent source failed to parse
    #[error("Failed to parse translations for {locale}: {message}")]
    Parse {
        /// Locale of the broken source
        locale: String,
        /// Parser diagnostics
        message: String,
    },

    /// Parsed resource could not be added to the bundle
    #[error("Failed to register translations for {locale}: {message}")]
    Resource {
        /// Locale of the rejected resource
        locale: String,
        /// Bundle diagnostics
        message: String,
    },

    /// No translation sources were supplied
    #[error("No locales available")]
    NoLocales,
}

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Message lookup for a single negotiated locale
pub struct Translator {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Build a translator from one Fluent source
    pub fn from_source(locale: &str, source: &str) -> Result<Self> {
        let locale = parse_locale(locale)?;
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            I18nError::Parse {
                locale: locale.to_string(),
                message: join_errors(&errors),
            }
        })?;

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| I18nError::Resource {
                locale: locale.to_string(),
                message: join_errors(&errors),
            })?;

        Ok(Self { bundle, locale })
    }

    /// Build a translator for the best match among `sources`
    ///
    /// `sources` pairs a locale tag with its Fluent text; the first entry is
    /// the default. Unparseable requested tags are ignored.
    pub fn negotiated(sources: &[(&str, &str)], requested: &[&str]) -> Result<Self> {
        let (default_tag, default_source) = sources.first().ok_or(I18nError::NoLocales)?;

        let available = sources
            .iter()
            .map(|(tag, _)| parse_locale(tag))
            .collect::<Result<Vec<_>>>()?;
        let requested: Vec<_> = requested
            .iter()
            .filter_map(|tag| match parse_locale(tag) {
                Ok(locale) => Some(locale),
                Err(err) => {
                    tracing::warn!("Ignoring requested locale: {}", err);
                    None
                }
            })
            .collect();

        let chosen = negotiate(&requested, &available, &available[0]);
        match available.iter().position(|locale| *locale == chosen) {
            Some(index) => Self::from_source(sources[index].0, sources[index].1),
            None => Self::from_source(default_tag, default_source),
        }
    }

    /// The locale this translator serves
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Format the message `id`, if present
    pub fn translate(&self, id: &str) -> Option<String> {
        let message = self.bundle.get_message(id)?;
        let pattern = message.value()?;
        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!("Formatting `{}` reported: {}", id, join_errors(&errors));
        }
        Some(value.into_owned())
    }
}

impl StringResources for Translator {
    fn get_string(&self, id: &str) -> String {
        self.translate(id).unwrap_or_else(|| {
            tracing::warn!("Missing string resource `{}` for {}", id, self.locale);
            id.to_string()
        })
    }
}

fn join_errors<E: std::fmt::Debug>(errors: &[E]) -> String {
    errors
        .iter()
        .map(|err| format!("{:?}", err))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = "title_home = Home\ntitle_details = Details\n";
    const ES: &str = "title_home = Inicio\n";

    #[test]
    fn test_translate_known_message() {
        let translator = Translator::from_source("en-US", EN).unwrap();
        assert_eq!(translator.translate("title_home").as_deref(), Some("Home"));
        assert_eq!(translator.get_string("title_details"), "Details");
    }

    #[test]
    fn test_missing_message_falls_back_to_id() {
        let translator = Translator::from_source("en-US", EN).unwrap();
        assert_eq!(translator.translate("title_nowhere"), None);
        assert_eq!(translator.get_string("title_nowhere"), "title_nowhere");
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = Translator::from_source("en-US", "this is not fluent");
        assert!(matches!(result, Err(I18nError::Parse { .. })));
    }

    #[test]
    fn test_negotiated_picks_requested_locale() {
        let translator =
            Translator::negotiated(&[("en-US", EN), ("es", ES)], &["es-MX"]).unwrap();
        assert_eq!(translator.locale().to_string(), "es");
        assert_eq!(translator.get_string("title_home"), "Inicio");
    }

    #[test]
    fn test_negotiated_defaults_to_first_source() {
        let translator =
            Translator::negotiated(&[("en-US", EN), ("es", ES)], &["fr", "!!"]).unwrap();
        assert_eq!(translator.locale().to_string(), "en-US");
    }

    #[test]
    fn test_negotiated_requires_sources() {
        assert_eq!(
            Translator::negotiated(&[], &["en-US"]).unwrap_err(),
            I18nError::NoLocales
        );
    }
}
