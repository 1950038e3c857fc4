//! Dotted-key resolution against the dictionary.

use std::fmt;
use std::sync::Arc;

use crate::i18n::dictionary::{Dictionary, TranslationNode, TranslationTable};
use crate::i18n::language::Language;
use crate::prefs::PreferenceStore;

/// Result of resolving a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation<'a> {
    /// Display text. On a miss this is the requested key itself.
    Text(&'a str),
    /// The key addressed a nested table on purpose.
    Table(&'a TranslationTable),
}

impl<'a> Translation<'a> {
    /// Text content, or `None` for a table.
    #[must_use]
    pub const fn as_text(self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Table(_) => None,
        }
    }
}

impl fmt::Display for Translation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Table(t) => match serde_json::to_string(t) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

/// Resolves dotted keys against a shared, read-only dictionary.
///
/// Resolution is a pure function of `(language, key, dictionary)`; the only side
/// effect is a `warn!` diagnostic on a miss. Nothing is cached.
#[derive(Debug, Clone)]
pub struct TranslationResolver {
    /// Dictionary shared with any other resolver built from it.
    dictionary: Arc<Dictionary>,
}

impl TranslationResolver {
    /// Wrap a dictionary for lookups.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
        }
    }

    /// Build from an already-shared dictionary.
    #[must_use]
    pub const fn from_shared(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// The underlying dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// What: Resolve `key` for `language`.
    ///
    /// Inputs:
    /// - `language`: Active language
    /// - `key`: Dotted key path (e.g., "aboutTitle.our")
    ///
    /// Output:
    /// - `Translation::Text` or `Translation::Table` for the node at the end of the path
    /// - `Translation::Text(key)` when any segment is missing
    ///
    /// Details:
    /// - A miss emits exactly one warning naming the key and language
    /// - Never consults the other language's tree
    pub fn resolve<'a>(&'a self, language: Language, key: &'a str) -> Translation<'a> {
        match self.dictionary.lookup(language, key) {
            Some(TranslationNode::Text(s)) => Translation::Text(s),
            Some(TranslationNode::Table(t)) => Translation::Table(t),
            None => {
                tracing::warn!(
                    key = %key,
                    language = %language,
                    "translation key not found"
                );
                Translation::Text(key)
            }
        }
    }

    /// What: Resolve `key` to display text.
    ///
    /// Output:
    /// - Leaf text, or the key itself when missing or when it names a table
    ///
    /// Details:
    /// - A table where text was expected is a caller bug, logged at debug level
    pub fn text(&self, language: Language, key: &str) -> String {
        match self.resolve(language, key) {
            Translation::Text(s) => s.to_string(),
            Translation::Table(_) => {
                tracing::debug!(
                    key = %key,
                    language = %language,
                    "translation key names a table, not text"
                );
                key.to_string()
            }
        }
    }

    /// What: Resolve `key` and substitute named `{placeholder}`s.
    ///
    /// Inputs:
    /// - `language`: Active language
    /// - `key`: Dotted key path
    /// - `args`: `(name, value)` pairs; `("year", &2025)` fills `{year}`
    ///
    /// Output:
    /// - Text with every occurrence of each named placeholder replaced
    ///
    /// Details:
    /// - Placeholders without a matching argument are left untouched
    /// - Substituted values are never scanned for placeholders themselves
    pub fn text_with(
        &self,
        language: Language,
        key: &str,
        args: &[(&str, &dyn fmt::Display)],
    ) -> String {
        fill_placeholders(&self.text(language, key), args)
    }
}

/// What: Replace `{name}` placeholders in one left-to-right pass.
///
/// Inputs:
/// - `template`: Text possibly containing `{name}` placeholders
/// - `args`: `(name, value)` pairs
///
/// Output:
/// - Text with known placeholders replaced and everything else copied verbatim
fn fill_placeholders(template: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let matched = after.find('}').and_then(|end| {
            let name = &after[..end];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| (end, *value))
        });
        match matched {
            Some((end, value)) => {
                out.push_str(&value.to_string());
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// A resolver bound to a preference store, so lookups follow the active language.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Source of the active language.
    prefs: &'a PreferenceStore,
    /// Dictionary lookups.
    resolver: &'a TranslationResolver,
}

impl<'a> Translator<'a> {
    /// Bind `resolver` to `prefs`.
    #[must_use]
    pub const fn new(prefs: &'a PreferenceStore, resolver: &'a TranslationResolver) -> Self {
        Self { prefs, resolver }
    }

    /// Language lookups currently use.
    #[must_use]
    pub fn language(&self) -> Language {
        self.prefs.language()
    }

    /// Resolve `key` in the store's current language.
    pub fn resolve(&self, key: &'a str) -> Translation<'a> {
        self.resolver.resolve(self.prefs.language(), key)
    }

    /// Display text for `key` in the current language.
    pub fn t(&self, key: &str) -> String {
        self.resolver.text(self.prefs.language(), key)
    }

    /// Display text with named placeholders filled in.
    pub fn t_with(&self, key: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
        self.resolver.text_with(self.prefs.language(), key, args)
    }
}
