//! Internationalization (i18n) for the TATSAM site.
//!
//! # Overview
//!
//! - **Languages**: a closed set, English (`en`) and Hindi (`hi`)
//! - **Dictionary**: a typed tree per language, compiled in from `config/locales/{code}.yml`
//!   or loaded from a directory given in `settings.conf`
//! - **Lookup**: dotted keys (`aboutTitle.our`) walk the tree of the active language
//!
//! # Locale Files
//!
//! Each file has one top-level key naming the locale, followed by nested maps:
//!
//! ```yaml
//! en:
//!   aboutTitle:
//!     our: "Our"
//!     introduction: "Introduction"
//! ```
//!
//! `aboutTitle.our` resolves to `"Our"`; `aboutTitle` resolves to the whole table.
//!
//! # Usage
//!
//! ```rust
//! use tatsam::i18n::{Dictionary, Language, Translation, TranslationResolver};
//!
//! let resolver = TranslationResolver::new(Dictionary::builtin().expect("built-in locales"));
//! assert_eq!(resolver.resolve(Language::Hi, "contact"), Translation::Text("संपर्क"));
//! assert_eq!(resolver.resolve(Language::En, "no.such.key"), Translation::Text("no.such.key"));
//! ```
//!
//! # Error Handling
//!
//! - Missing keys return the key itself and log a warning
//! - There is no fallback to the other language: a Hindi miss never shows English text
//! - Broken locale files fall back to the built-in table of the same language

mod detection;
mod dictionary;
mod language;
mod loader;
mod resolver;

pub use detection::{detect_language_with, detect_system_language};
pub use dictionary::{Dictionary, TranslationNode, TranslationTable};
pub use language::{Language, ParseLanguageError};
pub use loader::{load_locale_file, parse_locale_yaml};
pub use resolver::{Translation, TranslationResolver, Translator};

use std::path::Path;

/// What: Build the dictionary from an optional locales directory.
///
/// Inputs:
/// - `locales_dir`: Directory override from settings, or `None` for the built-in strings
///
/// Output:
/// - Ready-to-share dictionary
///
/// # Errors
/// - Returns `Err` when the built-in locale data cannot be parsed
pub fn load_dictionary(locales_dir: Option<&Path>) -> Result<Dictionary, String> {
    match locales_dir {
        Some(dir) if dir.is_dir() => Dictionary::load_dir(dir),
        Some(dir) => {
            tracing::warn!(
                dir = %dir.display(),
                "locales directory not found, using built-in strings"
            );
            Dictionary::builtin()
        }
        None => Dictionary::builtin(),
    }
}
