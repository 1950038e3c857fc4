//! System locale detection utilities.

use std::env;

use crate::i18n::language::Language;

/// Locale environment variables in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// What: Detect the preferred supported language from the environment.
///
/// Output:
/// - `Some(Language)` for the first locale variable naming a supported language, else `None`
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order
/// - A variable naming an unsupported locale (e.g., `de_DE.UTF-8`) ends the search
#[must_use]
pub fn detect_system_language() -> Option<Language> {
    detect_language_with(|name| env::var(name).ok())
}

/// What: Language detection over an arbitrary variable source.
///
/// Inputs:
/// - `lookup`: Returns the value of an environment variable by name
///
/// Output:
/// - Same as [`detect_system_language`]
pub fn detect_language_with<F>(lookup: F) -> Option<Language>
where
    F: Fn(&str) -> Option<String>,
{
    for var_name in LOCALE_VARS {
        if let Some(raw) = lookup(var_name)
            && let Some(parsed) = parse_locale_string(&raw)
        {
            let lang = Language::from_locale(&parsed);
            tracing::debug!(var = var_name, locale = %parsed, ?lang, "detected system locale");
            return lang;
        }
    }
    None
}

/// What: Parse a locale string from environment variables into a standardized format.
///
/// Inputs:
/// - `locale_str`: Locale string like "hi_IN.UTF-8", "hi-IN", "en_US.utf8"
///
/// Output:
/// - `Option<String>` with standardized format (e.g., "hi-IN") or None if invalid
///
/// Details:
/// - Converts underscores to hyphens
/// - Removes encoding suffix (.UTF-8, .utf8, etc.) and `@modifier`
fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    let locale_part = trimmed.split(['.', '@']).next()?;
    let normalized = locale_part.replace('_', "-");
    let parts: Vec<&str> = normalized.split('-').collect();
    match parts.as_slice() {
        [language] if !language.is_empty() => Some(language.to_lowercase()),
        [language, region] => Some(format!(
            "{}-{}",
            language.to_lowercase(),
            region.to_uppercase()
        )),
        [language, script, region] => Some(format!(
            "{}-{script}-{}",
            language.to_lowercase(),
            region.to_uppercase()
        )),
        _ => None,
    }
}
