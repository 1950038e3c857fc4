//! Configuration: paths, `settings.conf` parsing and first-run skeletons.
//!
//! `settings.conf` uses plain `key = value` lines. Keys are matched case-insensitively
//! with `-`, `.` and spaces treated like `_`. Unknown keys are ignored and invalid values
//! keep their defaults with a warning.

/// Line-level parsing helpers.
pub(crate) mod parsing;
/// Path resolution for the config directory.
mod paths;
/// First-run file contents.
pub(crate) mod skeletons;

pub use paths::{ConfigPaths, config_dir};

use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{Language, detect_system_language};
use crate::prefs::{StoreConfig, ThemeVariant};
use parsing::{normalize_key, strip_inline_comment};
use skeletons::SETTINGS_SKELETON_CONTENT;

/// Storage key for the language preference unless configured otherwise.
pub const DEFAULT_LANGUAGE_KEY: &str = "tatsam-language";
/// Storage key for the theme preference unless configured otherwise.
pub const DEFAULT_THEME_KEY: &str = "tatsam-theme";

/// User-editable settings read from `settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Language used before any preference is saved; `None` means detect from the system.
    pub default_language: Option<Language>,
    /// Theme used before any preference is saved.
    pub default_theme: ThemeVariant,
    /// Storage key of the language preference.
    pub language_storage_key: String,
    /// Storage key of the theme preference.
    pub theme_storage_key: String,
    /// Directory with `{code}.yml` locale files; `None` uses the built-in strings.
    pub locales_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: None,
            default_theme: ThemeVariant::Light,
            language_storage_key: DEFAULT_LANGUAGE_KEY.to_string(),
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
            locales_dir: None,
        }
    }
}

impl Settings {
    /// What: Derive the preference store configuration.
    ///
    /// Output:
    /// - `StoreConfig` whose default language is the configured one, else the detected
    ///   system language, else English
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        let default_language = self
            .default_language
            .or_else(detect_system_language)
            .unwrap_or_default();
        StoreConfig {
            default_language,
            default_theme: self.default_theme,
            language_key: self.language_storage_key.clone(),
            theme_key: self.theme_storage_key.clone(),
        }
    }
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file
///
/// Output:
/// - `Settings` with every recognised key applied over the defaults
///
/// Details:
/// - Empty values mean "use the default" for every key
/// - Invalid language or theme values are logged and ignored
/// - Storage keys containing `=` are ignored; keys that normalize to the same entry
///   reset both to the defaults
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(val_raw.trim());
        if val.is_empty() {
            continue;
        }
        match key.as_str() {
            "default_language" | "language" => match val.parse::<Language>() {
                Ok(lang) => settings.default_language = Some(lang),
                Err(e) => tracing::warn!(error = %e, "ignoring default_language in settings.conf"),
            },
            "default_theme" | "theme" => match val.parse::<ThemeVariant>() {
                Ok(theme) => settings.default_theme = theme,
                Err(e) => tracing::warn!(error = %e, "ignoring default_theme in settings.conf"),
            },
            "language_storage_key" if is_valid_storage_key(&key, val) => {
                settings.language_storage_key = val.to_string();
            }
            "theme_storage_key" if is_valid_storage_key(&key, val) => {
                settings.theme_storage_key = val.to_string();
            }
            "language_storage_key" | "theme_storage_key" => {}
            "locales_dir" | "locales" => settings.locales_dir = Some(PathBuf::from(val)),
            _ => tracing::debug!(key = %key, "unknown settings key"),
        }
    }
    if normalize_key(&settings.language_storage_key) == normalize_key(&settings.theme_storage_key) {
        tracing::warn!(
            key = %settings.language_storage_key,
            "language and theme storage keys collide; using the default keys"
        );
        settings.language_storage_key = DEFAULT_LANGUAGE_KEY.to_string();
        settings.theme_storage_key = DEFAULT_THEME_KEY.to_string();
    }
    settings
}

/// What: Check that a storage key survives a `key = value` round trip.
///
/// Inputs:
/// - `setting`: Normalized settings key, for the diagnostic
/// - `value`: Proposed storage key
///
/// Output:
/// - `false` (with a warning) when the key contains `=`, which would split the entry
fn is_valid_storage_key(setting: &str, value: &str) -> bool {
    if value.contains('=') {
        tracing::warn!(setting, value, "ignoring storage key containing '='");
        return false;
    }
    true
}

/// What: Load settings, writing the skeleton on first run.
///
/// Inputs:
/// - `path`: Location of `settings.conf`
///
/// Output:
/// - Parsed settings, or defaults when the file is missing, empty or unreadable
pub fn load_settings(path: &Path) -> Settings {
    let file_empty = fs::metadata(path).map_or(true, |m| m.len() == 0);
    if file_empty {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot write settings skeleton"),
        }
        return parse_settings(SETTINGS_SKELETON_CONTENT);
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read settings; using defaults");
            Settings::default()
        }
    }
}
