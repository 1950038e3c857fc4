//! Integration tests for preference persistence through `preferences.conf`.
//!
//! Tests cover:
//! - Round-trip of every language and theme across a simulated restart
//! - Default fallback when nothing (or garbage) is stored
//! - Settings-driven storage keys and defaults

#![cfg(test)]

use std::fs;

use tatsam::config::{ConfigPaths, load_settings};
use tatsam::i18n::Language;
use tatsam::prefs::{FileStorage, PreferenceStore, StoreConfig, ThemeVariant};
use tempfile::TempDir;

#[test]
/// What: A value set in one session is restored by the next, for every language and theme.
///
/// Inputs:
/// - File storage in a temp dir; store dropped and re-initialized between sessions
///
/// Output:
/// - The restored store reports the last set language and theme
fn file_storage_round_trips_across_restart() {
    let dir = TempDir::new().expect("Failed to create temp directory for test");
    let path = dir.path().join("preferences.conf");
    for language in Language::ALL {
        for theme in ThemeVariant::ALL {
            {
                let mut store =
                    PreferenceStore::initialize(StoreConfig::default(), FileStorage::new(&path));
                store.set_language(language);
                store.set_theme(theme);
            }
            let restored =
                PreferenceStore::initialize(StoreConfig::default(), FileStorage::new(&path));
            assert_eq!(restored.language(), language);
            assert_eq!(restored.theme(), theme);
        }
    }
}

#[test]
/// What: With no prior file, the configured default language applies and no file is created.
fn defaults_apply_without_stored_values() {
    let dir = TempDir::new().expect("Failed to create temp directory for test");
    let path = dir.path().join("preferences.conf");
    let store = PreferenceStore::initialize(StoreConfig::default(), FileStorage::new(&path));
    assert_eq!(store.language(), Language::En);
    assert_eq!(store.theme(), ThemeVariant::Light);
    assert!(!path.exists());
}

#[test]
/// What: Corrupted values are ignored and the next valid write repairs the file.
fn corrupted_file_values_fall_back_and_get_repaired() {
    let dir = TempDir::new().expect("Failed to create temp directory for test");
    let path = dir.path().join("preferences.conf");
    fs::write(&path, "tatsam-language = klingon\ntatsam-theme = dark\n").expect("seed file");

    let mut store = PreferenceStore::initialize(StoreConfig::default(), FileStorage::new(&path));
    assert_eq!(store.language(), Language::En);
    assert_eq!(store.theme(), ThemeVariant::Dark);

    store.set_language(Language::Hi);
    let content = fs::read_to_string(&path).expect("file exists");
    assert!(content.contains("tatsam-language = hi"));
    assert!(!content.contains("klingon"));
    assert!(content.contains("tatsam-theme = dark"));
}

#[test]
/// What: Storage keys and defaults come from settings.conf.
///
/// Inputs:
/// - Config dir with custom keys and a Hindi default
///
/// Output:
/// - First session starts in Hindi/dark; writes land under the custom keys
fn settings_drive_keys_and_defaults() {
    let dir = TempDir::new().expect("Failed to create temp directory for test");
    let paths = ConfigPaths::resolve(Some(dir.path()));
    fs::write(
        paths.settings_file(),
        "default_language = hi\ndefault_theme = dark\nlanguage_storage_key = site-lang\ntheme_storage_key = site-theme\n",
    )
    .expect("write settings");

    let settings = load_settings(&paths.settings_file());
    let config = settings.store_config();
    let mut store =
        PreferenceStore::initialize(config.clone(), FileStorage::new(paths.preferences_file()));
    assert_eq!(store.language(), Language::Hi);
    assert_eq!(store.theme(), ThemeVariant::Dark);

    store.set_language(Language::En);
    store.toggle_theme();
    let content = fs::read_to_string(paths.preferences_file()).expect("file exists");
    assert!(content.contains("site-lang = en"));
    assert!(content.contains("site-theme = light"));

    let restored = PreferenceStore::initialize(config, FileStorage::new(paths.preferences_file()));
    assert_eq!(restored.language(), Language::En);
    assert_eq!(restored.theme(), ThemeVariant::Light);
}
