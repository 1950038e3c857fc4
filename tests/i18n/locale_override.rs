//! Integration tests for loading locales from a directory.

#![cfg(test)]

use std::fs;

use tatsam::i18n::{Language, Translation, TranslationResolver, load_dictionary};
use tempfile::TempDir;

#[test]
/// What: Files in a locales directory replace the built-in strings of their language only.
///
/// Inputs:
/// - Directory with a custom `en.yml` and a malformed `hi.yml`
///
/// Output:
/// - English from the file; Hindi from the built-in table
fn directory_overrides_per_language() {
    let dir = TempDir::new().expect("Failed to create temp directory for test");
    fs::write(
        dir.path().join("en.yml"),
        "en:\n  contact: \"Get in touch\"\n  aboutTitle:\n    our: \"Our\"\n",
    )
    .expect("Failed to write test locale file");
    fs::write(dir.path().join("hi.yml"), "hi: [unclosed").expect("Failed to write test locale file");

    let dictionary = load_dictionary(Some(dir.path())).expect("dictionary loads");
    let resolver = TranslationResolver::new(dictionary);

    assert_eq!(
        resolver.resolve(Language::En, "contact"),
        Translation::Text("Get in touch")
    );
    assert_eq!(
        resolver.resolve(Language::En, "home"),
        Translation::Text("home")
    );
    assert_eq!(
        resolver.resolve(Language::Hi, "contact"),
        Translation::Text("संपर्क")
    );
    assert_eq!(
        resolver.dictionary().untranslated_keys(Language::Hi, Language::En).len(),
        resolver.dictionary().leaf_keys(Language::Hi).len() - 2
    );
}

#[test]
fn missing_directory_uses_builtin_strings() {
    let dir = TempDir::new().expect("Failed to create temp directory for test");
    let dictionary =
        load_dictionary(Some(&dir.path().join("absent"))).expect("dictionary loads");
    assert_eq!(
        TranslationResolver::new(dictionary).resolve(Language::En, "home"),
        Translation::Text("Home")
    );
}

#[test]
/// What: A locale file keyed by another language never supplies this language's strings.
///
/// Inputs:
/// - `hi.yml` that is really an English file (`en:` root key)
///
/// Output:
/// - Hindi lookups use the built-in Hindi table; English stays built-in too
fn file_keyed_by_other_language_falls_back() {
    let dir = TempDir::new().expect("Failed to create temp directory for test");
    fs::write(dir.path().join("hi.yml"), "en:\n  contact: \"Contact\"\n")
        .expect("Failed to write test locale file");

    let resolver =
        TranslationResolver::new(load_dictionary(Some(dir.path())).expect("dictionary loads"));
    assert_eq!(
        resolver.resolve(Language::Hi, "contact"),
        Translation::Text("संपर्क")
    );
    assert_eq!(
        resolver.resolve(Language::En, "contact"),
        Translation::Text("Contact")
    );
}

#[test]
/// What: A locale key that does not hold a table falls back to the built-in table.
///
/// Inputs:
/// - `hi.yml` mapping `hi` to a list, then to a plain string
///
/// Output:
/// - Hindi keeps every built-in key in both cases
fn non_table_locale_falls_back() {
    let builtin_hi = tatsam::i18n::Dictionary::builtin()
        .expect("built-in locales parse")
        .leaf_keys(Language::Hi)
        .len();
    for content in ["hi:\n  - contact\n", "hi: \"x\"\n"] {
        let dir = TempDir::new().expect("Failed to create temp directory for test");
        fs::write(dir.path().join("hi.yml"), content).expect("Failed to write test locale file");

        let resolver =
            TranslationResolver::new(load_dictionary(Some(dir.path())).expect("dictionary loads"));
        assert_eq!(
            resolver.resolve(Language::Hi, "contact"),
            Translation::Text("संपर्क")
        );
        assert_eq!(resolver.dictionary().leaf_keys(Language::Hi).len(), builtin_hi);
    }
}
