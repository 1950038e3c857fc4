//! Integration tests for dotted-key resolution.
//!
//! Tests cover:
//! - Idempotent resolution
//! - Raw-key fallback with a single diagnostic per miss
//! - Independence of the two languages
//! - Nested keys addressing leaves and whole tables

#![cfg(test)]

use std::io;
use std::sync::{Arc, Mutex};

use tatsam::i18n::{Dictionary, Language, Translation, TranslationResolver, Translator};
use tatsam::prefs::{MemoryStorage, PreferenceStore, StoreConfig};
use tracing_subscriber::fmt::MakeWriter;

/// Log sink shared with the test subscriber.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// What: Run `f` under a capturing subscriber and return its log output.
fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buf = SharedBuf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().expect("log buffer poisoned").clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}

fn builtin_resolver() -> TranslationResolver {
    TranslationResolver::new(Dictionary::builtin().expect("built-in locales parse"))
}

#[test]
/// What: Resolving the same key twice without a language change gives the same result.
///
/// Inputs:
/// - Every leaf key of both languages, plus a table key
///
/// Output:
/// - Identical `Translation` values on both calls
fn resolution_is_idempotent() {
    let resolver = builtin_resolver();
    for language in Language::ALL {
        let mut keys = resolver.dictionary().leaf_keys(language);
        keys.push("aboutTitle".to_string());
        for key in &keys {
            assert_eq!(resolver.resolve(language, key), resolver.resolve(language, key));
        }
    }
}

#[test]
/// What: A missing path returns itself and logs exactly one warning, in either language.
fn miss_returns_raw_key_with_one_diagnostic() {
    let resolver = builtin_resolver();
    for language in Language::ALL {
        let (result, logs) = capture_logs(|| {
            resolver
                .resolve(language, "nonexistent.key.path")
                .as_text()
                .map(str::to_string)
        });
        assert_eq!(result.as_deref(), Some("nonexistent.key.path"));
        let warnings: Vec<&str> = logs
            .lines()
            .filter(|line| line.contains("WARN"))
            .collect();
        assert_eq!(warnings.len(), 1, "unexpected log output: {logs}");
        assert!(warnings[0].contains("nonexistent.key.path"));
        assert!(warnings[0].contains(&format!("language={language}")));
    }
}

#[test]
/// What: Descending through a leaf string is a miss, not a partial result.
fn descending_through_text_is_a_miss() {
    let resolver = builtin_resolver();
    assert_eq!(
        resolver.resolve(Language::En, "contact.title"),
        Translation::Text("contact.title")
    );
    assert_eq!(
        resolver.resolve(Language::En, "aboutTitle.our.more"),
        Translation::Text("aboutTitle.our.more")
    );
}

#[test]
/// What: The two languages return their own configured strings and never each other's.
///
/// Inputs:
/// - Store switched en -> hi -> en, translator bound to it
///
/// Output:
/// - "Contact" while en is active, "संपर्क" while hi is active
fn languages_are_independent() {
    let resolver = builtin_resolver();
    let mut store = PreferenceStore::initialize(StoreConfig::default(), MemoryStorage::new());

    assert_eq!(Translator::new(&store, &resolver).t("contact"), "Contact");
    store.set_language(Language::Hi);
    assert_eq!(Translator::new(&store, &resolver).t("contact"), "संपर्क");
    store.set_language(Language::En);
    assert_eq!(Translator::new(&store, &resolver).t("contact"), "Contact");
}

#[test]
/// What: Nested keys reach leaves; the parent key returns the whole table.
fn nested_keys_resolve_leaves_and_tables() {
    let resolver = builtin_resolver();
    assert_eq!(
        resolver.resolve(Language::En, "aboutTitle.our"),
        Translation::Text("Our")
    );
    assert_eq!(
        resolver.resolve(Language::Hi, "aboutTitle.introduction"),
        Translation::Text("परिचय")
    );
    let Translation::Table(table) = resolver.resolve(Language::En, "aboutTitle") else {
        panic!("aboutTitle should resolve to a table");
    };
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("our").and_then(|n| n.as_text()), Some("Our"));
    assert_eq!(
        table.get("introduction").and_then(|n| n.as_text()),
        Some("Introduction")
    );
}

#[test]
fn placeholders_are_filled_per_language() {
    let resolver = builtin_resolver();
    let en = resolver.text_with(Language::En, "copyright", &[("year", &2026)]);
    let hi = resolver.text_with(Language::Hi, "copyright", &[("year", &2026)]);
    assert!(en.starts_with("© 2026 TATSAM"));
    assert!(hi.starts_with("© 2026 तत्सम्"));
    assert!(!en.contains("{year}") && !hi.contains("{year}"));
}
