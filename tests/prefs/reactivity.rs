//! Integration tests for change notification and the theme attribute.

#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use tatsam::i18n::{Dictionary, Language, TranslationResolver};
use tatsam::prefs::{
    DocumentRoot, MemoryStorage, PreferenceChange, PreferenceStore, StoreConfig, ThemeVariant,
};

#[test]
/// What: A subscriber re-resolves its text on every language change, never seeing a stale value.
///
/// Inputs:
/// - "Component" subscribed to the store, re-rendering `contact` from the change event
///
/// Output:
/// - Rendered text tracks each switch; nothing renders after unmount
fn subscriber_rerenders_with_new_language() {
    let resolver = Rc::new(TranslationResolver::new(
        Dictionary::builtin().expect("built-in locales parse"),
    ));
    let mut store = PreferenceStore::initialize(StoreConfig::default(), MemoryStorage::new());

    let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&rendered);
    let component_resolver = Rc::clone(&resolver);
    let mounted = store.subscribe(move |change| {
        if let PreferenceChange::Language { current, .. } = change {
            sink.borrow_mut()
                .push(component_resolver.text(*current, "contact"));
        }
    });

    store.set_language(Language::Hi);
    store.set_theme(ThemeVariant::Dark);
    store.set_language(Language::En);
    drop(mounted);
    store.set_language(Language::Hi);

    assert_eq!(*rendered.borrow(), ["संपर्क", "Contact"]);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
/// What: Several subscribers are notified in subscription order and unsubscribe independently.
fn subscribers_are_independent() {
    let mut store = PreferenceStore::initialize(StoreConfig::default(), MemoryStorage::new());
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let header_log = Rc::clone(&log);
    let header = store.subscribe(move |_| header_log.borrow_mut().push("header"));
    let footer_log = Rc::clone(&log);
    let _footer = store.subscribe(move |_| footer_log.borrow_mut().push("footer"));

    store.toggle_theme();
    header.unsubscribe();
    store.toggle_theme();

    assert_eq!(*log.borrow(), ["header", "footer", "footer"]);
}

#[test]
/// What: The document root always carries exactly the active theme's class.
fn document_root_tracks_theme() {
    let root = Rc::new(RefCell::new(DocumentRoot::default()));
    let mut store = PreferenceStore::initialize(StoreConfig::default(), MemoryStorage::new())
        .with_theme_target(Rc::clone(&root));
    assert!(root.borrow().has_class("light"));

    store.toggle_theme();
    assert!(root.borrow().has_class("dark"));
    assert!(!root.borrow().has_class("light"));
    assert_eq!(root.borrow().color_scheme(), Some(ThemeVariant::Dark));

    assert!(!store.set_theme_name("neon"));
    assert!(root.borrow().has_class("dark"));
}
