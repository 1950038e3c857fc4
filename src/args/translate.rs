//! Command-line translation lookups.

use tatsam::i18n::{Language, Translation, TranslationResolver, Translator};
use tatsam::site;

/// What: Print each key's resolved value, one per line.
///
/// Details:
/// - Tables are printed as JSON objects; misses print the key itself.
pub fn handle_translate(translator: &Translator<'_>, keys: &[String]) {
    for key in keys {
        match translator.resolve(key) {
            Translation::Text(text) => println!("{key}: {text}"),
            table @ Translation::Table(_) => println!("{key}: {table}"),
        }
    }
}

/// Print the header navigation as `label<TAB>href` lines.
pub fn handle_nav(translator: &Translator<'_>) {
    for item in site::navigation(translator) {
        println!("{}\t{}", item.label, item.href());
    }
}

/// Print the footer copyright line for the current year.
pub fn handle_footer(translator: &Translator<'_>) {
    println!("{}", site::copyright(translator, site::current_year()));
}

/// What: Report keys that one language defines and the other cannot resolve.
///
/// Output:
/// - `true` when both languages cover the same keys.
pub fn handle_check(resolver: &TranslationResolver) -> bool {
    let dictionary = resolver.dictionary();
    let mut complete = true;
    for from in Language::ALL {
        let to = from.other();
        let missing = dictionary.untranslated_keys(from, to);
        if missing.is_empty() {
            continue;
        }
        complete = false;
        println!("{} key(s) in '{from}' missing from '{to}':", missing.len());
        for key in &missing {
            println!("  {key}");
        }
        tracing::warn!(from = %from, to = %to, count = missing.len(), "untranslated keys");
    }
    if complete {
        println!("All translation keys are present in every language.");
    }
    complete
}
