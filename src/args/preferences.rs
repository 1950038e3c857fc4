//! Command-line handling of language and theme preferences.

use tatsam::i18n::Translator;
use tatsam::prefs::PreferenceStore;

/// What: Apply `--lang`.
///
/// Output:
/// - `false` (with a message on stderr) when the code is not a supported language.
pub fn handle_set_language(store: &mut PreferenceStore, code: &str) -> bool {
    tracing::info!(code = %code, "language change requested from CLI");
    if store.set_language_code(code) {
        true
    } else {
        eprintln!("Unsupported language '{code}'. Use one of: en, hi");
        false
    }
}

/// What: Apply `--theme`.
///
/// Output:
/// - `false` (with a message on stderr) when the name is not a supported theme.
pub fn handle_set_theme(store: &mut PreferenceStore, name: &str) -> bool {
    tracing::info!(name = %name, "theme change requested from CLI");
    if store.set_theme_name(name) {
        true
    } else {
        eprintln!("Unsupported theme '{name}'. Use one of: light, dark");
        false
    }
}

/// Apply `--toggle-theme`.
pub fn handle_toggle_theme(store: &mut PreferenceStore) {
    let theme = store.toggle_theme();
    tracing::info!(theme = %theme, "theme toggled from CLI");
}

/// What: Print the active preferences.
///
/// Details:
/// - The language is shown with its own toggle label (e.g., "hi (हिंदी)").
pub fn handle_show(translator: &Translator<'_>, store: &PreferenceStore) {
    let pref = store.preference();
    println!(
        "language = {} ({})",
        pref.language,
        translator.t(pref.language.label_key())
    );
    println!("theme = {}", pref.theme);
}
