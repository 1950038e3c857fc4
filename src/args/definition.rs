//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;
use tatsam::i18n::{TranslationResolver, Translator};
use tatsam::prefs::PreferenceStore;

/// tatsam - translation lookup and language/theme preferences for the TATSAM site
#[derive(Parser, Debug)]
#[command(name = "tatsam")]
#[command(version)]
#[command(about = "Translation lookup and language/theme preferences for the TATSAM site", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Specify the configuration directory (default: ~/.config/tatsam)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Keep preference changes in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Switch the display language (en or hi)
    #[arg(short = 'L', long = "lang", value_name = "CODE")]
    pub language: Option<String>,

    /// Switch the color theme (light or dark)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Flip between light and dark theme
    #[arg(long, conflicts_with = "theme")]
    pub toggle_theme: bool,

    /// Resolve dotted translation keys in the active language (e.g., -t aboutTitle.our contact)
    #[arg(short, long, num_args = 1.., value_name = "KEY")]
    pub translate: Vec<String>,

    /// Print the header navigation in the active language
    #[arg(long)]
    pub nav: bool,

    /// Print the footer copyright line
    #[arg(long)]
    pub footer: bool,

    /// Report keys that are missing in one of the languages
    #[arg(long)]
    pub check: bool,

    /// Print the current language and theme (default when nothing else is requested)
    #[arg(long)]
    pub show: bool,
}

impl Args {
    /// Whether any output flag was given.
    const fn wants_output(&self) -> bool {
        !self.translate.is_empty() || self.nav || self.footer || self.check || self.show
    }

    /// Whether any preference change was requested.
    const fn changes_preferences(&self) -> bool {
        self.language.is_some() || self.theme.is_some() || self.toggle_theme
    }
}

/// What: Process all command-line arguments against a store and resolver.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `store`: Preference store (already initialized).
/// - `resolver`: Translation resolver.
///
/// Output:
/// - `true` when every requested action succeeded.
///
/// Details:
/// - Preference changes run first so that every printed string uses the new language.
/// - Falls back to `--show` when neither output nor changes were requested.
pub fn process_args(
    args: &Args,
    store: &mut PreferenceStore,
    resolver: &TranslationResolver,
) -> bool {
    use crate::args::{preferences, translate};

    let mut ok = true;

    if let Some(code) = &args.language {
        ok &= preferences::handle_set_language(store, code);
    }
    if let Some(name) = &args.theme {
        ok &= preferences::handle_set_theme(store, name);
    }
    if args.toggle_theme {
        preferences::handle_toggle_theme(store);
    }

    let translator = Translator::new(store, resolver);

    if !args.translate.is_empty() {
        translate::handle_translate(&translator, &args.translate);
    }
    if args.nav {
        translate::handle_nav(&translator);
    }
    if args.footer {
        translate::handle_footer(&translator);
    }
    if args.check {
        ok &= translate::handle_check(resolver);
    }
    if args.show || !(args.wants_output() || args.changes_preferences()) {
        preferences::handle_show(&translator, store);
    }

    ok
}
