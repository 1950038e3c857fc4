//! tatsam binary entrypoint: wires settings, preferences and translations together.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use tatsam::config::{ConfigPaths, load_settings};
use tatsam::i18n::{TranslationResolver, load_dictionary};
use tatsam::prefs::{FileStorage, MemoryStorage, PreferenceStorage, PreferenceStore};

struct TatsamTimer;

impl tracing_subscriber::fmt::time::FormatTime for TatsamTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config_dir>/logs/tatsam.log`, falling back to stderr.
///
/// Inputs:
/// - `paths`: Resolved configuration paths
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(paths: &ConfigPaths, level: &str) {
    let mut log_path = paths.logs_dir();
    log_path.push("tatsam.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(TatsamTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(TatsamTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() -> ExitCode {
    let args = args::Args::parse();
    let paths = ConfigPaths::resolve(args.config_dir.as_deref());
    init_logging(&paths, &args::determine_log_level(&args));
    tracing::info!(config_dir = %paths.root.display(), "tatsam starting");

    let settings = load_settings(&paths.settings_file());
    let dictionary = match load_dictionary(settings.locales_dir.as_deref()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            tracing::error!(error = %e, "cannot load translations");
            eprintln!("Cannot load translations: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolver = TranslationResolver::new(dictionary);

    let config = settings.store_config();
    let file = FileStorage::new(paths.preferences_file());
    let mut store = if args.no_persist {
        // Start from the saved choices but keep changes in this session only.
        let memory = MemoryStorage::new();
        for key in [&config.language_key, &config.theme_key] {
            if let Ok(Some(value)) = file.read(key) {
                memory.insert(key, &value);
            }
        }
        PreferenceStore::initialize(config, memory)
    } else {
        PreferenceStore::initialize(config, file)
    };

    let ok = args::process_args(&args, &mut store, &resolver);
    tracing::info!(ok, "tatsam exited");
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
