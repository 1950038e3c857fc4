use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::config::{DEFAULT_LANGUAGE_KEY, DEFAULT_THEME_KEY};
use crate::i18n::Language;
use crate::prefs::storage::PreferenceStorage;
use crate::prefs::subscribers::{PreferenceChange, Subscribers, Subscription};
use crate::prefs::theme::{ThemeTarget, ThemeVariant};

/// Defaults and storage keys the store is initialized with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Language adopted when nothing valid is stored.
    pub default_language: Language,
    /// Theme adopted when nothing valid is stored.
    pub default_theme: ThemeVariant,
    /// Storage key for the language (e.g. "tatsam-language").
    pub language_key: String,
    /// Storage key for the theme (e.g. "tatsam-theme").
    pub theme_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            default_theme: ThemeVariant::Light,
            language_key: DEFAULT_LANGUAGE_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

/// The user's current choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preference {
    /// Active display language.
    pub language: Language,
    /// Active color theme.
    pub theme: ThemeVariant,
}

/// Owner of the active language and theme.
///
/// State changes only through the setters, which update memory first, then persist
/// (best effort), then notify subscribers. Reads always see the latest write.
pub struct PreferenceStore {
    /// Defaults and storage keys.
    config: StoreConfig,
    /// Current in-memory choice.
    current: Preference,
    /// Durable backend; failures are logged, never returned.
    storage: Box<dyn PreferenceStorage>,
    /// Optional presentation hook for the theme.
    theme_target: Option<Box<dyn ThemeTarget>>,
    /// Change listeners.
    subscribers: Subscribers,
}

/// What: Read and validate one stored preference.
///
/// Inputs:
/// - `storage`: Backend to read from
/// - `key`: Storage key
/// - `default`: Value adopted on absence, corruption or storage failure
///
/// Output:
/// - Stored value when it parses, else `default`
fn read_persisted<T>(storage: &dyn PreferenceStorage, key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    match storage.read(key) {
        Ok(Some(raw)) => match raw.parse::<T>() {
            Ok(value) => {
                tracing::debug!(key, value = %value, "restored preference");
                value
            }
            Err(e) => {
                tracing::warn!(key, error = %e, default = %default, "ignoring invalid stored preference");
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %e, default = %default, "cannot read stored preference");
            default
        }
    }
}

impl PreferenceStore {
    /// What: Build the store, restoring previously saved choices.
    ///
    /// Inputs:
    /// - `config`: Defaults and storage keys
    /// - `storage`: Durable backend
    ///
    /// Output:
    /// - Store holding the stored language/theme where valid, else the defaults
    ///
    /// Details:
    /// - Only reads; nothing is written until a setter changes a value
    pub fn initialize(config: StoreConfig, storage: impl PreferenceStorage + 'static) -> Self {
        let language = read_persisted(&storage, &config.language_key, config.default_language);
        let theme = read_persisted(&storage, &config.theme_key, config.default_theme);
        tracing::debug!(language = %language, theme = %theme, "preference store initialized");
        Self {
            config,
            current: Preference { language, theme },
            storage: Box::new(storage),
            theme_target: None,
            subscribers: Subscribers::default(),
        }
    }

    /// Attach a theme target and apply the current theme to it right away.
    pub fn attach_theme_target(&mut self, target: impl ThemeTarget + 'static) {
        let mut target: Box<dyn ThemeTarget> = Box::new(target);
        target.apply_theme(self.current.theme);
        self.theme_target = Some(target);
    }

    /// Builder form of [`Self::attach_theme_target`].
    #[must_use]
    pub fn with_theme_target(mut self, target: impl ThemeTarget + 'static) -> Self {
        self.attach_theme_target(target);
        self
    }

    /// Configuration the store was built with.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Current language and theme.
    #[must_use]
    pub const fn preference(&self) -> Preference {
        self.current
    }

    /// Active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.current.language
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeVariant {
        self.current.theme
    }

    /// What: Switch the active language.
    ///
    /// Inputs:
    /// - `language`: New language
    ///
    /// Details:
    /// - Setting the active language again is a no-op (no write, no notification)
    /// - Persistence failures are logged; the in-memory switch still happens
    pub fn set_language(&mut self, language: Language) {
        let previous = self.current.language;
        if previous == language {
            tracing::debug!(language = %language, "language unchanged");
            return;
        }
        self.current.language = language;
        let key = self.config.language_key.clone();
        self.persist(&key, language.code());
        tracing::info!(from = %previous, to = %language, "language changed");
        self.subscribers.notify(&PreferenceChange::Language {
            previous,
            current: language,
        });
    }

    /// What: Switch language from an untrusted code (e.g. a toggle's value).
    ///
    /// Output:
    /// - `true` when `code` named a supported language, `false` when it was rejected
    pub fn set_language_code(&mut self, code: &str) -> bool {
        match code.parse::<Language>() {
            Ok(language) => {
                self.set_language(language);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected language change");
                false
            }
        }
    }

    /// What: Switch the active theme.
    ///
    /// Details:
    /// - Same contract as [`Self::set_language`]
    /// - The theme target (if any) is updated before subscribers are notified
    pub fn set_theme(&mut self, theme: ThemeVariant) {
        let previous = self.current.theme;
        if previous == theme {
            tracing::debug!(theme = %theme, "theme unchanged");
            return;
        }
        self.current.theme = theme;
        let key = self.config.theme_key.clone();
        self.persist(&key, theme.name());
        if let Some(target) = self.theme_target.as_mut() {
            target.apply_theme(theme);
        }
        tracing::info!(from = %previous, to = %theme, "theme changed");
        self.subscribers.notify(&PreferenceChange::Theme {
            previous,
            current: theme,
        });
    }

    /// Switch theme from an untrusted name; `false` when it was rejected.
    pub fn set_theme_name(&mut self, name: &str) -> bool {
        match name.parse::<ThemeVariant>() {
            Ok(theme) => {
                self.set_theme(theme);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected theme change");
                false
            }
        }
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle_theme(&mut self) -> ThemeVariant {
        let next = self.current.theme.toggled();
        self.set_theme(next);
        next
    }

    /// What: Register a change callback.
    ///
    /// Output:
    /// - Guard that unsubscribes when dropped
    ///
    /// Details:
    /// - Callbacks run synchronously inside the setter, after state and storage are updated
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PreferenceChange) + 'static,
    {
        self.subscribers.subscribe(Rc::new(callback))
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Best-effort write; failures degrade the session to non-persistent.
    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.write(key, value) {
            tracing::warn!(key, value, error = %e, "failed to persist preference");
        }
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("theme_target", &self.theme_target.is_some())
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
