//! Language and theme preferences.
//!
//! [`PreferenceStore`] owns the active [`Language`](crate::i18n::Language) and
//! [`ThemeVariant`]. It is constructed explicitly (no global state), persists through a
//! [`PreferenceStorage`] backend and notifies subscribers after each change.
//! Storage is best effort: unreadable or invalid values fall back to defaults, and write
//! failures only cost persistence for the rest of the session.

/// `key = value` file backend.
mod file;
/// Storage trait, error type and in-memory backend.
mod storage;
/// The store itself.
mod store;
/// Subscription registry and change events.
mod subscribers;
/// Theme variants and the root-element target.
mod theme;

pub use file::FileStorage;
pub use storage::{MemoryStorage, PreferenceStorage, StorageError};
pub use store::{Preference, PreferenceStore, StoreConfig};
pub use subscribers::{PreferenceChange, Subscription};
pub use theme::{DocumentRoot, ParseThemeError, ThemeTarget, ThemeVariant};
