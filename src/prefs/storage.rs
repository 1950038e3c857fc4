//! Durable key/value storage behind the preference store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// What: Error type for preference persistence.
///
/// Details:
/// - The store logs and swallows these; they never reach a setter's caller.
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// The backend is disabled or out of space.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// String key/value persistence addressed by storage key.
pub trait PreferenceStorage {
    /// What: Read the value stored under `key`.
    ///
    /// Output:
    /// - `Ok(None)` when nothing is stored under `key`
    ///
    /// # Errors
    /// - Returns `Err` when the backend cannot be read
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// What: Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - Returns `Err` when the backend cannot be written
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage with a shareable handle.
///
/// Clones share the same map, so a test can keep one handle, drop the store and
/// build a fresh one over the same data to simulate a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    /// Shared values; `None` marks storage as unavailable.
    values: Rc<RefCell<Option<HashMap<String, String>>>>,
}

impl MemoryStorage {
    /// Empty, working storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(Some(HashMap::new()))),
        }
    }

    /// Storage on which every read and write fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            values: Rc::new(RefCell::new(None)),
        }
    }

    /// Raw value under `key`, bypassing the trait.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .borrow()
            .as_ref()
            .and_then(|map| map.get(key).cloned())
    }

    /// Seed a value directly, e.g. a corrupted entry from an older version.
    pub fn insert(&self, key: &str, value: &str) {
        if let Some(map) = self.values.borrow_mut().as_mut() {
            map.insert(key.to_string(), value.to_string());
        }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.values.borrow().as_ref() {
            Some(map) => Ok(map.get(key).cloned()),
            None => Err(StorageError::Unavailable("memory storage disabled".to_string())),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.values.borrow_mut().as_mut() {
            Some(map) => {
                map.insert(key.to_string(), value.to_string());
                Ok(())
            }
            None => Err(StorageError::Unavailable("memory storage disabled".to_string())),
        }
    }
}
