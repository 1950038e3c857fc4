//! `key = value` file backend for preferences.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::parsing::{normalize_key, strip_inline_comment};
use crate::config::skeletons::PREFERENCES_SKELETON_CONTENT;
use crate::prefs::storage::{PreferenceStorage, StorageError};

/// Preferences persisted as `key = value` lines, one file per profile.
///
/// Comments and unrelated keys survive rewrites. Key matching ignores case and
/// treats `-`, `.` and spaces like `_`, so `tatsam-language` and `TATSAM_LANGUAGE`
/// address the same entry.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Backing file; created lazily on first write.
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Read the file as lines, seeding new or empty files from the skeleton.
    ///
    /// # Errors
    /// - Returns `Err` when an existing, non-empty file cannot be read
    fn current_lines(&self) -> Result<Vec<String>, StorageError> {
        let file_empty = fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let content = if file_empty {
            PREFERENCES_SKELETON_CONTENT.to_string()
        } else {
            fs::read_to_string(&self.path)?
        };
        Ok(content.lines().map(ToString::to_string).collect())
    }
}

/// What: Split a config line into normalized key and value.
///
/// Output:
/// - `None` for blank lines, comments and lines without `=`
fn split_entry(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    Some((normalize_key(raw_key), strip_inline_comment(raw_val.trim())))
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let wanted = normalize_key(key);
        // Last assignment wins, matching how settings.conf is read.
        let value = content
            .lines()
            .filter_map(split_entry)
            .filter(|(k, _)| *k == wanted)
            .map(|(_, v)| v.to_string())
            .last();
        Ok(value.filter(|v| !v.is_empty()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut lines = self.current_lines()?;
        let wanted = normalize_key(key);
        let mut replaced = false;
        for line in &mut lines {
            if split_entry(line).is_some_and(|(k, _)| k == wanted) {
                *line = format!("{key} = {value}");
                replaced = true;
            }
        }
        if !replaced {
            lines.push(format!("{key} = {value}"));
        }
        let mut new_content = lines.join("\n");
        new_content.push('\n');
        fs::write(&self.path, new_content)?;
        tracing::debug!(path = %self.path.display(), key, value, "persisted preference");
        Ok(())
    }
}
