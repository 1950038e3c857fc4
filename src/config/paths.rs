use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/tatsam` when HOME is set and the directory can be created.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("tatsam");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// XDG config directory for tatsam (ensured to exist)
pub fn config_dir() -> PathBuf {
    // Prefer HOME ~/.config/tatsam first
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("tatsam");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Files and directories the binary reads and writes, rooted at one config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Root configuration directory.
    pub root: PathBuf,
}

impl ConfigPaths {
    /// What: Pick the configuration root.
    ///
    /// Inputs:
    /// - `override_dir`: Directory from `--config-dir`, if any
    ///
    /// Output:
    /// - Paths rooted at the override, else at [`config_dir`]
    ///
    /// Details:
    /// - The override directory is created if missing; failure is logged and left to
    ///   the individual readers and writers to report
    #[must_use]
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        let root = override_dir.map_or_else(config_dir, |dir| {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot create config directory");
            }
            dir.to_path_buf()
        });
        Self { root }
    }

    /// `settings.conf` under the root.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.root.join("settings.conf")
    }

    /// `preferences.conf` under the root, written by the preference store.
    #[must_use]
    pub fn preferences_file(&self) -> PathBuf {
        self.root.join("preferences.conf")
    }

    /// Logs directory under the root (ensured to exist).
    #[must_use]
    pub fn logs_dir(&self) -> PathBuf {
        let dir = self.root.join("logs");
        let _ = std::fs::create_dir_all(&dir);
        dir
    }
}
