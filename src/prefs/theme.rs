//! Color theme variants and the document-root attribute they drive.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Site color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeVariant {
    /// Every supported theme.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Name used for storage and as the root class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The theme the header toggle switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a known theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported theme '{}' (expected one of: light, dark)",
            self.input
        )
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for ThemeVariant {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Presentation hook that mirrors the active theme onto the rendering layer.
///
/// The store calls `apply_theme` once when a target is attached and again after
/// every theme change. The attribute is not part of the store's own state.
pub trait ThemeTarget {
    /// Reflect `theme` in the presentation layer.
    fn apply_theme(&mut self, theme: ThemeVariant);
}

/// Class list and `color-scheme` of the document root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    /// Classes currently set on the root element.
    classes: BTreeSet<String>,
    /// Value of the `color-scheme` style property, once a theme was applied.
    color_scheme: Option<ThemeVariant>,
}

impl DocumentRoot {
    /// Whether `class` is currently set.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add an unrelated class (e.g. from the host page).
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Current classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Value of `color-scheme`, if set.
    #[must_use]
    pub const fn color_scheme(&self) -> Option<ThemeVariant> {
        self.color_scheme
    }
}

impl ThemeTarget for DocumentRoot {
    fn apply_theme(&mut self, theme: ThemeVariant) {
        for variant in ThemeVariant::ALL {
            self.classes.remove(variant.name());
        }
        self.classes.insert(theme.name().to_string());
        self.color_scheme = Some(theme);
    }
}

impl<T: ThemeTarget> ThemeTarget for Rc<RefCell<T>> {
    fn apply_theme(&mut self, theme: ThemeVariant) {
        self.borrow_mut().apply_theme(theme);
    }
}
