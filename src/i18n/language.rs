//! The closed set of display languages.

use std::fmt;
use std::str::FromStr;

/// UI language of the site.
///
/// The set is closed: stored values and command-line input outside of it are
/// rejected rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// English, the primary locale.
    #[default]
    En,
    /// Hindi, the secondary locale.
    Hi,
}

impl Language {
    /// Every supported language, primary first.
    pub const ALL: [Self; 2] = [Self::En, Self::Hi];

    /// What: Short locale code used for storage and locale file names.
    ///
    /// Output:
    /// - `"en"` or `"hi"`
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Dictionary key holding this language's label for the language toggle.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::En => "english",
            Self::Hi => "hindi",
        }
    }

    /// What: The other language of the pair.
    ///
    /// Details:
    /// - Used by the one-button language switch; the toggle group sets values explicitly.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }

    /// What: Map a full locale tag (e.g. "hi-IN", "en_GB") onto a supported language.
    ///
    /// Inputs:
    /// - `locale`: Locale tag as produced by system detection
    ///
    /// Output:
    /// - `Some(Language)` when the primary subtag names a supported language, else `None`
    #[must_use]
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale.trim().split(['-', '_', '.']).next()?;
        primary.parse().ok()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not one of the supported language codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported language code '{}' (expected one of: en, hi)",
            self.input
        )
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            _ => Err(ParseLanguageError {
                input: s.to_string(),
            }),
        }
    }
}
