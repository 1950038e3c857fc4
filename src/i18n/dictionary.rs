//! Static bilingual dictionary: a typed tree of strings per language.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Serialize;

use crate::i18n::language::Language;
use crate::i18n::loader::{load_locale_file, parse_locale_yaml};

/// Nested table of translation nodes, ordered by key.
pub type TranslationTable = BTreeMap<String, TranslationNode>;

/// One entry of the dictionary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// Leaf display string.
    Text(String),
    /// Nested table addressed by further key segments.
    Table(TranslationTable),
}

impl TranslationNode {
    /// Leaf text, if this node is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Table(_) => None,
        }
    }

    /// Nested table, if this node is one.
    #[must_use]
    pub const fn as_table(&self) -> Option<&TranslationTable> {
        match self {
            Self::Text(_) => None,
            Self::Table(t) => Some(t),
        }
    }
}

/// Embedded English strings.
const BUILTIN_EN: &str = include_str!("../../config/locales/en.yml");
/// Embedded Hindi strings.
const BUILTIN_HI: &str = include_str!("../../config/locales/hi.yml");

/// Read-only mapping from language to its translation tree.
///
/// Built once at startup and shared by reference afterwards; nothing mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Root table per language.
    tables: HashMap<Language, TranslationTable>,
}

impl Dictionary {
    /// What: Build a dictionary from already-parsed tables.
    ///
    /// Details:
    /// - Languages absent from `tables` behave as empty: every lookup misses.
    #[must_use]
    pub fn from_tables(tables: impl IntoIterator<Item = (Language, TranslationTable)>) -> Self {
        Self {
            tables: tables.into_iter().collect(),
        }
    }

    /// What: Parse the dictionary compiled into the binary.
    ///
    /// Output:
    /// - The site's full English/Hindi dictionary
    ///
    /// # Errors
    /// - Returns `Err` when an embedded locale file fails to parse
    pub fn builtin() -> Result<Self, String> {
        let mut tables = HashMap::new();
        for lang in Language::ALL {
            let table = parse_locale_yaml(builtin_source(lang), lang.code())
                .map_err(|e| format!("Built-in locale '{lang}' is invalid: {e}"))?;
            tables.insert(lang, table);
        }
        Ok(Self { tables })
    }

    /// What: Load `{code}.yml` for every language from a directory.
    ///
    /// Inputs:
    /// - `locales_dir`: Directory holding locale files
    ///
    /// Output:
    /// - Dictionary with one table per language
    ///
    /// # Errors
    /// - Returns `Err` only when the built-in fallback itself cannot be parsed
    ///
    /// Details:
    /// - A missing or broken file is logged and replaced by the built-in table of the
    ///   same language; there is no cross-language substitution
    pub fn load_dir(locales_dir: &Path) -> Result<Self, String> {
        let mut tables = HashMap::new();
        for lang in Language::ALL {
            let table = match load_locale_file(lang.code(), locales_dir) {
                Ok(table) => {
                    tracing::debug!(
                        language = %lang,
                        dir = %locales_dir.display(),
                        "loaded locale from directory"
                    );
                    table
                }
                Err(e) => {
                    tracing::warn!(
                        language = %lang,
                        error = %e,
                        "falling back to built-in locale"
                    );
                    parse_locale_yaml(builtin_source(lang), lang.code())?
                }
            };
            tables.insert(lang, table);
        }
        Ok(Self { tables })
    }

    /// Root table for `language`, if the dictionary has one.
    #[must_use]
    pub fn table(&self, language: Language) -> Option<&TranslationTable> {
        self.tables.get(&language)
    }

    /// What: Walk a dotted key path without emitting diagnostics.
    ///
    /// Inputs:
    /// - `language`: Language whose tree is walked
    /// - `key`: Dotted path such as `aboutTitle.our`
    ///
    /// Output:
    /// - The node at the end of the path, or `None` when any segment is missing
    ///
    /// Details:
    /// - Descending through a leaf string counts as missing
    /// - Depth is unbounded; each segment costs one map lookup
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&TranslationNode> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.table(language)?.get(first)?;
        for segment in segments {
            node = node.as_table()?.get(segment)?;
        }
        Some(node)
    }

    /// What: List every dotted leaf key present for `language`.
    ///
    /// Output:
    /// - Sorted leaf keys (tables are expanded, not listed themselves)
    #[must_use]
    pub fn leaf_keys(&self, language: Language) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(table) = self.table(language) {
            collect_leaf_keys(table, "", &mut keys);
        }
        keys
    }

    /// What: Leaf keys that `from` defines but `to` cannot resolve to text.
    ///
    /// Inputs:
    /// - `from`: Reference language
    /// - `to`: Language checked for coverage
    ///
    /// Output:
    /// - Sorted keys that would fall back to the raw key under `to`
    #[must_use]
    pub fn untranslated_keys(&self, from: Language, to: Language) -> Vec<String> {
        self.leaf_keys(from)
            .into_iter()
            .filter(|key| {
                !matches!(self.lookup(to, key), Some(TranslationNode::Text(_)))
            })
            .collect()
    }
}

/// Embedded YAML source for `language`.
const fn builtin_source(language: Language) -> &'static str {
    match language {
        Language::En => BUILTIN_EN,
        Language::Hi => BUILTIN_HI,
    }
}

/// Depth-first collection of dotted leaf keys.
fn collect_leaf_keys(table: &TranslationTable, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            TranslationNode::Text(_) => out.push(path),
            TranslationNode::Table(inner) => collect_leaf_keys(inner, &path, out),
        }
    }
}
