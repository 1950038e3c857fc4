//! Locale file loading and parsing.

use std::fs;
use std::path::Path;

use crate::i18n::dictionary::{TranslationNode, TranslationTable};

/// What: Load a locale YAML file and parse it into a `TranslationTable`.
///
/// Inputs:
/// - `locale`: Locale code (e.g., "hi")
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<TranslationTable, String>` containing the locale's tree or error
///
/// # Errors
/// - Returns `Err` when the locale code is empty or has an invalid format
/// - Returns `Err` when the locale file does not exist in the locales directory
/// - Returns `Err` when the locale file cannot be read (I/O error)
/// - Returns `Err` when the locale file is empty
/// - Returns `Err` when the YAML content cannot be parsed
///
/// Details:
/// - Loads file from `locales_dir/{locale}.yml`
/// - Validates locale format before touching the filesystem
/// - The file's top-level key must equal `locale`
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<TranslationTable, String> {
    if locale.is_empty() {
        return Err("Locale code cannot be empty".to_string());
    }

    if !is_valid_locale_format(locale) {
        return Err(format!(
            "Invalid locale code format: '{locale}'. Expected format: language[-region] (e.g., 'en', 'hi-IN')"
        ));
    }

    let file_path = locales_dir.join(format!("{locale}.yml"));

    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents, locale).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {e}. Please check YAML syntax.",
            file_path.display()
        )
    })
}

/// What: Validate locale code format.
///
/// Inputs:
/// - `locale`: Locale code to validate
///
/// Output:
/// - `true` if format looks valid, `false` otherwise
fn is_valid_locale_format(locale: &str) -> bool {
    if locale.is_empty() || locale.len() > 20 {
        return false;
    }

    locale.chars().all(|c| c.is_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

/// What: Parse YAML content into a `TranslationTable`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
/// - `locale`: Locale code the file must be keyed by (e.g., "hi")
///
/// Output:
/// - `Result<TranslationTable, String>` containing the parsed tree
///
/// # Errors
/// - Returns `Err` when the content is not valid YAML or its root is not a mapping
/// - Returns `Err` when the root has no `locale` key, so another language's file is never
///   loaded under this locale
/// - Returns `Err` when the locale value is not a mapping or holds no usable entries
///
/// Details:
/// - Other top-level keys are ignored
/// - Nested mappings stay nested; nothing is flattened
pub fn parse_locale_yaml(yaml_content: &str, locale: &str) -> Result<TranslationTable, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let Some(root) = doc.as_mapping() else {
        return Err("Locale file root must be a mapping".to_string());
    };

    let Some(locale_value) = root.get(locale) else {
        return Err(format!("Locale file has no top-level '{locale}' key"));
    };

    let serde_norway::Value::Mapping(map) = locale_value else {
        return Err(format!("Locale '{locale}' must map to a table"));
    };

    let mut table = TranslationTable::new();
    build_table(map, "", &mut table);
    if table.is_empty() {
        return Err(format!("Locale '{locale}' has no translations"));
    }
    Ok(table)
}

/// What: Recursively convert a YAML mapping into translation nodes.
///
/// Inputs:
/// - `map`: Current YAML mapping
/// - `prefix`: Dotted path of `map`, used for diagnostics only
/// - `table`: Table to populate
///
/// Details:
/// - Numbers and booleans are stored as their string form
/// - Sequences and nulls have no place in the tree and are skipped with a warning
fn build_table(map: &serde_norway::Mapping, prefix: &str, table: &mut TranslationTable) {
    for (key, val) in map {
        let Some(key_str) = key.as_str() else {
            continue;
        };
        let path = if prefix.is_empty() {
            key_str.to_string()
        } else {
            format!("{prefix}.{key_str}")
        };
        let node = match val {
            serde_norway::Value::Mapping(inner) => {
                let mut nested = TranslationTable::new();
                build_table(inner, &path, &mut nested);
                TranslationNode::Table(nested)
            }
            serde_norway::Value::String(s) => TranslationNode::Text(s.clone()),
            serde_norway::Value::Number(n) => TranslationNode::Text(n.to_string()),
            serde_norway::Value::Bool(b) => TranslationNode::Text(b.to_string()),
            _ => {
                tracing::warn!(key = %path, "skipping locale entry that is neither text nor a table");
                continue;
            }
        };
        table.insert(key_str.to_string(), node);
    }
}
