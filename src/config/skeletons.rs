/// Skeleton settings file written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# TATSAM site settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
#-----------------------------------------------------------------------------------------------------------------------\n\
#\n\
# Language used when no preference has been saved yet: en or hi.\n\
# Leave empty to detect it from LC_ALL / LC_MESSAGES / LANG (falls back to en).\n\
default_language =\n\
#\n\
# Theme used when no preference has been saved yet: light or dark.\n\
default_theme = light\n\
#\n\
# Keys under which the chosen language and theme are saved in preferences.conf.\n\
language_storage_key = tatsam-language\n\
theme_storage_key = tatsam-theme\n\
#\n\
# Directory holding en.yml and hi.yml. Leave empty to use the built-in strings.\n\
locales_dir =\n";

/// Skeleton preferences file; the store appends its entries below the header.
pub const PREFERENCES_SKELETON_CONTENT: &str = "# TATSAM saved preferences\n\
#\n\
# Written by the site whenever the language or theme is changed.\n\
# Safe to delete: defaults from settings.conf apply again.\n";
