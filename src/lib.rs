//! Library entry for tatsam: bilingual translation lookup and the language/theme
//! preference store behind the TATSAM literary society site.

pub mod config;
pub mod i18n;
pub mod prefs;
pub mod site;

#[cfg(test)]
mod test_utils;
