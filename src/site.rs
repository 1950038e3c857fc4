//! Site structure that the presentation layer renders through the translator.

use chrono::Datelike;

use crate::i18n::{Language, Translator};

/// Page sections in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero banner.
    Home,
    /// About / introduction.
    About,
    /// Events.
    Events,
    /// Team.
    Team,
    /// Achievements.
    Achievements,
    /// Publications.
    Publications,
    /// Gallery.
    Gallery,
    /// Contact.
    Contact,
}

impl Section {
    /// Every section in header order.
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::About,
        Self::Events,
        Self::Team,
        Self::Achievements,
        Self::Publications,
        Self::Gallery,
        Self::Contact,
    ];

    /// Dictionary key of the section's navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Events => "events",
            Self::Team => "team",
            Self::Achievements => "achievements",
            Self::Publications => "publications",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    /// Element id the navigation scrolls to.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "hero",
            Self::About => "about",
            Self::Events => "events",
            Self::Team => "team",
            Self::Achievements => "achievements",
            Self::Publications => "publications",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    /// Whether the footer's quick links list this section.
    #[must_use]
    pub const fn in_quick_links(self) -> bool {
        !matches!(self, Self::Achievements)
    }
}

/// A rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Section the entry points at.
    pub section: Section,
    /// Localized label.
    pub label: String,
}

impl NavItem {
    /// Fragment link, e.g. `#hero`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.section.anchor())
    }
}

/// Header navigation in the active language.
#[must_use]
pub fn navigation(t: &Translator<'_>) -> Vec<NavItem> {
    Section::ALL
        .into_iter()
        .map(|section| NavItem {
            section,
            label: t.t(section.label_key()),
        })
        .collect()
}

/// Footer quick links in the active language.
#[must_use]
pub fn quick_links(t: &Translator<'_>) -> Vec<NavItem> {
    navigation(t)
        .into_iter()
        .filter(|item| item.section.in_quick_links())
        .collect()
}

/// A language toggle option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Language the option selects.
    pub language: Language,
    /// Label as configured for the active language.
    pub label: String,
    /// Whether this is the active language.
    pub selected: bool,
}

/// Options of the language toggle group, primary language first.
#[must_use]
pub fn language_options(t: &Translator<'_>) -> Vec<LanguageOption> {
    let active = t.language();
    Language::ALL
        .into_iter()
        .map(|language| LanguageOption {
            language,
            label: t.t(language.label_key()),
            selected: language == active,
        })
        .collect()
}

/// Footer copyright line for `year`.
#[must_use]
pub fn copyright(t: &Translator<'_>, year: i32) -> String {
    t.t_with("copyright", &[("year", &year)])
}

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
