//! Weekday and month name tables.
//!
//! The tables are immutable statics keyed by [`Language`]. Date formatting is
//! generic over [`NameLookup`], so callers can supply their own tables.

use serde::{Deserialize, Serialize};

/// Which family of names to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameCategory {
    /// Full weekday names, Sunday first (7 entries).
    Weekday,
    /// Abbreviated weekday names, Sunday first (7 entries).
    ShortWeekday,
    /// Full month names, January first (12 entries).
    Month,
    /// Abbreviated month names, January first (12 entries).
    ShortMonth,
}

impl NameCategory {
    /// Number of entries a table of this category must hold.
    pub fn table_len(self) -> usize {
        match self {
            NameCategory::Weekday | NameCategory::ShortWeekday => 7,
            NameCategory::Month | NameCategory::ShortMonth => 12,
        }
    }
}

/// Source of weekday and month names.
///
/// Weekday tables are indexed Sunday = 0; month tables January = 0.
pub trait NameLookup {
    /// The table for `category`.
    fn names(&self, category: NameCategory) -> &[&str];
}

/// Built-in languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "nb", alias = "no")]
    NorwegianBokmal,
    #[serde(rename = "nn")]
    NorwegianNynorsk,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "sv", alias = "se")]
    Swedish,
}

struct NameSet {
    weekdays: [&'static str; 7],
    short_weekdays: [&'static str; 7],
    months: [&'static str; 12],
    short_months: [&'static str; 12],
}

const ENGLISH: NameSet = NameSet {
    weekdays: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    short_weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

const BOKMAL: NameSet = NameSet {
    weekdays: ["Søndag", "Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag", "Lørdag"],
    short_weekdays: ["Søn", "Man", "Tir", "Ons", "Tor", "Fre", "Lør"],
    months: [
        "Januar", "Februar", "Mars", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Desember",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Des",
    ],
};

// Nynorsk month names are the same as bokmål.
const NYNORSK: NameSet = NameSet {
    weekdays: ["Søndag", "Måndag", "Tysdag", "Onsdag", "Torsdag", "Fredag", "Laurdag"],
    short_weekdays: ["Søn", "Mån", "Tys", "Ons", "Tor", "Fre", "Lau"],
    months: BOKMAL.months,
    short_months: BOKMAL.short_months,
};

const GERMAN: NameSet = NameSet {
    weekdays: ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"],
    short_weekdays: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    short_months: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
};

const SWEDISH: NameSet = NameSet {
    weekdays: ["Söndag", "Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag"],
    short_weekdays: ["Sön", "Mån", "Tis", "Ons", "Tor", "Fre", "Lör"],
    months: [
        "Januari", "Februari", "Mars", "April", "Maj", "Juni", "Juli", "Augusti", "September",
        "Oktober", "November", "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "Maj", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dec",
    ],
};

impl Language {
    /// Every built-in language.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::NorwegianBokmal,
        Language::NorwegianNynorsk,
        Language::German,
        Language::Swedish,
    ];

    /// Parse a language code, case-insensitively. Returns `None` for empty
    /// or unrecognized codes.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "no" | "nb" => Some(Language::NorwegianBokmal),
            "nn" => Some(Language::NorwegianNynorsk),
            "de" => Some(Language::German),
            "se" | "sv" => Some(Language::Swedish),
            _ => None,
        }
    }

    /// Canonical code of the language.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::NorwegianBokmal => "nb",
            Language::NorwegianNynorsk => "nn",
            Language::German => "de",
            Language::Swedish => "sv",
        }
    }

    fn table(self) -> &'static NameSet {
        match self {
            Language::English => &ENGLISH,
            Language::NorwegianBokmal => &BOKMAL,
            Language::NorwegianNynorsk => &NYNORSK,
            Language::German => &GERMAN,
            Language::Swedish => &SWEDISH,
        }
    }
}

impl NameLookup for Language {
    fn names(&self, category: NameCategory) -> &[&str] {
        let table = self.table();
        match category {
            NameCategory::Weekday => &table.weekdays,
            NameCategory::ShortWeekday => &table.short_weekdays,
            NameCategory::Month => &table.months,
            NameCategory::ShortMonth => &table.short_months,
        }
    }
}

/// Resolves language codes against a configured default.
///
/// Empty and unrecognized codes fall back to `default_language`, which is
/// English unless the caller configures otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Locale {
    /// Language used when a code does not resolve.
    pub default_language: Language,
}

impl Locale {
    /// A locale whose fallback is `default_language`.
    pub fn new(default_language: Language) -> Self {
        Self { default_language }
    }

    /// The language for `code`, or the default when the code is empty or
    /// unrecognized.
    pub fn resolve(&self, code: &str) -> Language {
        Language::from_code(code).unwrap_or(self.default_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve() {
        assert_eq!(Language::from_code("no"), Some(Language::NorwegianBokmal));
        assert_eq!(Language::from_code("NB"), Some(Language::NorwegianBokmal));
        assert_eq!(Language::from_code("nn"), Some(Language::NorwegianNynorsk));
        assert_eq!(Language::from_code("De"), Some(Language::German));
        assert_eq!(Language::from_code("se"), Some(Language::Swedish));
        assert_eq!(Language::from_code("sv"), Some(Language::Swedish));
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn locale_falls_back_to_default() {
        let english = Locale::default();
        assert_eq!(english.resolve(""), Language::English);
        assert_eq!(english.resolve("xx"), Language::English);

        let german = Locale::new(Language::German);
        assert_eq!(german.resolve(""), Language::German);
        assert_eq!(german.resolve("fr"), Language::German);
        assert_eq!(german.resolve("nn"), Language::NorwegianNynorsk);
    }

    #[test]
    fn every_table_has_expected_length() {
        let categories = [
            NameCategory::Weekday,
            NameCategory::ShortWeekday,
            NameCategory::Month,
            NameCategory::ShortMonth,
        ];
        for lang in Language::ALL {
            for category in categories {
                assert_eq!(
                    lang.names(category).len(),
                    category.table_len(),
                    "{lang:?} {category:?}"
                );
            }
        }
    }

    #[test]
    fn nynorsk_shares_bokmal_months() {
        assert_eq!(
            Language::NorwegianNynorsk.names(NameCategory::Month),
            Language::NorwegianBokmal.names(NameCategory::Month)
        );
        assert_eq!(Language::NorwegianNynorsk.names(NameCategory::Weekday)[1], "Måndag");
    }

    #[test]
    fn code_round_trips() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }
}
