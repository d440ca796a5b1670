//! Built-in locale data.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::locale::recognize::{date_order, recognize};
use crate::locale::{Convention, ParsedDateTime};

/// Names and separators used when rendering dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub era: &'static str,
    /// Replaces `/` in patterns
    pub date_separator: &'static str,
    /// Replaces `:` in patterns
    pub time_separator: &'static str,
}

const ENGLISH_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ENGLISH_MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_DAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const ENGLISH_DAYS_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Locale settings for formatting and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, empty for the invariant locale
    pub tag: &'static str,
    pub symbols: Symbols,
    pub short_date_pattern: &'static str,
    pub long_date_pattern: &'static str,
    pub short_time_pattern: &'static str,
    pub long_time_pattern: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: char,
    /// Two-digit years resolve to the latest year not after this one
    pub two_digit_year_max: i32,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// Culture-neutral conventions (English names, ISO-like ordering of time).
    pub fn invariant() -> Self {
        Locale {
            tag: "",
            symbols: Symbols {
                month_names_short: ENGLISH_MONTHS_SHORT,
                month_names_full: ENGLISH_MONTHS_FULL,
                day_names_short: ENGLISH_DAYS_SHORT,
                day_names_full: ENGLISH_DAYS_FULL,
                am_string: "AM",
                pm_string: "PM",
                era: "A.D.",
                date_separator: "/",
                time_separator: ":",
            },
            short_date_pattern: "MM/dd/yyyy",
            long_date_pattern: "dddd, dd MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            decimal_separator: '.',
            thousands_separator: ',',
            two_digit_year_max: 2029,
        }
    }

    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            tag: "en-US",
            short_date_pattern: "M/d/yyyy",
            long_date_pattern: "dddd, MMMM d, yyyy",
            short_time_pattern: "h:mm tt",
            long_time_pattern: "h:mm:ss tt",
            ..Self::invariant()
        }
    }

    /// British English locale.
    pub fn en_gb() -> Self {
        let invariant = Self::invariant();
        Locale {
            tag: "en-GB",
            symbols: Symbols {
                am_string: "am",
                pm_string: "pm",
                ..invariant.symbols
            },
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd, d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            ..invariant
        }
    }

    /// German (Germany) locale.
    pub fn de_de() -> Self {
        Locale {
            tag: "de-DE",
            symbols: Symbols {
                month_names_short: [
                    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov",
                    "Dez",
                ],
                month_names_full: [
                    "Januar",
                    "Februar",
                    "März",
                    "April",
                    "Mai",
                    "Juni",
                    "Juli",
                    "August",
                    "September",
                    "Oktober",
                    "November",
                    "Dezember",
                ],
                day_names_short: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
                day_names_full: [
                    "Sonntag",
                    "Montag",
                    "Dienstag",
                    "Mittwoch",
                    "Donnerstag",
                    "Freitag",
                    "Samstag",
                ],
                am_string: "",
                pm_string: "",
                era: "n. Chr.",
                date_separator: ".",
                time_separator: ":",
            },
            short_date_pattern: "dd.MM.yyyy",
            long_date_pattern: "dddd, d. MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            decimal_separator: ',',
            thousands_separator: '.',
            two_digit_year_max: 2029,
        }
    }

    /// French (France) locale.
    pub fn fr_fr() -> Self {
        Locale {
            tag: "fr-FR",
            symbols: Symbols {
                month_names_short: [
                    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.",
                    "oct.", "nov.", "déc.",
                ],
                month_names_full: [
                    "janvier",
                    "février",
                    "mars",
                    "avril",
                    "mai",
                    "juin",
                    "juillet",
                    "août",
                    "septembre",
                    "octobre",
                    "novembre",
                    "décembre",
                ],
                day_names_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
                day_names_full: [
                    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
                ],
                am_string: "",
                pm_string: "",
                era: "ap. J.-C.",
                date_separator: "/",
                time_separator: ":",
            },
            short_date_pattern: "dd/MM/yyyy",
            long_date_pattern: "dddd d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            decimal_separator: ',',
            thousands_separator: '\u{202f}',
            two_digit_year_max: 2029,
        }
    }

    /// Look up a built-in locale by tag (case-insensitive, `_` or `-`).
    /// The empty tag and `invariant` name the invariant locale.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_lowercase();
        match normalized.as_str() {
            "" | "invariant" => Some(Self::invariant()),
            "en" | "en-us" => Some(Self::en_us()),
            "en-gb" => Some(Self::en_gb()),
            "de" | "de-de" => Some(Self::de_de()),
            "fr" | "fr-fr" => Some(Self::fr_fr()),
            _ => None,
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s).ok_or_else(|| ConfigError::UnknownLocale(s.to_string()))
    }
}

impl Convention for Locale {
    fn short_date_pattern(&self) -> &str {
        self.short_date_pattern
    }

    fn long_date_pattern(&self) -> &str {
        self.long_date_pattern
    }

    fn short_time_pattern(&self) -> &str {
        self.short_time_pattern
    }

    fn long_time_pattern(&self) -> &str {
        self.long_time_pattern
    }

    fn parse_datetime(&self, text: &str) -> Option<ParsedDateTime> {
        recognize(
            text,
            &self.symbols,
            date_order(self.short_date_pattern),
            self.two_digit_year_max,
        )
    }

    fn symbols(&self) -> &Symbols {
        &self.symbols
    }
}
