//! The two content locales.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A content language variant.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the base identifier space for paths and extraction.
    #[default]
    En,
    /// Korean, served from the alternate content directory.
    Ko,
}

impl Locale {
    /// Every recognised locale, default first.
    pub const ALL: [Self; 2] = [Self::En, Self::Ko];

    #[must_use]
    /// Short code used in config files and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    #[must_use]
    /// Name of the locale written in that locale.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ko => "한국어",
        }
    }

    #[must_use]
    /// Whether this is the default locale.
    pub fn is_default(self) -> bool {
        self == Self::default()
    }

    #[must_use]
    /// The other locale, for a two-way toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ko,
            Self::Ko => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A locale code that is neither `en` nor `ko`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale {:?}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ko" => Ok(Self::Ko),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
