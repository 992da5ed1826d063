//! Supported article languages.
//!
//! Each language selects both the Wiktionary edition (`de.wiktionary.org`,
//! `en.wiktionary.org`) and the extraction rule-set applied to its markup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A Wiktionary edition with a dedicated extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English Wiktionary (`en`).
    #[default]
    #[serde(rename = "en")]
    English,
    /// German Wiktionary (`de`).
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// The language code used in API hostnames and tags.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses a language code. Matching is exact: `"DE"` or `" de"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::English),
            "de" => Ok(Self::German),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}
