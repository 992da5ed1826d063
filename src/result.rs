//! Article and record types.
//!
//! An [`Article`] is the raw input handed to the extractors; [`WordInfo`] is
//! the structured output, tagged by the language whose rule-set produced it.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A Wiktionary article as returned by the parse API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Page title, usually the headword itself.
    pub title: String,

    /// Rendered article markup.
    pub html: String,

    /// Language tag of the Wiktionary edition the article came from.
    ///
    /// Kept as the raw tag; it is validated when the article is extracted.
    pub language: String,
}

impl Article {
    /// Creates an article from its parts.
    #[must_use]
    pub fn new(title: impl Into<String>, html: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            html: html.into(),
            language: language.into(),
        }
    }
}

/// Singular and plural forms for one grammatical case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseForms {
    /// Case name as labelled in the table (`Nominativ`, `Genitiv`, ...).
    pub case: String,
    pub singular: String,
    pub plural: String,
}

/// Fields extracted from a German Wiktionary article.
///
/// Every field is independently optional: a missing landmark leaves the
/// field at its empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GermanRecord {
    pub word: String,

    /// Part of speech label, e.g. `Substantiv`.
    pub grammatical_category: String,

    /// Gender marker as printed in the heading (`m`, `f`, `n`).
    pub gender: String,

    /// Nominative singular cell of the inflection table.
    pub singular: String,

    /// Nominative plural cell of the inflection table.
    pub plural: String,

    /// All case rows of the inflection table, in table order.
    pub cases: Vec<CaseForms>,

    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub phrases: Vec<String>,
    pub etymology: String,
}

impl GermanRecord {
    /// Definite article implied by the gender marker.
    ///
    /// ```rust
    /// use rs_wiktionary::GermanRecord;
    ///
    /// let record = GermanRecord { gender: "m".into(), ..GermanRecord::default() };
    /// assert_eq!(record.definite_article(), Some("der"));
    /// ```
    #[must_use]
    pub fn definite_article(&self) -> Option<&'static str> {
        match self.gender.trim() {
            "m" => Some("der"),
            "f" => Some("die"),
            "n" => Some("das"),
            _ => None,
        }
    }
}

/// Fields extracted from an English Wiktionary article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishRecord {
    pub word: String,

    /// Heading of the part-of-speech section holding the definitions.
    pub word_class: String,

    pub plural: String,

    /// Forms labelled `comparative` / `superlative` on the headword line.
    pub comparative: String,
    pub superlative: String,

    /// Forms whose headword-line label names a participle, in line order.
    pub participles: Vec<String>,

    /// Countability label of a noun headword line; `None` when unlabelled.
    ///
    /// `countable and uncountable` counts as countable.
    pub countable: Option<bool>,

    pub etymology: String,
    pub definitions: Vec<String>,
}

/// Structured result of extracting an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "language")]
pub enum WordInfo {
    #[serde(rename = "de")]
    German(GermanRecord),
    #[serde(rename = "en")]
    English(EnglishRecord),
}

impl WordInfo {
    /// Language whose rule-set produced this record.
    #[must_use]
    pub const fn language(&self) -> Language {
        match self {
            Self::German(_) => Language::German,
            Self::English(_) => Language::English,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::German(record) => &record.word,
            Self::English(record) => &record.word,
        }
    }

    #[must_use]
    pub fn definitions(&self) -> &[String] {
        match self {
            Self::German(record) => &record.definitions,
            Self::English(record) => &record.definitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definite_article_from_gender() {
        let mut record = GermanRecord::default();
        assert_eq!(record.definite_article(), None);

        for (gender, article) in [("m", "der"), ("f", "die"), ("n", "das")] {
            record.gender = gender.to_string();
            assert_eq!(record.definite_article(), Some(article));
        }

        record.gender = "m, f".to_string();
        assert_eq!(record.definite_article(), None);
    }

    #[test]
    fn test_word_info_accessors() {
        let info = WordInfo::English(EnglishRecord {
            word: "tree".into(),
            definitions: vec!["A perennial woody plant.".into()],
            ..EnglishRecord::default()
        });

        assert_eq!(info.language(), Language::English);
        assert_eq!(info.word(), "tree");
        assert_eq!(info.definitions().len(), 1);
    }

    #[test]
    fn test_word_info_serializes_with_language_tag() {
        let info = WordInfo::German(GermanRecord {
            word: "Baum".into(),
            ..GermanRecord::default()
        });

        let json = serde_json::to_value(&info).unwrap_or_default();
        assert_eq!(json["language"], "de");
        assert_eq!(json["word"], "Baum");

        let back: Option<WordInfo> = serde_json::from_value(json).ok();
        assert_eq!(back, Some(info));
    }

    #[test]
    fn test_english_headword_fields_serialize() {
        let info = WordInfo::English(EnglishRecord {
            word: "big".into(),
            comparative: "bigger".into(),
            countable: Some(false),
            ..EnglishRecord::default()
        });

        let json = serde_json::to_value(&info).unwrap_or_default();
        assert_eq!(json["language"], "en");
        assert_eq!(json["comparative"], "bigger");
        assert_eq!(json["countable"], false);
        assert_eq!(json["participles"], serde_json::json!([]));
    }
}
