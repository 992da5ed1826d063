//! # rs-wiktionary
//!
//! Structured extraction of German and English Wiktionary articles.
//!
//! The library locates well-known landmarks in the rendered article markup
//! (the inflection table, the part-of-speech heading, marker paragraphs such
//! as `Bedeutungen:`, the headword line) and turns them into a typed record
//! per language.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_wiktionary::{extract, Article, WordInfo};
//!
//! let html = r#"<table><tr><th>Nominativ</th><td>Baum</td><td>Bäume</td></tr></table>"#;
//! let article = Article::new("Baum", html, "de");
//!
//! match extract(&article)? {
//!     WordInfo::German(record) => {
//!         assert_eq!(record.singular, "Baum");
//!         assert_eq!(record.plural, "Bäume");
//!     }
//!     WordInfo::English(_) => unreachable!(),
//! }
//! # Ok::<(), rs_wiktionary::Error>(())
//! ```
//!
//! ## Features
//!
//! - **German**: word, category, gender, singular/plural and declension,
//!   definitions, etymology, examples, idioms
//! - **English**: word, word class, plural, comparative/superlative,
//!   participles, countability, etymology, definitions
//! - **Retrieval** (`fetch` feature, on by default): search and article
//!   download through the MediaWiki API
//! - **Binaries** (`cli` feature): `extract_stdin` and `lookup`, with log
//!   output through `tracing-subscriber`
//!
//! Missing landmarks never fail an extraction; the corresponding fields stay
//! empty. Only an unsupported language tag or an unparseable document is an
//! error.

mod error;
mod language;
mod result;

/// DOM helpers and the shared sibling-scan primitive.
pub mod dom;

/// Language dispatch and the per-language rule-sets.
pub mod extractor;

/// Retrieval client configuration.
pub mod options;

/// Marker texts, selectors and compiled patterns used by the rule-sets.
pub mod patterns;

/// Article retrieval from the Wiktionary API.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use language::Language;
pub use options::Options;
pub use result::{Article, CaseForms, EnglishRecord, GermanRecord, WordInfo};

#[cfg(feature = "fetch")]
pub use fetch::Client;

/// Extracts the structured record for an article.
///
/// The article's language tag selects the rule-set.
///
/// # Errors
///
/// - [`Error::InvalidLanguage`] if the tag is not `"de"` or `"en"`; no
///   parsing is attempted.
/// - [`Error::DocumentParseFailure`] if the markup yields no document.
pub fn extract(article: &Article) -> Result<WordInfo> {
    extractor::extract(article)
}

/// Extracts a record from raw markup and a language tag, without a title.
///
/// The word is then read from the markup itself.
///
/// # Example
///
/// ```rust
/// use rs_wiktionary::{extract_html, Error};
///
/// assert!(matches!(extract_html("<p>x</p>", "fr"), Err(Error::InvalidLanguage(_))));
/// ```
pub fn extract_html(html: &str, language: &str) -> Result<WordInfo> {
    let language: Language = language.parse()?;
    extractor::extract_for(language, html, "")
}

/// Fetches the article for `word` with a default client and extracts it.
#[cfg(feature = "fetch")]
pub fn fetch_and_parse(word: &str, language: &str) -> Result<(Article, WordInfo)> {
    Client::new()?.fetch_and_parse(word, language)
}
