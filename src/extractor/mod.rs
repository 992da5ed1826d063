//! Language dispatch and per-language extraction rule-sets.
//!
//! # Module Structure
//!
//! - `german`: rules for `de.wiktionary.org` markup
//! - `english`: rules for `en.wiktionary.org` markup
//!
//! Each rule-set parses the article once and runs independent,
//! first-match-wins landmark rules over the document. A missing landmark
//! leaves its field empty; only an unparseable document is an error.
//!
//! # Usage
//!
//! ```rust
//! use rs_wiktionary::extractor::{self, german};
//! use rs_wiktionary::{Article, Language, WordInfo};
//!
//! let html = "<p>Bedeutungen:</p><dl><dd>[1] Pflanze</dd></dl>";
//!
//! // Through the dispatcher
//! let info = extractor::extract(&Article::new("Baum", html, "de"))?;
//! assert_eq!(info.language(), Language::German);
//!
//! // Or a rule-set directly
//! let record = german::extract(html, "Baum")?;
//! assert_eq!(record.definitions, vec!["[1] Pflanze"]);
//! # Ok::<(), rs_wiktionary::Error>(())
//! ```

pub mod english;
pub mod german;

use tracing::instrument;

use crate::error::Result;
use crate::language::Language;
use crate::result::{Article, WordInfo};

/// Validate the article's language tag and run the matching rule-set.
///
/// Fails with [`Error::InvalidLanguage`](crate::Error::InvalidLanguage)
/// before any parsing when the tag is not supported.
#[instrument(skip_all, fields(title = %article.title, language = %article.language))]
pub fn extract(article: &Article) -> Result<WordInfo> {
    let language: Language = article.language.parse()?;
    extract_for(language, &article.html, &article.title)
}

/// Run the rule-set for an already validated language.
pub fn extract_for(language: Language, html: &str, title: &str) -> Result<WordInfo> {
    match language {
        Language::German => german::extract(html, title).map(WordInfo::German),
        Language::English => english::extract(html, title).map(WordInfo::English),
    }
}
