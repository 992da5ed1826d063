//! Compiled regex patterns, marker texts and CSS selectors for the landmark
//! rules.
//!
//! Marker texts are matched against the rendered text of Wiktionary markup,
//! so they are kept exactly as the German and English editions print them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization
// =============================================================================

/// Any run of Unicode whitespace.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

// =============================================================================
// German Edition
// =============================================================================

/// Header cell text marking the nominative row of the inflection table.
pub const DE_NOMINATIVE: &str = "Nominativ";

/// Case rows collected from the inflection table, in grammatical order.
pub const DE_CASES: [&str; 4] = ["Nominativ", "Genitiv", "Dativ", "Akkusativ"];

/// Heading level used for part-of-speech sections (`Substantiv, m`).
pub const DE_WORD_CLASS_HEADING: &str = "h3";

/// Link inside the part-of-speech heading that names the category.
pub const DE_WORD_CLASS_LINK: &str = r#"a[title="Hilfe:Wortart"]"#;

/// Emphasis inside the part-of-speech heading that carries the gender.
pub const DE_GENDER_MARK: &str = "em";

/// Paragraph marker introducing the list of senses.
pub const DE_DEFINITIONS: &str = "Bedeutungen:";

/// Paragraph marker introducing the etymology.
pub const DE_ETYMOLOGY: &str = "Herkunft:";

/// Paragraph marker introducing usage examples.
pub const DE_EXAMPLES: &str = "Beispiele:";

/// Paragraph marker introducing idioms.
pub const DE_PHRASES: &str = "Redewendungen:";

/// Item element of the description lists following a marker paragraph.
pub const DE_LIST_ITEM: &str = "dd";

/// List wrapping nested sub-items of a marker list item.
pub const DE_SUB_LIST: &str = "dl";

// =============================================================================
// English Edition
// =============================================================================

/// Italic label preceding the plural forms on the headword line.
pub const EN_PLURAL: &str = "plural";

/// Italic labels preceding the adjective comparison forms.
pub const EN_COMPARATIVE: &str = "comparative";
pub const EN_SUPERLATIVE: &str = "superlative";

/// Substring of every verb-form label naming a participle
/// (`present participle`, `simple past and past participle`).
pub const EN_PARTICIPLE: &str = "participle";

/// Countability label word on a noun headword line (`uncountable` is a
/// different word).
pub const EN_COUNTABLE: &str = "countable";

/// Italic connectors between alternative forms (`<b>a</b> <i>or</i> <b>b</b>`).
/// Any other italic element starts the next label.
pub const EN_FORM_CONNECTORS: [&str; 2] = ["or", "and"];

/// Elements carrying the headword on the headword line.
pub const EN_HEADWORD: &str = ".headword-line, .headword";

/// Anchor of the etymology heading (`Etymology`, `Etymology_1`, ...).
pub const EN_ETYMOLOGY_ANCHOR: &str = r#"[id^="Etymology"]"#;

/// Heading tags used by section headings.
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Heading tags that can carry an English part-of-speech section.
pub const EN_WORD_CLASS_HEADINGS: [&str; 3] = ["h3", "h4", "h5"];

/// Wrapper class newer MediaWiki versions put around headings.
pub const MW_HEADING_CLASS: &str = "mw-heading";

/// Block-level tags whose boundaries separate words in extracted text.
pub const BLOCK_TAGS: [&str; 14] = [
    "p", "div", "br", "dl", "dd", "dt", "ul", "ol", "li", "table", "tr", "td", "th", "blockquote",
];
