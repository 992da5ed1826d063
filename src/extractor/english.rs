//! English Wiktionary rule-set.
//!
//! The English edition puts inflected forms on the headword line as italic
//! labels followed by bold forms (`<i>plural</i> <b>trees</b>`,
//! `<i>comparative</i> <b>bigger</b>`), the etymology in the paragraph after
//! an `Etymology` heading, and the senses in the ordered list after the
//! headword paragraph.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::error::Result;
use crate::patterns::{
    EN_COMPARATIVE, EN_COUNTABLE, EN_ETYMOLOGY_ANCHOR, EN_FORM_CONNECTORS, EN_HEADWORD,
    EN_PARTICIPLE, EN_PLURAL, EN_SUPERLATIVE, EN_WORD_CLASS_HEADINGS, HEADING_TAGS,
    MW_HEADING_CLASS,
};
use crate::result::EnglishRecord;

/// Extract an [`EnglishRecord`] from English Wiktionary markup.
///
/// `title` is the article title; when blank, the word is read from the
/// headword instead.
pub fn extract(html: &str, title: &str) -> Result<EnglishRecord> {
    let doc = dom::parse(html)?;
    let body = doc.select("body");

    let mut record = EnglishRecord {
        word: title.trim().to_string(),
        plural: plural(&body),
        etymology: etymology(&body),
        ..EnglishRecord::default()
    };

    if let Some(paragraph) = headword_paragraph(&body) {
        if record.word.is_empty() {
            record.word = dom::trimmed_text(&dom::query_selector(&paragraph, ".headword"));
        }
        record.word_class = word_class(&paragraph);
        record.comparative = labelled_forms(&paragraph, |label| label == EN_COMPARATIVE)
            .first()
            .map(|forms| forms.join(" "))
            .unwrap_or_default();
        record.superlative = labelled_forms(&paragraph, |label| label == EN_SUPERLATIVE)
            .first()
            .map(|forms| forms.join(" "))
            .unwrap_or_default();
        record.participles = labelled_forms(&paragraph, |label| label.contains(EN_PARTICIPLE))
            .into_iter()
            .flatten()
            .collect();
        record.countable = countability(&paragraph);
        record.definitions = definitions(&paragraph);
    } else {
        debug!("headword paragraph not found");
    }

    Ok(record)
}

/// Bold forms following the first `plural` label, space separated.
fn plural(body: &Selection) -> String {
    let Some(label) = dom::find_first_containing(body, "i", EN_PLURAL) else {
        debug!("plural label not found");
        return String::new();
    };

    dom::collect_siblings_until(&label, |_| false)
        .iter()
        .filter(|sibling| dom::has_tag(sibling, &["b"]))
        .map(bold_form)
        .filter(|form| !form.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn bold_form(bold: &Selection) -> String {
    dom::normalize_whitespace(&dom::text_content(bold))
}

/// Bold forms after each italic label on the headword line accepted by
/// `wanted`, one group per label, in line order.
///
/// A group runs up to the next italic element that is not a connector
/// (`or`, `and`), so `<i>comparative</i> <b>a</b>, <i>superlative</i>
/// <b>b</b>` keeps the two forms apart.
fn labelled_forms<F>(paragraph: &Selection, wanted: F) -> Vec<Vec<String>>
where
    F: Fn(&str) -> bool,
{
    paragraph
        .select("i")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|label| wanted(&label_text(label)))
        .map(|label| {
            dom::collect_siblings_until(&label, |s| dom::has_tag(s, &["i"]) && !is_connector(s))
                .iter()
                .filter(|sibling| dom::has_tag(sibling, &["b"]))
                .map(bold_form)
                .filter(|form| !form.is_empty())
                .collect()
        })
        .collect()
}

fn label_text(label: &Selection) -> String {
    dom::normalize_whitespace(&dom::text_content(label)).to_lowercase()
}

fn is_connector(label: &Selection) -> bool {
    let text = label_text(label);
    EN_FORM_CONNECTORS.contains(&text.as_str())
}

/// Countability from the first headword-line label mentioning it.
///
/// `countable and uncountable` and `usually countable` count as countable;
/// `uncountable` and `usually uncountable` do not.
fn countability(paragraph: &Selection) -> Option<bool> {
    paragraph
        .select("i")
        .nodes()
        .iter()
        .map(|node| label_text(&Selection::from(*node)))
        .find(|text| text.contains(EN_COUNTABLE))
        .map(|text| text.split(|c: char| !c.is_alphabetic()).any(|word| word == EN_COUNTABLE))
}

/// Paragraph following the etymology heading.
fn etymology(body: &Selection) -> String {
    let anchor = dom::query_selector(body, EN_ETYMOLOGY_ANCHOR);
    if !anchor.exists() {
        debug!("etymology heading not found");
        return String::new();
    }

    dom::find_next_sibling(&heading_container(&anchor), |s| dom::has_tag(s, &["p"]))
        .map(|paragraph| dom::trimmed_text(&paragraph))
        .unwrap_or_default()
}

/// Lift a heading anchor to the element whose siblings hold the section
/// content.
///
/// Older markup puts the anchor on `<span class="mw-headline">` inside the
/// heading; newer markup puts it on the heading and wraps that in
/// `<div class="mw-heading">`.
fn heading_container<'a>(anchor: &Selection<'a>) -> Selection<'a> {
    let mut current = anchor.clone();

    if !dom::has_tag(&current, &HEADING_TAGS) {
        let parent = dom::parent(&current);
        if dom::has_tag(&parent, &HEADING_TAGS) {
            current = parent;
        }
    }

    let wrapper = dom::parent(&current);
    if dom::has_class(&wrapper, MW_HEADING_CLASS) {
        current = wrapper;
    }

    current
}

fn headword_paragraph<'a>(body: &Selection<'a>) -> Option<Selection<'a>> {
    body.select("p")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|p| dom::query_selector(p, EN_HEADWORD).exists())
}

/// Text of the part-of-speech heading preceding the headword paragraph.
fn word_class(paragraph: &Selection) -> String {
    let mut current = dom::previous_element_sibling(paragraph);

    while let Some(sibling) = current {
        if dom::has_class(&sibling, MW_HEADING_CLASS) {
            return heading_text(&dom::query_selector(&sibling, "h3, h4, h5"));
        }
        if dom::has_tag(&sibling, &EN_WORD_CLASS_HEADINGS) {
            return heading_text(&sibling);
        }
        current = dom::previous_element_sibling(&sibling);
    }

    String::new()
}

fn heading_text(heading: &Selection) -> String {
    let headline = dom::query_selector(heading, ".mw-headline");
    if headline.exists() {
        return dom::normalize_whitespace(&dom::text_content(&headline));
    }
    dom::normalize_whitespace(&dom::text_content(heading))
}

/// Top-level items of the first ordered list after the headword paragraph.
///
/// Nested `<ul>` content (quotations, usage notes) is dropped and
/// whitespace collapsed.
fn definitions(paragraph: &Selection) -> Vec<String> {
    let Some(list) = dom::find_next_sibling(paragraph, |s| dom::has_tag(s, &["ol"])) else {
        debug!("definition list not found");
        return Vec::new();
    };

    list.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|item| dom::has_tag(item, &["li"]))
        .map(|item| dom::normalize_whitespace(&dom::text_excluding(&item, &["ul"])))
        .collect()
}
