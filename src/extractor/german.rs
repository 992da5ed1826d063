//! German Wiktionary rule-set.
//!
//! The German edition lays an entry out as a part-of-speech heading
//! (`<h3>Substantiv, m</h3>`), an inflection table, and a run of marker
//! paragraphs (`Bedeutungen:`, `Herkunft:`, ...) each followed by `<dl>`
//! lists. Every rule below is independent and leaves its field empty when
//! its landmark is missing.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::error::Result;
use crate::patterns::{
    DE_CASES, DE_DEFINITIONS, DE_ETYMOLOGY, DE_EXAMPLES, DE_GENDER_MARK, DE_LIST_ITEM,
    DE_NOMINATIVE, DE_PHRASES, DE_SUB_LIST, DE_WORD_CLASS_HEADING, DE_WORD_CLASS_LINK,
};
use crate::result::{CaseForms, GermanRecord};

/// Extract a [`GermanRecord`] from German Wiktionary markup.
///
/// `title` is the article title; when blank, the word is read from the first
/// language heading instead.
pub fn extract(html: &str, title: &str) -> Result<GermanRecord> {
    let doc = dom::parse(html)?;
    let body = doc.select("body");

    let mut record = GermanRecord {
        word: word(&body, title),
        ..GermanRecord::default()
    };

    if let Some(nominative) = dom::find_first_containing(&body, "th", DE_NOMINATIVE) {
        if let Some((singular, plural)) = row_forms(&nominative) {
            record.singular = singular;
            record.plural = plural;
        }
        record.cases = declension(&nominative);
    } else {
        debug!(marker = DE_NOMINATIVE, "inflection table not found");
    }

    let heading = dom::query_selector(&body, DE_WORD_CLASS_HEADING);
    if heading.exists() {
        record.grammatical_category =
            dom::trimmed_text(&dom::query_selector(&heading, DE_WORD_CLASS_LINK));
        record.gender = dom::trimmed_text(&dom::query_selector(&heading, DE_GENDER_MARK));
    } else {
        debug!("part-of-speech heading not found");
    }

    record.definitions = marker_items(&body, DE_DEFINITIONS).unwrap_or_default();
    record.etymology = marker_items(&body, DE_ETYMOLOGY)
        .map(|items| items.join(" ").trim().to_string())
        .unwrap_or_default();
    record.examples = marker_items(&body, DE_EXAMPLES).unwrap_or_default();
    record.phrases = marker_items(&body, DE_PHRASES).unwrap_or_default();

    Ok(record)
}

fn word(body: &Selection, title: &str) -> String {
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }

    // "Baum (Deutsch)" => "Baum"
    let heading = dom::query_selector(body, "h2");
    let text = dom::text_content(&heading);
    text.split(" (").next().unwrap_or_default().trim().to_string()
}

/// Singular and plural cells of the row headed by `header`.
///
/// The singular is the first `<td>` of the row, the plural its next sibling
/// cell.
fn row_forms(header: &Selection) -> Option<(String, String)> {
    let singular = first_data_cell(&dom::parent(header))?;
    let plural = dom::next_element_sibling(&singular)
        .map(|cell| dom::trimmed_text(&cell))
        .unwrap_or_default();

    Some((dom::trimmed_text(&singular), plural))
}

fn first_data_cell<'a>(row: &Selection<'a>) -> Option<Selection<'a>> {
    row.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|cell| dom::has_tag(cell, &["td"]))
}

/// Case rows of the table holding `nominative`, in table order.
fn declension(nominative: &Selection) -> Vec<CaseForms> {
    let mut table = dom::parent(nominative);
    while table.exists() && !dom::has_tag(&table, &["table"]) {
        table = dom::parent(&table);
    }
    if !table.exists() {
        return Vec::new();
    }

    let mut cases = Vec::new();
    for node in table.select("tr").nodes() {
        let row = Selection::from(*node);
        let header = dom::query_selector(&row, "th");
        if !header.exists() {
            continue;
        }

        let label = dom::trimmed_text(&header);
        if !DE_CASES.contains(&label.as_str()) {
            continue;
        }

        if let Some((singular, plural)) = row_forms(&header) {
            cases.push(CaseForms {
                case: label,
                singular,
                plural,
            });
        }
    }

    cases
}

/// Trimmed texts of the list items between the first paragraph containing
/// `marker` and the next paragraph.
///
/// Only outermost items count; a sub-list nested in an item (`[1a]` under
/// `[1]`) is neither a separate entry nor part of its parent's text.
///
/// Returns `None` when no paragraph carries the marker.
fn marker_items(body: &Selection, marker: &str) -> Option<Vec<String>> {
    let Some(anchor) = dom::find_first_containing(body, "p", marker) else {
        debug!(marker, "marker paragraph not found");
        return None;
    };

    let items = dom::collect_siblings_until(&anchor, |sibling| dom::has_tag(sibling, &["p"]))
        .iter()
        .flat_map(|sibling| dom::outermost_items(sibling, DE_LIST_ITEM))
        .map(|item| dom::text_excluding(&item, &[DE_SUB_LIST]).trim().to_string())
        .collect();

    Some(items)
}
