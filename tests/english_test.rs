mod common;

use common::EN_TREE;
use rs_wiktionary::extractor::english;
use rs_wiktionary::{extract, Article, EnglishRecord, Error, WordInfo};

fn english_record(html: &str) -> EnglishRecord {
    match extract(&Article::new("tree", html, "en")) {
        Ok(WordInfo::English(record)) => record,
        other => panic!("expected English record, got {other:?}"),
    }
}

#[test]
fn extract_english_plural() {
    assert_eq!(english_record(EN_TREE).plural, "trees");
}

#[test]
fn extract_english_plural_forms_trimmed_per_form() {
    let html = "<p><span class=\"headword-line\"><strong class=\"headword\">box</strong> \
                (<i>countable and uncountable</i>, <i>plural</i> <b> boxes </b> <i>or</i> <b>\n boxen</b>)</span></p>";
    let record = english_record(html);

    assert_eq!(record.plural, "boxes boxen");
    assert_eq!(record.countable, Some(true));
}

#[test]
fn extract_english_comparison_forms() {
    let html = "<p><span class=\"headword-line\"><strong class=\"headword\">good</strong> \
                (<i>comparative</i> <b>better</b>, <i>superlative</i> <b>best</b>)</span></p>\
                <ol><li>Acting in the interest of what is beneficial.</li></ol>";
    let record = english_record(html);

    assert_eq!(record.comparative, "better");
    assert_eq!(record.superlative, "best");
    assert_eq!(record.plural, "");
    assert_eq!(record.definitions.len(), 1);
}

#[test]
fn extract_english_etymology() {
    assert_eq!(english_record(EN_TREE).etymology, "From Middle English tree, from Old English trēow");
}

#[test]
fn extract_english_word_class() {
    assert_eq!(english_record(EN_TREE).word_class, "Noun");
}

#[test]
fn extract_english_definitions_strip_nested_lists() {
    let record = english_record(EN_TREE);

    assert_eq!(
        record.definitions,
        vec!["A perennial woody plant.", "(graph theory) A connected graph with no cycles."]
    );
    assert!(!record.definitions.iter().any(|d| d.contains("oak")));
}

#[test]
fn extract_english_two_top_level_items() {
    let html = r#"
        <p><span class="headword-line"><strong class="headword">word</strong></span></p>
        <ol>
          <li>first   sense
              spanning lines
            <ul><li>quotation</li></ul>
          </li>
          <li>second sense</li>
        </ol>
    "#;
    let record = english_record(html);

    assert_eq!(record.definitions, vec!["first sense spanning lines", "second sense"]);
}

#[test]
fn extract_english_only_first_list_after_headword() {
    let html = r#"
        <p><strong class="headword">bank</strong></p>
        <ol><li>A financial institution.</li></ol>
        <p><strong class="headword">bank</strong></p>
        <ol><li>To tilt an aircraft.</li></ol>
    "#;
    let record = english_record(html);

    assert_eq!(record.definitions, vec!["A financial institution."]);
}

#[test]
fn extract_english_missing_landmarks() {
    let record = english_record("<div><p>Nothing to see.</p></div>");

    assert_eq!(record.word, "tree");
    assert!(record.plural.is_empty());
    assert!(record.etymology.is_empty());
    assert!(record.definitions.is_empty());
}

#[test]
fn extract_english_word_from_headword_without_title() {
    let result = english::extract(EN_TREE, "");
    assert_eq!(result.map(|r| r.word), Ok("tree".to_string()));
}

#[test]
fn extract_english_rejects_unparseable_markup() {
    assert!(matches!(english::extract("   ", "x"), Err(Error::DocumentParseFailure(_))));
    assert!(matches!(english::extract("<<<>>>", "x"), Err(Error::DocumentParseFailure(_))));
}
