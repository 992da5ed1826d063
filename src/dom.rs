//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the landmark rules:
//! parsing with validation, tag/text access, element-sibling navigation and
//! the shared sibling scan [`collect_siblings_until`].

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::patterns::{BLOCK_TAGS, WHITESPACE_RUN};

// === Parsing ===

/// Parse an article into a document.
///
/// The HTML5 tokenizer recovers from almost any input, so a document is
/// rejected when recovery leaves nothing to extract from: blank input, or
/// input that yields no element inside `<body>` (bare text, stray `<`
/// sequences, a tag truncated at end of input).
pub fn parse(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        return Err(Error::DocumentParseFailure("document is empty".to_string()));
    }

    let doc = Document::from(html);
    if !doc.select("body *").exists() {
        return Err(Error::DocumentParseFailure(
            "document contains no markup elements".to_string(),
        ));
    }

    Ok(doc)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether the first node of the selection is one of `tags`.
#[must_use]
pub fn has_tag(sel: &Selection, tags: &[&str]) -> bool {
    tag_name(sel).is_some_and(|t| tags.iter().any(|tag| t.eq_ignore_ascii_case(tag)))
}

/// Check whether the first node carries `class` in its class list.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text content as an owned string.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

/// Text content of the first node, skipping every descendant subtree whose
/// tag is in `excluded`.
///
/// A space is emitted around block-level descendants so that adjacent blocks
/// (`To move.<dl><dd>He runs.</dd></dl>`) do not run together; callers
/// collapse whitespace afterwards. Works on the tree in place; the document
/// is not modified.
#[must_use]
pub fn text_excluding(sel: &Selection, excluded: &[&str]) -> String {
    let mut out = String::new();
    if let Some(node) = sel.nodes().first() {
        push_text_excluding(node, excluded, &mut out);
    }
    out
}

fn push_text_excluding(node: &NodeRef, excluded: &[&str], out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        } else if child.is_element() {
            let skip = child
                .node_name()
                .is_some_and(|name| excluded.iter().any(|tag| name.eq_ignore_ascii_case(tag)));
            if skip {
                continue;
            }
            let block = child
                .node_name()
                .is_some_and(|name| BLOCK_TAGS.iter().any(|tag| name.eq_ignore_ascii_case(tag)));
            if block {
                out.push(' ');
            }
            push_text_excluding(&child, excluded, out);
            if block {
                out.push(' ');
            }
        }
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
///
/// ```rust
/// use rs_wiktionary::dom::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a\n\t b  "), "a b");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Get previous element sibling (skipping text nodes)
#[must_use]
pub fn previous_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.prev_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.prev_sibling();
        }
        None
    })
}

/// Collect the element siblings following `start`, in document order, up to
/// (not including) the first one matching `stop`.
///
/// `start` itself is never part of the result. Text nodes between elements
/// are skipped.
///
/// # Example
///
/// ```rust
/// use rs_wiktionary::dom;
///
/// let doc = dom::parse("<div><p id='a'>A</p><dl></dl><ul></ul><p>B</p><dl></dl></div>")?;
/// let start = doc.select("#a");
/// let siblings = dom::collect_siblings_until(&start, |s| dom::has_tag(s, &["p"]));
/// assert_eq!(siblings.len(), 2);
/// # Ok::<(), rs_wiktionary::Error>(())
/// ```
#[must_use]
pub fn collect_siblings_until<'a, F>(start: &Selection<'a>, mut stop: F) -> Vec<Selection<'a>>
where
    F: FnMut(&Selection<'a>) -> bool,
{
    let mut out = Vec::new();
    let mut current = next_element_sibling(start);

    while let Some(sibling) = current {
        if stop(&sibling) {
            break;
        }
        current = next_element_sibling(&sibling);
        out.push(sibling);
    }

    out
}

/// First element sibling following `start` that satisfies `pred`.
#[must_use]
pub fn find_next_sibling<'a, F>(start: &Selection<'a>, mut pred: F) -> Option<Selection<'a>>
where
    F: FnMut(&Selection<'a>) -> bool,
{
    let mut current = next_element_sibling(start);
    while let Some(sibling) = current {
        if pred(&sibling) {
            return Some(sibling);
        }
        current = next_element_sibling(&sibling);
    }
    None
}

// === Querying ===

/// Query single element by CSS selector
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// First element matching `selector` whose text contains `marker`, in
/// document order.
#[must_use]
pub fn find_first_containing<'a>(
    scope: &Selection<'a>,
    selector: &str,
    marker: &str,
) -> Option<Selection<'a>> {
    scope
        .select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| text_content(sel).contains(marker))
}

/// Outermost `tag` elements at or below `sel`, in document order.
///
/// `Selection::select` only searches descendants; list items can also be
/// siblings themselves (`<dd>` directly after the marker paragraph). Items
/// nested inside another matching item are left to their parent.
#[must_use]
pub fn outermost_items<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    if has_tag(sel, &[tag]) {
        return vec![sel.clone()];
    }
    let Some(root) = sel.nodes().first().copied() else {
        return Vec::new();
    };

    sel.select(tag)
        .nodes()
        .iter()
        .filter(|node| !has_ancestor_tag_below(node, tag, &root))
        .map(|node| Selection::from(*node))
        .collect()
}

/// Whether an ancestor of `node` strictly below `root` is a `tag` element.
fn has_ancestor_tag_below(node: &NodeRef, tag: &str, root: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ancestor.id == root.id {
            return false;
        }
        if ancestor
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
        {
            return true;
        }
        current = ancestor.parent();
    }
    false
}
