// ABOUTME: Post-evaluation-page extractor producing questions and document links.
// ABOUTME: Reads form-group blocks, skipping section headings, with raw-node prompt/answer lookup.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::documents::extract_document_links;
use crate::models::PostEvaluationRecord;
use crate::tree::text_content;

/// Answer recorded for an evaluation checkbox that carries no `checked`
/// attribute. The evaluation form renders unchecked boxes as a bare input,
/// so the scraped state is the empty string, unlike the application form,
/// which records an explicit marker. The two conventions are genuinely
/// different and stay separate constants.
pub const UNCHECKED_ANSWER: &str = "";

static FORM_GROUP: Lazy<Selector> = Lazy::new(|| Selector::parse(".form-group").unwrap());
static CHECKBOX: Lazy<Selector> = Lazy::new(|| Selector::parse("input[type='checkbox']").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());

/// Extracts a post-evaluation detail page into a record.
///
/// Unlike the other two extractors this one has no structural precondition:
/// a page with no form groups simply yields an empty question map. Groups
/// containing a heading element are section dividers, not questions.
pub fn extract_post_evaluation(doc: &Html) -> PostEvaluationRecord {
    let mut questions = std::collections::BTreeMap::new();
    for group in doc.select(&FORM_GROUP) {
        if group.select(&HEADING).next().is_some() {
            continue;
        }
        let Some(prompt) = prompt_text(&group) else {
            continue;
        };
        questions.insert(prompt, answer_text(&group));
    }

    PostEvaluationRecord {
        questions,
        documents: extract_document_links(doc),
    }
}

/// The question prompt is the text of the group's second child node in
/// document order (index 1, counting text nodes), which is where the form
/// layout puts the label.
fn prompt_text(group: &ElementRef<'_>) -> Option<String> {
    let node = group.children().nth(1)?;
    let text = node_text(node)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Answer for one form group: the checkbox state when the group wraps a
/// checkbox input, otherwise the first non-blank text node after the
/// prompt, or the empty string when the group has no free text at all.
fn answer_text(group: &ElementRef<'_>) -> String {
    if let Some(input) = group.select(&CHECKBOX).next() {
        return input
            .value()
            .attr("checked")
            .unwrap_or(UNCHECKED_ANSWER)
            .to_string();
    }

    group
        .children()
        .skip(1)
        .filter_map(|node| {
            node.value()
                .as_text()
                .map(|text| text.trim().to_string())
        })
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Text of a single node: the literal content for text nodes, descendant
/// text for elements, nothing for comments and the rest.
fn node_text(node: NodeRef<'_, Node>) -> Option<String> {
    if let Some(text) = node.value().as_text() {
        return Some(text.to_string());
    }
    ElementRef::wrap(node).map(|el| text_content(&el))
}
