// ABOUTME: Application-page extractor producing questions, cost lines, and document links.
// ABOUTME: Reads definition-list question pairs and the six-column cost breakdown table.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::documents::extract_document_links;
use crate::error::{ExtractError, Result};
use crate::models::{ApplicationRecord, CostLine};
use crate::normalize::{parse_money, parse_required_money};
use crate::tree::{by_tag, element_children, text_content};

/// Answer recorded for an application checkbox that carries no `checked`
/// attribute. The application form marks checked boxes with the attribute
/// and renders nothing for unchecked ones.
pub const UNCHECKED_ANSWER: &str = "unchecked";

/// Number of positional columns in a cost-breakdown row.
const COST_COLUMNS: usize = 6;

static DEFINITION_LIST: Lazy<Selector> = Lazy::new(|| Selector::parse("dl").unwrap());
static CHECKBOX: Lazy<Selector> = Lazy::new(|| Selector::parse("input[type='checkbox']").unwrap());

/// Extracts an application detail page into a record.
///
/// The cost table body is a structural precondition: an application page
/// without one is not an application page. Everything else degrades to
/// empty collections.
pub fn extract_application(doc: &Html) -> Result<ApplicationRecord> {
    Ok(ApplicationRecord {
        questions: extract_questions(doc),
        costs: extract_costs(doc)?,
        documents: extract_document_links(doc),
    })
}

/// Walks every definition list, pairing terms with the definition that
/// follows them. A label repeated in a later list overwrites the earlier
/// answer; the source does not keep labels unique across sections.
fn extract_questions(doc: &Html) -> BTreeMap<String, String> {
    let mut questions = BTreeMap::new();
    for list in doc.select(&DEFINITION_LIST) {
        let entries = element_children(&list);
        for pair in entries.chunks(2) {
            if let [term, definition] = pair {
                let label = text_content(term).trim().to_string();
                questions.insert(label, answer_text(definition));
            }
        }
    }
    questions
}

/// Answer for one definition element: the checkbox state when the
/// definition wraps a checkbox input, its trimmed text otherwise.
fn answer_text(definition: &ElementRef<'_>) -> String {
    match definition.select(&CHECKBOX).next() {
        Some(input) => input
            .value()
            .attr("checked")
            .unwrap_or(UNCHECKED_ANSWER)
            .to_string(),
        None => text_content(definition).trim().to_string(),
    }
}

/// Reads the cost breakdown from the page's first table body.
///
/// A row whose first cell spans multiple columns is the totals row, not
/// data, and is skipped regardless of its contents. Data rows map their six
/// cells positionally; the two appeal columns are optional and absent when
/// their cell is empty.
fn extract_costs(doc: &Html) -> Result<Vec<CostLine>> {
    let body = by_tag(doc, "tbody")
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::missing("cost table body"))?;

    let mut costs = Vec::new();
    for row in element_children(&body) {
        let cells = element_children(&row);
        if let Some(first) = cells.first() {
            if first.value().attr("colspan").is_some() {
                continue;
            }
        }
        if cells.len() < COST_COLUMNS {
            return Err(ExtractError::RowArity {
                table: "costs",
                expected: COST_COLUMNS,
                found: cells.len(),
            });
        }

        let cell = |i: usize| text_content(&cells[i]);
        costs.push(CostLine {
            category: cell(0).trim().to_string(),
            description: cell(1).trim().to_string(),
            requested: parse_required_money(&cell(2), "requested")?,
            awarded: parse_required_money(&cell(3), "awarded")?,
            appeal_requested: parse_money(&cell(4), "appeal_requested")?,
            appeal_approved: parse_money(&cell(5), "appeal_approved")?,
        });
    }
    Ok(costs)
}
