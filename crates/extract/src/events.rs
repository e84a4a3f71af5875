// ABOUTME: Listing-page extractor that turns results-table rows into Event records.
// ABOUTME: Positional seven-column mapping with marker, compact-date, and currency normalization.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Result};
use crate::models::Event;
use crate::normalize::{parse_compact_date, parse_listing_id, parse_money};
use crate::tree::{by_id, element_children, text_content};

/// Id of the container holding the listing results table.
pub const RESULTS_TABLE_ID: &str = "results";

/// Number of positional data columns in a listing row.
const LISTING_COLUMNS: usize = 7;

/// Rows carry their "view post-evaluation" action as an info-styled button;
/// only a button with an actual target counts.
static EVALUATION_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.btn-info").unwrap());

/// Extracts every funding event from a listing document.
///
/// The results table wraps its header and body together; only the last
/// element child of the container holds data rows. A missing container or
/// body is fatal for the whole document, and so is a row with fewer than
/// seven cells: the column mapping is positional and a short row means
/// the listing layout changed.
pub fn extract_events(doc: &Html) -> Result<Vec<Event>> {
    let table = by_id(doc, RESULTS_TABLE_ID)
        .ok_or_else(|| ExtractError::missing(format!("#{} results table", RESULTS_TABLE_ID)))?;
    let body = element_children(&table)
        .pop()
        .ok_or_else(|| ExtractError::missing("results table body"))?;

    element_children(&body)
        .iter()
        .map(event_from_row)
        .collect()
}

/// Maps one data row onto an `Event`, positionally:
/// identifier, organization, name, date, venue, awarded, updated.
fn event_from_row(row: &ElementRef<'_>) -> Result<Event> {
    let cells = element_children(row);
    if cells.len() < LISTING_COLUMNS {
        return Err(ExtractError::RowArity {
            table: "results",
            expected: LISTING_COLUMNS,
            found: cells.len(),
        });
    }

    let cell = |i: usize| text_content(&cells[i]);

    Ok(Event {
        id: parse_listing_id(&cell(0))?,
        organization: cell(1).trim().to_string(),
        name: cell(2).trim().to_string(),
        date: parse_compact_date(&cell(3), "date")?,
        venue: cell(4).trim().to_string(),
        awarded: parse_money(&cell(5), "awarded")?,
        updated: parse_compact_date(&cell(6), "updated")?,
        has_post_evaluation: has_evaluation_link(row),
    })
}

/// True iff the row contains an info action button with a present href.
fn has_evaluation_link(row: &ElementRef<'_>) -> bool {
    row.select(&EVALUATION_LINK)
        .any(|link| link.value().attr("href").is_some())
}
