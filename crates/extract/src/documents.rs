// ABOUTME: Supporting-document link extraction shared by both detail-page extractors.
// ABOUTME: Captures anchors whose href targets the portal's download endpoint.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::models::DocumentLink;
use crate::tree::text_content;

/// Path prefix of the portal's file-download endpoint. Anchors pointing
/// anywhere else (view pages, external sites) are not document links.
pub const DOWNLOAD_PREFIX: &str = "/Home/DownloadFile";

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Collects every download link in the document, in document order.
///
/// The label is the anchor's trimmed visible text and the path is the raw
/// href. A href appearing twice yields two entries; the caller sees exactly
/// what the page shows.
pub fn extract_document_links(doc: &Html) -> Vec<DocumentLink> {
    doc.select(&ANCHOR)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            if !href.starts_with(DOWNLOAD_PREFIX) {
                return None;
            }
            Some(DocumentLink {
                label: text_content(&anchor).trim().to_string(),
                path: href.to_string(),
            })
        })
        .collect()
}
