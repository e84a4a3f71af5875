// ABOUTME: Endpoint construction for the funding portal's routes.
// ABOUTME: Listing-by-term, application detail, and post-evaluation detail URLs.

use url::Url;

/// Listing page for a term: `/Home/Events?term={term}`.
pub fn listing_url(base: &Url, term: &str) -> Result<Url, url::ParseError> {
    let mut url = base.join("/Home/Events")?;
    url.query_pairs_mut().append_pair("term", term);
    Ok(url)
}

/// Application detail page for one event: `/Home/ViewApplication/{id}`.
pub fn application_url(base: &Url, event_id: u32) -> Result<Url, url::ParseError> {
    base.join(&format!("/Home/ViewApplication/{}", event_id))
}

/// Post-evaluation detail page for one event: `/Home/ViewPostEvaluation/{id}`.
pub fn evaluation_url(base: &Url, event_id: u32) -> Result<Url, url::ParseError> {
    base.join(&format!("/Home/ViewPostEvaluation/{}", event_id))
}
