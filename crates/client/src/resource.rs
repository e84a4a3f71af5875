// ABOUTME: HTTP fetching for portal pages.
// ABOUTME: Async GET returning the page body as text, with status and transport errors mapped.

use url::Url;

use crate::error::ScrapeError;

/// Fetches one portal page and returns its body as text.
///
/// Transport failures become `Fetch` errors and non-success responses
/// become `Status` errors. No retries here; a transient failure is the
/// caller's policy decision.
pub async fn fetch_page(
    http: &reqwest::Client,
    url: &Url,
    op: &str,
) -> Result<String, ScrapeError> {
    tracing::debug!(url = %url, op, "fetching portal page");

    let response = http
        .get(url.clone())
        .send()
        .await
        .map_err(|err| ScrapeError::fetch(url.as_str(), op, err.into()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::status(url.as_str(), op, status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|err| ScrapeError::fetch(url.as_str(), op, err.into()))?;

    tracing::debug!(url = %url, bytes = body.len(), "fetched portal page");
    Ok(body)
}
