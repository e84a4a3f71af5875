// ABOUTME: The portal Client: fetches listing and detail pages and runs the extractors.
// ABOUTME: Also provides scrape_term, the orchestration composing per-event records.

use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

use fundboard_extract::{
    extract_application, extract_events, extract_post_evaluation, ApplicationRecord, Event,
    PostEvaluationRecord,
};

use crate::error::ScrapeError;
use crate::options::{ClientBuilder, Options};
use crate::resource::fetch_page;
use crate::urls;

/// Everything scraped for one funding event: the listing row, the
/// application detail, and the post-evaluation when the listing links one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event: Event,
    pub application: ApplicationRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_evaluation: Option<PostEvaluationRecord>,
}

/// Client for the funding portal.
///
/// Holds only configuration and a connection pool; each call fetches and
/// extracts from scratch, so calls are independent and may run concurrently.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http: reqwest::Client,
}

impl Client {
    /// Create a ClientBuilder for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client directly from options.
    pub fn new(opts: Options) -> Self {
        let http = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });
        Self { opts, http }
    }

    fn base(&self) -> Result<Url, ScrapeError> {
        Url::parse(&self.opts.base_url).map_err(|err| {
            ScrapeError::invalid_url(&self.opts.base_url, "base_url", Some(err.into()))
        })
    }

    /// Fetch and extract the event listing for a term.
    pub async fn events(&self, term: &str) -> Result<Vec<Event>, ScrapeError> {
        let url = urls::listing_url(&self.base()?, term)
            .map_err(|err| ScrapeError::invalid_url(term, "events", Some(err.into())))?;
        let html = fetch_page(&self.http, &url, "events").await?;
        let doc = Html::parse_document(&html);
        extract_events(&doc).map_err(|err| ScrapeError::extract(url.as_str(), "events", err.into()))
    }

    /// Fetch and extract the application detail page for an event.
    pub async fn application(&self, event_id: u32) -> Result<ApplicationRecord, ScrapeError> {
        let url = urls::application_url(&self.base()?, event_id).map_err(|err| {
            ScrapeError::invalid_url(event_id.to_string(), "application", Some(err.into()))
        })?;
        let html = fetch_page(&self.http, &url, "application").await?;
        let doc = Html::parse_document(&html);
        extract_application(&doc)
            .map_err(|err| ScrapeError::extract(url.as_str(), "application", err.into()))
    }

    /// Fetch and extract the post-evaluation detail page for an event.
    pub async fn post_evaluation(
        &self,
        event_id: u32,
    ) -> Result<PostEvaluationRecord, ScrapeError> {
        let url = urls::evaluation_url(&self.base()?, event_id).map_err(|err| {
            ScrapeError::invalid_url(event_id.to_string(), "post_evaluation", Some(err.into()))
        })?;
        let html = fetch_page(&self.http, &url, "post_evaluation").await?;
        let doc = Html::parse_document(&html);
        Ok(extract_post_evaluation(&doc))
    }

    /// Scrape a whole term: the listing plus, per event, the application
    /// and (when the listing links one) the post-evaluation.
    ///
    /// `limit` caps how many listing rows are followed; `None` follows all
    /// of them. Any failure aborts the run; partial output is not
    /// returned.
    pub async fn scrape_term(
        &self,
        term: &str,
        limit: Option<usize>,
    ) -> Result<Vec<EventRecord>, ScrapeError> {
        let mut events = self.events(term).await?;
        if let Some(limit) = limit {
            events.truncate(limit);
        }
        tracing::info!(term, events = events.len(), "scraping term");

        let mut records = Vec::with_capacity(events.len());
        for event in events {
            tracing::debug!(event_id = event.id, name = %event.name, "scraping event");
            let application = self.application(event.id).await?;
            let post_evaluation = if event.has_post_evaluation {
                Some(self.post_evaluation(event.id).await?)
            } else {
                None
            };
            records.push(EventRecord {
                event,
                application,
                post_evaluation,
            });
        }
        Ok(records)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
