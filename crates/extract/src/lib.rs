// ABOUTME: Core extraction library for the fundboard portal scraper.
// ABOUTME: Turns listing and detail pages into typed Event, Application, and PostEvaluation records.

//! Extraction core for the fundboard funding portal.
//!
//! Three stateless extractors consume an already-parsed HTML document and
//! produce typed records: [`extract_events`] for the term listing page,
//! [`extract_application`] for an application detail page, and
//! [`extract_post_evaluation`] for a post-evaluation detail page. Fetching
//! pages and deciding which events to process belongs to callers; see the
//! companion client crate.
//!
//! # Example
//!
//! ```
//! use fundboard_extract::extract_events;
//! use scraper::Html;
//!
//! let doc = Html::parse_document(
//!     r#"<table id="results"><thead><tr><th>Id</th></tr></thead>
//!        <tbody></tbody></table>"#,
//! );
//! let events = extract_events(&doc).unwrap();
//! assert!(events.is_empty());
//! ```

pub mod application;
pub mod documents;
pub mod error;
pub mod evaluation;
pub mod events;
pub mod models;
pub mod normalize;
pub mod tree;

pub use application::extract_application;
pub use documents::{extract_document_links, DOWNLOAD_PREFIX};
pub use error::{ExtractError, Result};
pub use evaluation::extract_post_evaluation;
pub use events::{extract_events, RESULTS_TABLE_ID};
pub use models::{ApplicationRecord, CostLine, DocumentLink, Event, PostEvaluationRecord};
