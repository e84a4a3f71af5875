// ABOUTME: Portal client library: fetches funding-portal pages and runs the extractors.
// ABOUTME: Re-exports Client, ClientBuilder, Options, EventRecord, and ScrapeError.

//! Fetch layer and orchestration for the fundboard funding portal.
//!
//! The extraction core (`fundboard-extract`) is pure; this crate supplies
//! what it deliberately leaves out: retrieving listing and detail pages
//! over HTTP and composing per-event records for a whole term.
//!
//! # Example
//!
//! ```no_run
//! use fundboard_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fundboard_client::ScrapeError> {
//!     let client = Client::builder().build();
//!     let records = client.scrape_term("2024-spring", Some(10)).await?;
//!     println!("{} events", records.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod options;
pub mod resource;
pub mod urls;

pub use crate::client::{Client, EventRecord};
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::options::{ClientBuilder, Options, DEFAULT_BASE_URL};
