// ABOUTME: Record types produced by the portal extractors.
// ABOUTME: Event listing rows, application records with cost lines, and post-evaluation records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One funding-event row from the listing page.
///
/// Field order mirrors the listing table's column order. `awarded` is absent
/// when the source cell is empty; when serialized, absent fields are omitted
/// rather than written as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub organization: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarded: Option<f64>,
    pub updated: DateTime<Utc>,
    pub has_post_evaluation: bool,
}

/// One line of an application's cost breakdown.
///
/// The appeal columns are present only when the source cell is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub category: String,
    pub description: String,
    pub requested: f64,
    pub awarded: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal_requested: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal_approved: Option<f64>,
}

/// A supporting-document link found on a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub label: String,
    pub path: String,
}

/// Everything extracted from an application detail page.
///
/// The event identifier is not stored here; the caller that fetched the page
/// already knows which event it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub questions: BTreeMap<String, String>,
    pub costs: Vec<CostLine>,
    pub documents: Vec<DocumentLink>,
}

/// Everything extracted from a post-evaluation detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEvaluationRecord {
    pub questions: BTreeMap<String, String>,
    pub documents: Vec<DocumentLink>,
}
