//! Core types for site-reindex

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A site property listed by the search console
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteEntry {
    /// Property URL, either `https://example.com/` or `sc-domain:example.com`
    pub site_url: String,
}

/// A sitemap registered for a site property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SitemapRef {
    /// Absolute URL of the sitemap
    pub path: String,
}

/// Crawl/index state reported by the console for one URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlInspection {
    /// Coverage classification, e.g. "Submitted and indexed"
    pub coverage_state: String,
    /// When the URL was last crawled; `None` means never crawled
    pub last_crawl_time: Option<DateTime<Utc>>,
}

/// The IndexNow submission body
///
/// Built once per submission call and serialized to a single canonical JSON
/// body; every provider receives the identical bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexNowPayload {
    /// Bare domain the URLs belong to
    pub host: String,
    /// Shared secret proving ownership of the domain
    pub key: String,
    /// Pages to notify providers about
    pub url_list: Vec<String>,
}

/// Per-provider outcome of one submission call
///
/// A submission call yields exactly one of these per configured provider,
/// in provider-list order, no matter how many providers failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// Endpoint the payload was posted to
    pub provider: String,
    /// What came back
    pub response: ProviderResponse,
}

/// What a single provider call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResponse {
    /// The call completed at the HTTP layer; 4xx/5xx statuses are reported
    /// here, not treated as call failures
    Received {
        /// HTTP status code
        status: u16,
        /// Response body text, uninterpreted
        body: String,
    },
    /// The call never completed (connect, DNS, or timeout failure)
    Unreachable {
        /// Transport-level error description
        error: String,
    },
}

impl SubmissionOutcome {
    /// Whether the provider answered at the HTTP layer
    pub const fn is_received(&self) -> bool {
        matches!(self.response, ProviderResponse::Received { .. })
    }

    /// HTTP status, if the call completed
    pub const fn status(&self) -> Option<u16> {
        match self.response {
            ProviderResponse::Received { status, .. } => Some(status),
            ProviderResponse::Unreachable { .. } => None,
        }
    }
}

/// Per-URL outcome of the sequential inspection pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionOutcome {
    /// URL that was inspected
    pub url: String,
    /// Inspection result or the reason it failed
    pub report: InspectionReport,
}

/// Result of inspecting a single URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectionReport {
    /// The console returned index status for the URL
    Inspected(UrlInspection),
    /// The inspection query failed; the batch continues regardless
    Failed {
        /// Error description
        error: String,
    },
}

impl InspectionOutcome {
    /// Whether the console answered for this URL
    pub const fn is_inspected(&self) -> bool {
        matches!(self.report, InspectionReport::Inspected(_))
    }
}

/// Which subset of the candidate URLs to process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Candidates not present in the submission history
    NewOnly,
    /// Every candidate, unchanged
    All,
    /// Candidates already present in the submission history
    PreviouslySubmitted,
}

impl SelectionMode {
    /// All modes, in menu order
    pub const MODES: [Self; 3] = [Self::NewOnly, Self::All, Self::PreviouslySubmitted];

    /// Human-readable menu label
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewOnly => "New URLs only",
            Self::All => "All URLs",
            Self::PreviouslySubmitted => "Previously submitted URLs only",
        }
    }
}
