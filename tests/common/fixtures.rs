//! Test data factories for site-reindex types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use site_reindex::types::{
    IndexNowPayload, ProviderResponse, SubmissionOutcome, UrlInspection,
};
use std::collections::HashSet;

/// Create a list of owned URL strings
pub fn urls(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Create a history set from URL strings
pub fn history(items: &[&str]) -> HashSet<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Create an inspection with a crawl timestamp
pub fn make_inspection(coverage_state: &str, last_crawl: &str) -> UrlInspection {
    UrlInspection {
        coverage_state: coverage_state.to_string(),
        last_crawl_time: Some(
            DateTime::parse_from_rfc3339(last_crawl)
                .unwrap()
                .with_timezone(&Utc),
        ),
    }
}

/// Create an inspection for a URL that has never been crawled
pub fn make_uncrawled_inspection(coverage_state: &str) -> UrlInspection {
    UrlInspection {
        coverage_state: coverage_state.to_string(),
        last_crawl_time: None,
    }
}

/// Create a payload with default host and key
pub fn make_payload(url_list: &[&str]) -> IndexNowPayload {
    IndexNowPayload {
        host: "example.com".to_string(),
        key: "test-key".to_string(),
        url_list: urls(url_list),
    }
}

/// Create a success-shaped outcome
pub fn make_received(provider: &str, status: u16, body: &str) -> SubmissionOutcome {
    SubmissionOutcome {
        provider: provider.to_string(),
        response: ProviderResponse::Received {
            status,
            body: body.to_string(),
        },
    }
}

/// Create a failure-shaped outcome
pub fn make_unreachable(provider: &str, error: &str) -> SubmissionOutcome {
    SubmissionOutcome {
        provider: provider.to_string(),
        response: ProviderResponse::Unreachable {
            error: error.to_string(),
        },
    }
}
