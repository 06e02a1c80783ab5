//! Status inspection
//!
//! Queries the console's URL inspection API for each URL, strictly one at a
//! time: the inspection API is quota-bound, so this loop must never fan out
//! the way the submission engine does. One URL's failure is recorded and
//! the batch continues.

use crate::console::ConsoleApi;
use crate::types::{InspectionOutcome, InspectionReport};
use async_trait::async_trait;
use tracing::warn;

/// Observer for per-URL inspection results
///
/// Lets interfaces show results as they arrive without the inspection loop
/// knowing how they are displayed.
#[async_trait]
pub trait InspectObserver: Send + Sync {
    /// Called after each URL's inspection settles, in input order
    async fn on_outcome(&self, outcome: &InspectionOutcome);
}

/// Observer that ignores all updates, for tests and non-interactive callers
pub struct NoopObserver;

#[async_trait]
impl InspectObserver for NoopObserver {
    async fn on_outcome(&self, _outcome: &InspectionOutcome) {}
}

/// Inspect each URL's crawl/index status, sequentially
///
/// Returns one outcome per input URL, in input order. Each inspection fully
/// completes before the next begins.
pub async fn inspect_urls(
    console: &dyn ConsoleApi,
    site_url: &str,
    urls: &[String],
    observer: &dyn InspectObserver,
) -> Vec<InspectionOutcome> {
    let mut outcomes = Vec::with_capacity(urls.len());

    for url in urls {
        let report = match console.inspect_url_index(site_url, url).await {
            Ok(inspection) => InspectionReport::Inspected(inspection),
            Err(e) => {
                warn!(url = %url, error = %e, "inspection failed");
                InspectionReport::Failed {
                    error: e.to_string(),
                }
            }
        };

        let outcome = InspectionOutcome {
            url: url.clone(),
            report,
        };
        observer.on_outcome(&outcome).await;
        outcomes.push(outcome);
    }

    outcomes
}
