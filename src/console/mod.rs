//! Search Console services
//!
//! Provides a narrow interface over the console API, limited to the three
//! operations this tool consumes.

mod google;

pub use google::GoogleConsole;

use crate::error::Result;
use crate::types::{SiteEntry, SitemapRef, UrlInspection};
use async_trait::async_trait;

/// Console API seam
///
/// This trait hides the real Search Console API behind the three methods the
/// reconcile flow needs, so tests can supply a fake implementation.
#[async_trait]
pub trait ConsoleApi: Send + Sync {
    /// List the site properties visible to the authenticated account
    async fn list_sites(&self) -> Result<Vec<SiteEntry>>;

    /// List the sitemaps registered for a site property
    async fn list_sitemaps(&self, site_url: &str) -> Result<Vec<SitemapRef>>;

    /// Query crawl/index status for a single URL
    async fn inspect_url_index(&self, site_url: &str, url: &str) -> Result<UrlInspection>;
}
