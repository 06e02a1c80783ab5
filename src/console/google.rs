//! Google Search Console implementation of the console seam

use crate::console::ConsoleApi;
use crate::error::{Error, Result};
use crate::types::{SiteEntry, SitemapRef, UrlInspection};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_BASE: &str = "https://searchconsole.googleapis.com";

/// Search Console service using reqwest
pub struct GoogleConsole {
    client: Client,
    token: String,
    base_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SitesResponse {
    #[serde(default)]
    site_entry: Vec<ApiSiteEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSiteEntry {
    site_url: String,
}

#[derive(Deserialize)]
struct SitemapsResponse {
    #[serde(default)]
    sitemap: Vec<ApiSitemap>,
}

#[derive(Deserialize)]
struct ApiSitemap {
    path: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectRequest<'a> {
    inspection_url: &'a str,
    site_url: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InspectResponse {
    inspection_result: InspectionResultBody,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InspectionResultBody {
    index_status_result: IndexStatusResult,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexStatusResult {
    #[serde(default)]
    coverage_state: Option<String>,
    #[serde(default)]
    last_crawl_time: Option<DateTime<Utc>>,
}

impl GoogleConsole {
    /// Create a new console service with a bearer token
    pub fn new(token: String) -> Result<Self> {
        Self::with_base_url(token, API_BASE.to_string())
    }

    /// Create a console service against a custom API base (for tests)
    pub fn with_base_url(token: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("site-reindex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            token,
            base_url,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ConsoleApi for GoogleConsole {
    async fn list_sites(&self) -> Result<Vec<SiteEntry>> {
        let url = self.api_url("/webmasters/v3/sites");

        let sites: SitesResponse = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::ConsoleApi(e.to_string()))?
            .json()
            .await?;

        Ok(sites
            .site_entry
            .into_iter()
            .map(|s| SiteEntry {
                site_url: s.site_url,
            })
            .collect())
    }

    async fn list_sitemaps(&self, site_url: &str) -> Result<Vec<SitemapRef>> {
        let url = self.api_url(&format!(
            "/webmasters/v3/sites/{}/sitemaps",
            urlencoding::encode(site_url)
        ));

        let sitemaps: SitemapsResponse = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::ConsoleApi(e.to_string()))?
            .json()
            .await?;

        Ok(sitemaps
            .sitemap
            .into_iter()
            .map(|s| SitemapRef { path: s.path })
            .collect())
    }

    async fn inspect_url_index(&self, site_url: &str, url: &str) -> Result<UrlInspection> {
        let endpoint = self.api_url("/v1/urlInspection/index:inspect");

        let request = InspectRequest {
            inspection_url: url,
            site_url,
        };

        let response: InspectResponse = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::ConsoleApi(e.to_string()))?
            .json()
            .await?;

        let status = response.inspection_result.index_status_result;
        Ok(UrlInspection {
            coverage_state: status
                .coverage_state
                .unwrap_or_else(|| "Unknown".to_string()),
            last_crawl_time: status.last_crawl_time,
        })
    }
}
