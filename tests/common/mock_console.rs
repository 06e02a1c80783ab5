//! Mock console service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use site_reindex::console::ConsoleApi;
use site_reindex::error::{Error, Result};
use site_reindex::types::{SiteEntry, SitemapRef, UrlInspection};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Simple mock console service for testing
///
/// Features:
/// - Configurable responses per site / per URL
/// - Call tracking for sequencing and verification
/// - Error injection for failure path testing
pub struct MockConsoleApi {
    sites: Vec<SiteEntry>,
    sitemaps: Mutex<HashMap<String, Vec<SitemapRef>>>,
    inspections: Mutex<HashMap<String, UrlInspection>>,
    // Call tracking
    list_sites_calls: AtomicUsize,
    list_sitemaps_calls: Mutex<Vec<String>>,
    inspect_calls: Mutex<Vec<(String, String)>>,
    // Error injection
    error_on_list_sites: Mutex<Option<String>>,
    failing_inspections: Mutex<HashSet<String>>,
}

impl MockConsoleApi {
    /// Create a mock exposing the given site properties
    pub fn with_sites(site_urls: &[&str]) -> Self {
        Self {
            sites: site_urls
                .iter()
                .map(|url| SiteEntry {
                    site_url: (*url).to_string(),
                })
                .collect(),
            sitemaps: Mutex::new(HashMap::new()),
            inspections: Mutex::new(HashMap::new()),
            list_sites_calls: AtomicUsize::new(0),
            list_sitemaps_calls: Mutex::new(Vec::new()),
            inspect_calls: Mutex::new(Vec::new()),
            error_on_list_sites: Mutex::new(None),
            failing_inspections: Mutex::new(HashSet::new()),
        }
    }

    // === Response configuration ===

    /// Register sitemaps for a site
    pub fn set_sitemaps(&self, site_url: &str, paths: &[&str]) {
        self.sitemaps.lock().unwrap().insert(
            site_url.to_string(),
            paths
                .iter()
                .map(|p| SitemapRef {
                    path: (*p).to_string(),
                })
                .collect(),
        );
    }

    /// Register the inspection result for a URL
    pub fn set_inspection(&self, url: &str, inspection: UrlInspection) {
        self.inspections
            .lock()
            .unwrap()
            .insert(url.to_string(), inspection);
    }

    // === Error injection ===

    /// Make `list_sites` return an error
    pub fn fail_list_sites(&self, msg: &str) {
        *self.error_on_list_sites.lock().unwrap() = Some(msg.to_string());
    }

    /// Make inspection of a specific URL return an error
    pub fn fail_inspection(&self, url: &str) {
        self.failing_inspections
            .lock()
            .unwrap()
            .insert(url.to_string());
    }

    // === Call verification ===

    /// How many times `list_sites` was called
    pub fn list_sites_call_count(&self) -> usize {
        self.list_sites_calls.load(Ordering::SeqCst)
    }

    /// Sites that `list_sitemaps` was called for
    pub fn get_list_sitemaps_calls(&self) -> Vec<String> {
        self.list_sitemaps_calls.lock().unwrap().clone()
    }

    /// `(site_url, url)` pairs that were inspected, in call order
    pub fn get_inspect_calls(&self) -> Vec<(String, String)> {
        self.inspect_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConsoleApi for MockConsoleApi {
    async fn list_sites(&self) -> Result<Vec<SiteEntry>> {
        self.list_sites_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = self.error_on_list_sites.lock().unwrap().as_ref() {
            return Err(Error::ConsoleApi(msg.clone()));
        }

        Ok(self.sites.clone())
    }

    async fn list_sitemaps(&self, site_url: &str) -> Result<Vec<SitemapRef>> {
        self.list_sitemaps_calls
            .lock()
            .unwrap()
            .push(site_url.to_string());

        let sitemaps = self.sitemaps.lock().unwrap();
        Ok(sitemaps.get(site_url).cloned().unwrap_or_default())
    }

    async fn inspect_url_index(&self, site_url: &str, url: &str) -> Result<UrlInspection> {
        self.inspect_calls
            .lock()
            .unwrap()
            .push((site_url.to_string(), url.to_string()));

        if self.failing_inspections.lock().unwrap().contains(url) {
            return Err(Error::ConsoleApi(format!("inspection quota hit for {url}")));
        }

        let inspections = self.inspections.lock().unwrap();
        inspections
            .get(url)
            .cloned()
            .ok_or_else(|| Error::ConsoleApi(format!("no inspection configured for {url}")))
    }
}
