//! Default command - the interactive reconcile flow
//!
//! Discovers a site's candidate URLs, lets the operator pick a scope,
//! reports current crawl/index status, submits to IndexNow, and records the
//! processed URLs in the history file.

use crate::cli::prompt;
use crate::cli::style::{Stylize, bullet, cross, hyperlink_url, spinner_style};
use crate::cli::submit::report_submission;
use anstream::println;
use async_trait::async_trait;
use indicatif::ProgressBar;
use site_reindex::auth::get_console_auth;
use site_reindex::config::{Config, UrlSource};
use site_reindex::console::{ConsoleApi, GoogleConsole};
use site_reindex::error::{Error, Result};
use site_reindex::history::HistoryStore;
use site_reindex::inspect::{InspectObserver, inspect_urls};
use site_reindex::select::select_urls;
use site_reindex::source::{fetch_sitemap_urls, read_csv_urls, sitemap_urls_from};
use site_reindex::submit::IndexNowClient;
use site_reindex::types::{InspectionOutcome, InspectionReport};
use std::time::Duration;
use url::Url;

/// Observer that prints each inspection result under a spinner
struct InspectPrinter {
    bar: ProgressBar,
}

impl InspectPrinter {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner().with_style(spinner_style());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    fn finish(self) {
        self.bar.finish_and_clear();
    }
}

#[async_trait]
impl InspectObserver for InspectPrinter {
    async fn on_outcome(&self, outcome: &InspectionOutcome) {
        match &outcome.report {
            InspectionReport::Inspected(inspection) => {
                let crawled = inspection.last_crawl_time.map_or_else(
                    || "never".to_string(),
                    |t| t.format("%Y-%m-%d %H:%M").to_string(),
                );
                self.bar.println(format!(
                    "  {} {} | {} | last crawled {}",
                    bullet(),
                    hyperlink_url(&outcome.url),
                    inspection.coverage_state,
                    crawled.muted()
                ));
            }
            InspectionReport::Failed { error } => {
                self.bar.println(format!(
                    "  {} {} | inspection failed: {}",
                    cross(),
                    outcome.url,
                    error.error()
                ));
            }
        }
        self.bar.set_message("inspecting...".to_string());
    }
}

/// Run the default reconcile flow
pub async fn run_reconcile(config: &Config, dry_run: bool) -> Result<()> {
    let auth = get_console_auth(&config.key_file).await?;
    let console = GoogleConsole::new(auth.token)?;
    reconcile_with(&console, config, dry_run).await
}

async fn reconcile_with(console: &dyn ConsoleApi, config: &Config, dry_run: bool) -> Result<()> {
    let sites = console.list_sites().await?;
    if sites.is_empty() {
        println!("No site properties visible to this account");
        return Ok(());
    }

    let site_urls: Vec<String> = sites.iter().map(|s| s.site_url.clone()).collect();
    let selected = prompt::select("Select a site", &site_urls)?;
    let site_url = &site_urls[selected];
    let domain = domain_of(site_url)?;
    println!("Selected site: {}", site_url.accent());
    println!("Using domain: {}", domain.accent());

    let candidates = resolve_candidates(console, config, site_url, &domain).await?;
    if candidates.is_empty() {
        println!("No URLs found");
        return Ok(());
    }

    println!(
        "Found {} page{} for {}:",
        candidates.len().accent(),
        if candidates.len() == 1 { "" } else { "s" },
        site_url.accent()
    );
    for url in &candidates {
        println!("  {} {url}", bullet());
    }

    if !prompt::confirm("Submit these pages for (re)indexing?")? {
        println!("Nothing submitted.");
        return Ok(());
    }

    let store = HistoryStore::new(&config.state_path);
    let history = store.load();

    let mode = prompt::select_mode()?;
    let to_process = select_urls(&candidates, &history, mode);
    if to_process.is_empty() {
        println!("No URLs to process");
        return Ok(());
    }

    println!(
        "Processing {} URL{}...",
        to_process.len().accent(),
        if to_process.len() == 1 { "" } else { "s" }
    );

    let printer = InspectPrinter::new();
    let outcomes = inspect_urls(console, site_url, &to_process, &printer).await;
    printer.finish();

    let failed = outcomes.iter().filter(|o| !o.is_inspected()).count();
    if failed > 0 {
        println!(
            "{}",
            format!("{failed} inspection{} failed", if failed == 1 { "" } else { "s" }).warn()
        );
    }

    if dry_run {
        println!("{}", "Dry run - skipping IndexNow submission".muted());
        return Ok(());
    }

    println!();
    println!("Submitting to IndexNow providers...");
    let client = IndexNowClient::new()?;
    let results = client
        .submit(&domain, &config.indexnow_key, &to_process)
        .await?;
    report_submission(&results);

    // Processed URLs enter the history whatever the providers answered
    let mut merged = history;
    merged.extend(to_process.iter().cloned());
    store.save(&merged)?;

    println!();
    println!(
        "Indexed {} page{} for {}",
        to_process.len().accent(),
        if to_process.len() == 1 { "" } else { "s" },
        site_url.accent()
    );
    println!("Total unique URLs submitted: {}", merged.len().accent());

    Ok(())
}

/// Produce the run's candidate URL sequence from the configured source
async fn resolve_candidates(
    console: &dyn ConsoleApi,
    config: &Config,
    site_url: &str,
    domain: &str,
) -> Result<Vec<String>> {
    match &config.source {
        UrlSource::Csv(path) => read_csv_urls(path),
        UrlSource::Sitemap => {
            let sitemaps = match console.list_sitemaps(site_url).await {
                Ok(sitemaps) => sitemaps,
                Err(e) => {
                    tracing::warn!(error = %e, "could not list sitemaps, falling back to default path");
                    Vec::new()
                }
            };

            let mut urls = match sitemaps.first() {
                Some(sitemap) => sitemap_urls_from(&sitemap.path, domain).await,
                None => fetch_sitemap_urls(domain).await,
            };

            // Sitemaps list oldest first; submit newest first
            urls.reverse();
            Ok(urls)
        }
    }
}

/// Extract the bare domain from a console site property URL
///
/// Handles both `https://example.com/` and `sc-domain:example.com` forms.
fn domain_of(site_url: &str) -> Result<String> {
    let stripped = site_url.trim_start_matches("sc-domain:");
    let full = if stripped.contains("://") {
        stripped.to_string()
    } else {
        format!("https://{stripped}")
    };

    let parsed = Url::parse(&full)
        .map_err(|e| Error::Config(format!("cannot derive domain from {site_url}: {e}")))?;

    parsed
        .host_str()
        .map(ToString::to_string)
        .ok_or_else(|| Error::Config(format!("site URL has no host: {site_url}")))
}
