//! Sitemap fetching and parsing
//!
//! Parses the standard `<urlset><url><loc>` structure and filters the
//! result to URLs belonging to the target domain. Fetch or parse failures
//! are logged and yield an empty candidate set; the caller reports "no URLs
//! found" instead of aborting the run.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Timeout for sitemap fetch requests
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch and resolve `https://{domain}/sitemap.xml`
pub async fn fetch_sitemap_urls(domain: &str) -> Vec<String> {
    sitemap_urls_from(&format!("https://{domain}/sitemap.xml"), domain).await
}

/// Fetch a sitemap from an explicit location and resolve it against a domain
///
/// Returns the sitemap's `<loc>` entries, in source order, filtered to URLs
/// containing the domain. Any network or parse failure resolves to an empty
/// list.
pub async fn sitemap_urls_from(sitemap_url: &str, domain: &str) -> Vec<String> {
    match fetch_and_parse(sitemap_url).await {
        Ok(urls) => filter_to_domain(urls, domain),
        Err(e) => {
            warn!(url = %sitemap_url, error = %e, "failed to resolve sitemap");
            Vec::new()
        }
    }
}

async fn fetch_and_parse(url: &str) -> Result<Vec<String>> {
    let client = http_client()?;
    let xml = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    parse_sitemap(&xml)
}

/// Parse sitemap XML into its `<loc>` entries, in document order
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut buf = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"url" => in_url = true,
                b"loc" if in_url => in_loc = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"url" => in_url = false,
                b"loc" => in_loc = false,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_loc {
                    let text = e.unescape().map_err(|e| Error::SitemapParse(e.to_string()))?;
                    urls.push(text.trim().to_string());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::SitemapParse(format!("XML parse error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(urls)
}

/// Keep only URLs that contain the domain as a substring
///
/// Substring containment, not strict URL parsing; this mirrors how the
/// providers themselves treat host membership loosely.
pub fn filter_to_domain(urls: Vec<String>, domain: &str) -> Vec<String> {
    urls.into_iter().filter(|url| url.contains(domain)).collect()
}

fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("site-reindex/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::from)
}
