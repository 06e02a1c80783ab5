//! Multi-provider submission engine
//!
//! One payload, serialized once, posted to N endpoints concurrently. Every
//! provider yields exactly one outcome, in provider-list order, before the
//! call returns; a provider that cannot be reached is an outcome, not an
//! error.

use crate::error::Result;
use crate::types::{IndexNowPayload, ProviderResponse, SubmissionOutcome};
use futures::future::join_all;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// The IndexNow-compatible engines notified on every submission
pub const DEFAULT_PROVIDERS: [&str; 6] = [
    "https://api.indexnow.org/indexnow",
    "https://www.bing.com/indexnow",
    "https://searchadvisor.naver.com/indexnow",
    "https://search.seznam.cz/indexnow",
    "https://yandex.com/indexnow",
    "https://indexnow.yep.com/indexnow",
];

/// Request timeout per provider call
///
/// Bounds the all-settle wait: a hung provider resolves to an unreachable
/// outcome instead of stalling its slot indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// IndexNow submission client
pub struct IndexNowClient {
    client: Client,
    providers: Vec<String>,
}

impl IndexNowClient {
    /// Create a client targeting the default provider set
    pub fn new() -> Result<Self> {
        Self::with_providers(DEFAULT_PROVIDERS.iter().map(ToString::to_string).collect())
    }

    /// Create a client targeting an explicit provider list
    pub fn with_providers(providers: Vec<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("site-reindex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, providers })
    }

    /// The configured provider endpoints, in submission order
    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// Submit a URL list to every configured provider
    ///
    /// The payload is serialized once; every provider receives the identical
    /// bytes. All provider calls are launched together and the call waits
    /// for every one to settle. The returned outcomes match the provider
    /// list in length and order regardless of completion timing.
    ///
    /// The outer `Result` fails only if the payload cannot be serialized;
    /// provider-level failures are captured in the outcomes.
    pub async fn submit(
        &self,
        host: &str,
        key: &str,
        urls: &[String],
    ) -> Result<Vec<SubmissionOutcome>> {
        let payload = IndexNowPayload {
            host: host.to_string(),
            key: key.to_string(),
            url_list: urls.to_vec(),
        };
        let body = serde_json::to_string(&payload)?;

        debug!(host = %host, urls = urls.len(), providers = self.providers.len(), "submitting to IndexNow");

        let calls = self.providers.iter().map(|provider| {
            let body = body.clone();
            async move {
                let response = match post_payload(&self.client, provider, body).await {
                    Ok((status, text)) => ProviderResponse::Received { status, body: text },
                    Err(e) => ProviderResponse::Unreachable {
                        error: e.to_string(),
                    },
                };
                SubmissionOutcome {
                    provider: provider.clone(),
                    response,
                }
            }
        });

        Ok(join_all(calls).await)
    }
}

async fn post_payload(client: &Client, url: &str, body: String) -> reqwest::Result<(u16, String)> {
    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let text = response.text().await?;
    Ok((status, text))
}
