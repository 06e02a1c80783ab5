//! Search Console authentication
//!
//! Supports CLI-based auth (gcloud) and an environment variable fallback.

use crate::console::ConsoleApi;
use crate::error::{Error, Result};
use std::env;
use std::path::Path;
use tokio::process::Command;

/// Source of the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token minted by the gcloud CLI
    Cli,
    /// Token from the `GOOGLE_ACCESS_TOKEN` environment variable
    EnvVar,
}

/// Search Console authentication configuration
#[derive(Debug, Clone)]
pub struct ConsoleAuthConfig {
    /// OAuth2 access token with webmasters scope
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Get Search Console authentication
///
/// Priority:
/// 1. gcloud CLI (`gcloud auth application-default print-access-token`,
///    with `GOOGLE_APPLICATION_CREDENTIALS` pointed at the key file)
/// 2. `GOOGLE_ACCESS_TOKEN` environment variable
pub async fn get_console_auth(key_file: &Path) -> Result<ConsoleAuthConfig> {
    if let Some(token) = get_gcloud_token(key_file).await {
        return Ok(ConsoleAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    if let Ok(token) = env::var("GOOGLE_ACCESS_TOKEN") {
        if !token.is_empty() {
            return Ok(ConsoleAuthConfig {
                token,
                source: AuthSource::EnvVar,
            });
        }
    }

    Err(Error::Auth(
        "No Search Console authentication found. Install the gcloud CLI or set GOOGLE_ACCESS_TOKEN"
            .to_string(),
    ))
}

async fn get_gcloud_token(key_file: &Path) -> Option<String> {
    // Check gcloud is available
    Command::new("gcloud").arg("--version").output().await.ok()?;

    let output = Command::new("gcloud")
        .args(["auth", "application-default", "print-access-token"])
        .env("GOOGLE_APPLICATION_CREDENTIALS", key_file)
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

/// Test Search Console authentication
///
/// Lists the account's site properties and returns how many are visible.
pub async fn test_console_auth(console: &dyn ConsoleApi) -> Result<usize> {
    let sites = console.list_sites().await?;
    Ok(sites.len())
}
