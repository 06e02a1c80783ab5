//! Error types for site-reindex

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors surfaced by the library
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is missing or invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Console API authentication could not be obtained
    #[error("authentication error: {0}")]
    Auth(String),

    /// The Search Console API rejected a request
    #[error("console API error: {0}")]
    ConsoleApi(String),

    /// HTTP transport failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Sitemap XML could not be parsed
    #[error("sitemap parse error: {0}")]
    SitemapParse(String),

    /// CSV source could not be read
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure (history file, key file)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding failure
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failure
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
