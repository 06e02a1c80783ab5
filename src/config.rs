//! Run configuration
//!
//! All ambient process state (environment variables) is read exactly once,
//! here, at startup. Components receive the resulting [`Config`] by
//! reference and never consult the environment themselves.

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Default path of the submission history file, relative to the working
/// directory.
pub const DEFAULT_STATE_FILE: &str = "indexed-urls.json";

/// Default path of the CSV URL list when CSV mode is enabled without an
/// explicit path.
pub const DEFAULT_CSV_FILE: &str = "urls.csv";

/// Where candidate URLs come from for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    /// Fetch and parse the site's sitemap
    Sitemap,
    /// Read the first record of a local CSV file
    Csv(PathBuf),
}

/// Values given on the command line, taking precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--key-file`
    pub key_file: Option<PathBuf>,
    /// `--indexnow-key`
    pub indexnow_key: Option<String>,
    /// `--state-file`
    pub state_path: Option<PathBuf>,
    /// `--csv`
    pub csv: Option<PathBuf>,
}

/// One-time snapshot of the environment variables the tool understands
#[derive(Debug, Clone, Default)]
struct EnvSnapshot {
    key_file: Option<PathBuf>,
    indexnow_key: Option<String>,
    index_from_csv: bool,
}

impl EnvSnapshot {
    fn capture() -> Self {
        Self {
            key_file: env::var_os("GOOGLE_KEY_FILE").map(PathBuf::from),
            indexnow_key: env::var("INDEXNOW_KEY").ok(),
            index_from_csv: env::var("INDEX_FROM_CSV").is_ok_and(|v| v == "true"),
        }
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the Search Console service-account key file
    pub key_file: PathBuf,
    /// IndexNow shared secret
    pub indexnow_key: String,
    /// Path of the submission history file
    pub state_path: PathBuf,
    /// Candidate URL source
    pub source: UrlSource,
}

impl Config {
    /// Resolve configuration from CLI overrides and the environment.
    ///
    /// Missing key file path or IndexNow key is fatal and reported before
    /// any network activity.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, EnvSnapshot::capture())
    }

    fn resolve(overrides: ConfigOverrides, env: EnvSnapshot) -> Result<Self> {
        let key_file = overrides
            .key_file
            .or(env.key_file)
            .ok_or_else(missing_key_file)?;

        let indexnow_key = overrides
            .indexnow_key
            .or(env.indexnow_key)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "missing IndexNow shared key: pass --indexnow-key or set INDEXNOW_KEY"
                        .to_string(),
                )
            })?;

        let state_path = overrides
            .state_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));

        let source = match overrides.csv {
            Some(path) => UrlSource::Csv(path),
            None if env.index_from_csv => UrlSource::Csv(PathBuf::from(DEFAULT_CSV_FILE)),
            None => UrlSource::Sitemap,
        };

        Ok(Self {
            key_file,
            indexnow_key,
            state_path,
            source,
        })
    }
}

/// Resolve the Search Console key file path from an override or
/// `GOOGLE_KEY_FILE`.
///
/// Split out from [`Config::load`] because `auth test` needs the key file
/// without the rest of the configuration.
pub fn resolve_key_file(key_file: Option<PathBuf>) -> Result<PathBuf> {
    key_file
        .or_else(|| env::var_os("GOOGLE_KEY_FILE").map(PathBuf::from))
        .ok_or_else(missing_key_file)
}

fn missing_key_file() -> Error {
    Error::Config(
        "missing Search Console key file: pass --key-file or set GOOGLE_KEY_FILE".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_overrides() -> ConfigOverrides {
        ConfigOverrides {
            key_file: Some(PathBuf::from("key.json")),
            indexnow_key: Some("secret".to_string()),
            ..ConfigOverrides::default()
        }
    }

    #[test]
    fn missing_key_file_is_fatal() {
        let result = Config::resolve(
            ConfigOverrides {
                indexnow_key: Some("secret".to_string()),
                ..ConfigOverrides::default()
            },
            EnvSnapshot::default(),
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("GOOGLE_KEY_FILE"), "got: {err}");
    }

    #[test]
    fn missing_indexnow_key_is_fatal() {
        let result = Config::resolve(
            ConfigOverrides {
                key_file: Some(PathBuf::from("key.json")),
                ..ConfigOverrides::default()
            },
            EnvSnapshot::default(),
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("INDEXNOW_KEY"), "got: {err}");
    }

    #[test]
    fn empty_indexnow_key_is_rejected() {
        let result = Config::resolve(
            ConfigOverrides {
                key_file: Some(PathBuf::from("key.json")),
                indexnow_key: Some(String::new()),
                ..ConfigOverrides::default()
            },
            EnvSnapshot::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn overrides_take_precedence_over_env() {
        let env = EnvSnapshot {
            key_file: Some(PathBuf::from("env-key.json")),
            indexnow_key: Some("from-env".to_string()),
            index_from_csv: false,
        };
        let config = Config::resolve(full_overrides(), env).unwrap();
        assert_eq!(config.key_file, PathBuf::from("key.json"));
        assert_eq!(config.indexnow_key, "secret");
    }

    #[test]
    fn env_fills_in_missing_overrides() {
        let env = EnvSnapshot {
            key_file: Some(PathBuf::from("env-key.json")),
            indexnow_key: Some("from-env".to_string()),
            index_from_csv: false,
        };
        let config = Config::resolve(ConfigOverrides::default(), env).unwrap();
        assert_eq!(config.key_file, PathBuf::from("env-key.json"));
        assert_eq!(config.indexnow_key, "from-env");
    }

    #[test]
    fn defaults_to_sitemap_source_and_state_file() {
        let config = Config::resolve(full_overrides(), EnvSnapshot::default()).unwrap();
        assert_eq!(config.source, UrlSource::Sitemap);
        assert_eq!(config.state_path, PathBuf::from(DEFAULT_STATE_FILE));
    }

    #[test]
    fn csv_env_flag_selects_csv_source() {
        let env = EnvSnapshot {
            index_from_csv: true,
            ..EnvSnapshot::default()
        };
        let config = Config::resolve(full_overrides(), env).unwrap();
        assert_eq!(config.source, UrlSource::Csv(PathBuf::from(DEFAULT_CSV_FILE)));
    }

    #[test]
    fn csv_flag_overrides_env_source() {
        let mut overrides = full_overrides();
        overrides.csv = Some(PathBuf::from("pages.csv"));
        let config = Config::resolve(overrides, EnvSnapshot::default()).unwrap();
        assert_eq!(config.source, UrlSource::Csv(PathBuf::from("pages.csv")));
    }
}
