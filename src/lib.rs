//! site-reindex - reconcile indexed pages between Search Console and IndexNow
//!
//! The library is organized around a small set of collaborators:
//!
//! - [`console`] - narrow seam over the Search Console API (site listing,
//!   sitemap listing, per-URL inspection)
//! - [`source`] - resolve a site's candidate URLs from its sitemap or a CSV
//! - [`history`] - persisted set of URLs already submitted in past runs
//! - [`select`] - compute the subset to process for a run
//! - [`submit`] - fan out one payload to every IndexNow provider concurrently
//! - [`inspect`] - sequential per-URL crawl/index status reporting

pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod history;
pub mod inspect;
pub mod select;
pub mod source;
pub mod submit;
pub mod types;
