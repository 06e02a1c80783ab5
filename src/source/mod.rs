//! Candidate URL sources
//!
//! A run's candidate set comes either from the site's sitemap or from a
//! local CSV file. The resulting sequence is ordered and deliberately not
//! deduplicated; selection and submission see it exactly as the source
//! produced it.

mod csv;
mod sitemap;

pub use csv::read_csv_urls;
pub use sitemap::{fetch_sitemap_urls, filter_to_domain, parse_sitemap, sitemap_urls_from};
