//! CSV URL source
//!
//! Flat-file mode: the first record of a headerless CSV is the URL list.
//! No domain filtering is applied to file-sourced URLs.

use crate::error::Result;
use std::fs::File;
use std::path::Path;

/// Read the candidate URL list from a CSV file
pub fn read_csv_urls(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(file);

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(ToString::to_string).collect()),
        None => Ok(Vec::new()),
    }
}
