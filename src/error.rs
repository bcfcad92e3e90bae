// src/error.rs
//! Error types for the scraper.
//!
//! Fetch and listing errors are recovered locally by the pagination loop;
//! output errors propagate to the binary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single catalog page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },
}

/// One listing block on a page is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("listing #{index} has no field list")]
    MissingFieldList { index: usize },
}

/// Writing the dataset failed.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize dataset: {0}")]
    Json(#[from] serde_json::Error),
}
