//! # Scraping "specs" module
//!
//! Knows how to read the catalog's pages. Each spec encodes *where the data
//! lives in the HTML* and *how to turn it into clean values*:
//!
//! - `listing` – `div.bookView` blocks → [`BookRecord`](crate::store::BookRecord)s.
//! - `genre` – site genre labels → canonical genres.
//!
//! Fetching, pagination and persistence live elsewhere (`scrape`, `file`).
//! Specs are testable offline against inline HTML fixtures.
pub mod genre;
pub mod listing;
