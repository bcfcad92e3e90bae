// src/store.rs
use serde::Serialize;

/// One scraped book. Both fields are non-empty; `new` refuses anything else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    genre: String,
    description: String,
}

impl BookRecord {
    pub fn new(genre: impl Into<String>, description: impl Into<String>) -> Option<Self> {
        let (genre, description) = (genre.into(), description.into());
        if genre.is_empty() || description.is_empty() {
            return None;
        }
        Some(Self { genre, description })
    }

    pub fn genre(&self) -> &str { &self.genre }
    pub fn description(&self) -> &str { &self.description }
}

/// Records in page-then-listing order. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<BookRecord>,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    pub fn extend<I: IntoIterator<Item = BookRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[BookRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
