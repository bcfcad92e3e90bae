// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://knigi-detyam.example/catalog/detskie";
pub const PAGE_EXT: &str = ".html";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Pagination
pub const MAX_PAGES: u32 = 300;
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite

// Listing shape
pub const LISTING_FIELDS: usize = 6;
pub const GENRE_FIELD: usize = 2;
pub const DESCRIPTION_FIELD: usize = 3;
pub const GENRE_PREFIX: &str = "Жанр: ";

// Export
pub const DEFAULT_OUT_FILE: &str = "children_books_dataset.json";
