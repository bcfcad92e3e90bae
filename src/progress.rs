// src/progress.rs
/// Lightweight progress reporting for the page loop.
/// The CLI implements this to print status lines for the user.
pub trait Progress {
    /// Called once before the first page, with the page ceiling.
    fn begin(&mut self, _max_pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page was fetched and yielded `records` books.
    fn page_done(&mut self, _page: u32, _records: usize) {}

    /// A page could not be fetched.
    fn page_failed(&mut self, _page: u32, _url: &str, _err: &str) {}

    /// A single listing on a page was malformed and skipped.
    fn listing_failed(&mut self, _page: u32, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
