// src/scrape.rs
use std::{fmt, thread};

use tracing::{info, warn};

use crate::{
    config::consts::PAGE_EXT,
    config::options::ScrapeOptions,
    core::{html, net::Fetch},
    error::FetchError,
    progress::Progress,
    specs::listing::{extract_books, PageExtract},
    store::Dataset,
};

/// Why the page loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// This page parsed fine but held no complete listing.
    EmptyPage(u32),
    /// This page could not be fetched. Ends the run like an empty page.
    FetchFailed(u32),
    /// Every page up to the ceiling yielded books.
    PageLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EmptyPage(n) => write!(f, "page {n} had no listings"),
            StopReason::FetchFailed(n) => write!(f, "page {n} could not be fetched"),
            StopReason::PageLimit => write!(f, "page limit reached"),
        }
    }
}

pub struct RunSummary {
    pub dataset: Dataset,
    pub pages_fetched: u32,
    pub stop: StopReason,
}

/// Page 1 is `<base>.html`, page N is `<base>-N.html`.
pub fn page_url(base: &str, page: u32) -> String {
    if page <= 1 {
        join!(base, PAGE_EXT)
    } else {
        format!("{base}-{page}{PAGE_EXT}")
    }
}

fn end_of_catalog(page: u32) -> String {
    format!("На странице {page} не найдено подходящих книг. Возможно, это конец.")
}

/// Fetch, parse and extract a single page.
pub fn scrape_page(fetcher: &dyn Fetch, url: &str) -> Result<PageExtract, FetchError> {
    let body = fetcher.fetch(url)?;
    let page = html::parse_page(&body);
    Ok(extract_books(&page))
}

/// Walk the catalog from page 1 until a page yields nothing (or fails),
/// or `max_pages` is reached. Sleeps `pause` between productive pages.
pub fn collect_books(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.max_pages);
    }

    let mut dataset = Dataset::new();
    let mut pages_fetched = 0;
    let mut stop = StopReason::PageLimit;

    for page in 1..=opts.max_pages {
        let url = page_url(&opts.base_url, page);
        pages_fetched += 1;

        let extract = match scrape_page(fetcher, &url) {
            Ok(extract) => extract,
            Err(e) => {
                warn!(page, error = %e, "page fetch failed");
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(page, &url, &e.to_string());
                    p.log(&end_of_catalog(page));
                }
                stop = StopReason::FetchFailed(page);
                break;
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            for failure in &extract.failures {
                p.listing_failed(page, &failure.to_string());
            }
        }

        if extract.records.is_empty() {
            info!(page, "no listings, stopping");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&end_of_catalog(page));
            }
            stop = StopReason::EmptyPage(page);
            break;
        }

        let found = extract.records.len();
        info!(page, found, skipped = extract.skipped, "page scraped");
        dataset.extend(extract.records);
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, found);
        }

        if page < opts.max_pages {
            thread::sleep(opts.pause); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    RunSummary { dataset, pages_fetched, stop }
}
