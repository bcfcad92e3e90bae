// src/cli.rs
// Entry point logic: scrape the whole catalog, save it, print the summary.
// Takes no arguments.

use color_eyre::eyre::Result;
use tracing::info;

use crate::{
    config::options::AppOptions,
    core::net::HttpFetcher,
    file, progress::Progress, report, scrape,
};

/// Prints progress lines to the console.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, page: u32, records: usize) {
        println!("Страница {page}: найдено книг: {records}");
    }

    fn page_failed(&mut self, _page: u32, url: &str, err: &str) {
        println!("Ошибка при загрузке страницы {url}: {err}");
    }

    fn listing_failed(&mut self, _page: u32, err: &str) {
        println!("Ошибка при обработке книги: {err}");
    }
}

pub fn run() -> Result<()> {
    crate::log::init();

    let opts = AppOptions::default();
    let fetcher = HttpFetcher::new()?;

    let summary = scrape::collect_books(&fetcher, &opts.scrape, Some(&mut ConsoleProgress));
    info!(pages = summary.pages_fetched, stop = %summary.stop, "scrape finished");
    let dataset = summary.dataset;

    if dataset.is_empty() {
        println!("Не удалось собрать данные");
        return Ok(());
    }

    if let Some(path) = file::write_dataset(&dataset, &opts.export.out_path)? {
        println!("Данные сохранены в {}", path.display());
    }

    print!("{}", report::render_statistics(dataset.len()));
    report::summarize(dataset.records());
    Ok(())
}
