// src/specs/listing.rs
//! Scraping *spec* for one catalog page.
//!
//! A page holds `div.bookView` blocks, each with a `<ul>` of exactly six `<li>`:
//!
//! ```text
//! <div class="bookView">
//!   <ul>
//!     <li class="title">…</li>   title, found by class
//!     <li class="author">…</li>
//!     <li>Жанр: …</li>            genre, position 2
//!     <li>…</li>                  description, position 3
//!     <li class="…">…</li>
//!     <li class="…">…</li>
//!   </ul>
//! </div>
//! ```
//!
//! Genre and description are positional, so a classed `<li>` at either
//! position means the block is laid out differently; its value is treated as
//! missing and the block is dropped.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::consts::{DESCRIPTION_FIELD, GENRE_FIELD, LISTING_FIELDS};
use crate::core::html::{has_class_marker, text_of};
use crate::core::sanitize::clean_text;
use crate::error::ListingError;
use crate::specs::genre::normalize_genre;
use crate::store::BookRecord;

static BOOK_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector("div.bookView"));
static FIELD_LIST: LazyLock<Selector> = LazyLock::new(|| selector("ul"));
static FIELD: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static TITLE_FIELD: LazyLock<Selector> = LazyLock::new(|| selector("li.title"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// What one page yielded.
#[derive(Debug, Default)]
pub struct PageExtract {
    pub records: Vec<BookRecord>,
    /// Blocks of another shape, or missing a title/genre/description.
    pub skipped: usize,
    pub failures: Vec<ListingError>,
}

/// `"{title}: {body}"`; both parts are expected to be sanitized already.
pub fn format_description(title: &str, body: &str) -> String {
    format!("{title}: {body}")
}

/// Extract every complete listing on the page, in page order.
/// A malformed block is recorded in `failures` and never stops the page.
pub fn extract_books(page: &Html) -> PageExtract {
    let mut out = PageExtract::default();

    for (index, block) in page.select(&BOOK_BLOCK).enumerate() {
        match extract_block(block, index) {
            Ok(Some(record)) => out.records.push(record),
            Ok(None) => out.skipped += 1,
            Err(e) => {
                warn!(error = %e, "skipping listing");
                out.failures.push(e);
            }
        }
    }
    out
}

fn extract_block(block: ElementRef<'_>, index: usize) -> Result<Option<BookRecord>, ListingError> {
    let list = block
        .select(&FIELD_LIST)
        .next()
        .ok_or(ListingError::MissingFieldList { index })?;

    let fields: Vec<ElementRef<'_>> = list.select(&FIELD).collect();
    if fields.len() != LISTING_FIELDS {
        debug!(index, fields = fields.len(), "listing has an unsupported shape");
        return Ok(None);
    }

    let title = list.select(&TITLE_FIELD).next().map(text_of).unwrap_or_default();
    let title = clean_text(title);

    let genre = normalize_genre(&positional_text(&fields, GENRE_FIELD));
    let description = clean_text(positional_text(&fields, DESCRIPTION_FIELD));

    if title.is_empty() || genre.is_empty() || description.is_empty() {
        debug!(index, "listing is missing title, genre or description");
        return Ok(None);
    }

    Ok(BookRecord::new(genre, format_description(&title, &description)))
}

/// Text of the field at `pos`, or empty if the field is classed.
fn positional_text(fields: &[ElementRef<'_>], pos: usize) -> String {
    match fields.get(pos) {
        Some(&field) if !has_class_marker(field) => text_of(field),
        _ => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, genre: &str, description: &str) -> String {
        format!(
            r#"<div class="bookView"><ul>
                 <li class="title"><a href="/b/1">{title}</a></li>
                 <li class="author">Автор</li>
                 <li>{genre}</li>
                 <li>{description}</li>
                 <li class="price">100 руб.</li>
                 <li class="buy">Купить</li>
               </ul></div>"#
        )
    }

    fn page(blocks: &[String]) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", blocks.concat()))
    }

    #[test]
    fn extracts_complete_listing() {
        let doc = page(&[listing("Колобок (Kolobok)", "Жанр: Сказка", "Про  колобка!")]);
        let out = extract_books(&doc);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].genre(), "Сказка");
        assert_eq!(out.records[0].description(), "Колобок (): Про колобка!");
        assert!(out.failures.is_empty());
    }

    #[test]
    fn maps_subgenre() {
        let doc = page(&[listing("Денискины рассказы", "Жанр: Детская проза", "Рассказы.")]);
        assert_eq!(extract_books(&doc).records[0].genre(), "Проза");
    }

    #[test]
    fn keeps_page_order() {
        let doc = page(&[
            listing("Первая", "Жанр: Сказка", "Один."),
            listing("Вторая", "Жанр: Детские стихи", "Два."),
            listing("Третья", "Жанр: Фантастика", "Три."),
        ]);
        let titles: Vec<_> = extract_books(&doc)
            .records
            .iter()
            .map(|r| r.description().to_string())
            .collect();
        assert_eq!(titles, ["Первая: Один.", "Вторая: Два.", "Третья: Три."]);
    }

    #[test]
    fn drops_blocks_with_wrong_field_count() {
        let five = r#"<div class="bookView"><ul>
            <li class="title">Репка</li><li>Автор</li><li>Жанр: Сказка</li><li>Текст</li><li>x</li>
            </ul></div>"#;
        let seven = r#"<div class="bookView"><ul>
            <li class="title">Репка</li><li>Автор</li><li>Жанр: Сказка</li><li>Текст</li>
            <li>x</li><li>y</li><li>z</li></ul></div>"#;
        let out = extract_books(&page(&[s!(five), s!(seven), listing("Теремок", "Жанр: Сказка", "Текст.")]));
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.skipped, 2);
        assert_eq!(out.records[0].description(), "Теремок: Текст.");
    }

    #[test]
    fn drops_incomplete_listings() {
        let out = extract_books(&page(&[
            listing("", "Жанр: Сказка", "Текст."),
            listing("Title only latin", "Жанр: Сказка", "Текст."),
            listing("Репка", "   ", "Текст."),
            listing("Репка", "Жанр: Сказка", "English only"),
        ]));
        assert!(out.records.is_empty());
        assert_eq!(out.skipped, 4);
    }

    #[test]
    fn bare_genre_label_is_kept_as_printed() {
        // the cell text is trimmed before the prefix check, so "Жанр: " loses its space
        let out = extract_books(&page(&[listing("Репка", "Жанр: ", "Текст.")]));
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].genre(), "Жанр:");
    }

    #[test]
    fn rejects_classed_positional_fields() {
        let shifted = r#"<div class="bookView"><ul>
            <li class="title">Репка</li><li>Автор</li>
            <li class="title">Жанр: Сказка</li><li>Текст.</li>
            <li>x</li><li>y</li></ul></div>"#;
        let classed_description = r#"<div class="bookView"><ul>
            <li class="title">Репка</li><li>Автор</li>
            <li>Жанр: Сказка</li><li class="annotation">Текст.</li>
            <li>x</li><li>y</li></ul></div>"#;
        let out = extract_books(&page(&[s!(shifted), s!(classed_description)]));
        assert!(out.records.is_empty());
        assert_eq!(out.skipped, 2);
    }

    #[test]
    fn missing_field_list_is_reported_and_page_continues() {
        let broken = r#"<div class="bookView"><p>нет списка</p></div>"#;
        let out = extract_books(&page(&[
            listing("Первая", "Жанр: Сказка", "Один."),
            s!(broken),
            listing("Вторая", "Жанр: Сказка", "Два."),
        ]));
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.failures, vec![ListingError::MissingFieldList { index: 1 }]);
    }

    #[test]
    fn page_without_listings_is_empty() {
        let out = extract_books(&Html::parse_document("<html><body><p>404</p></body></html>"));
        assert!(out.records.is_empty());
        assert_eq!(out.skipped, 0);
    }

    #[test]
    fn description_format() {
        assert_eq!(format_description("T", "D"), "T: D");
        assert_eq!(format_description("T", ""), "T: ");
    }
}
