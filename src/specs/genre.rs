// src/specs/genre.rs
//! Genre labels as the catalog prints them → the coarse genres of the dataset.
//!
//! The site lists sub-genres like "Детская проза" or "Детские стихи" under a
//! `Жанр: ` label. Known sub-genres collapse onto a handful of canonical names;
//! anything else passes through as printed.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::consts::GENRE_PREFIX;

/// Lowercased site label → canonical genre.
static GENRE_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("детская литература: прочее", "Проза"),
        ("детская проза", "Проза"),
        ("детские остросюжетные", "Приключения"),
        ("детские приключения", "Приключения"),
        ("детские стихи", "Стихи"),
        ("детский фольклор", "Сказка"),
        ("книга-игра", "Образовательная литература"),
        ("образовательная литература", "Образовательная литература"),
        ("подростковая литература", "Подростковая"),
        ("сказка", "Сказка"),
    ])
});

/// Canonical genre for a lowercased label, if the label is known.
pub fn canonical_genre(label: &str) -> Option<&'static str> {
    GENRE_MAP.get(label).copied()
}

/// Every known label with its canonical genre.
pub fn known_labels() -> impl Iterator<Item = (&'static str, &'static str)> {
    GENRE_MAP.iter().map(|(k, v)| (*k, *v))
}

/// Strip one `Жанр: ` prefix, trim, then map through the table.
/// Unknown labels come back trimmed with their original casing.
pub fn normalize_genre(raw: &str) -> String {
    let cleaned = raw.strip_prefix(GENRE_PREFIX).unwrap_or(raw).trim();
    match canonical_genre(&cleaned.to_lowercase()) {
        Some(canonical) => s!(canonical),
        None => s!(cleaned),
    }
}
