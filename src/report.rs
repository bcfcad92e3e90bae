// src/report.rs
// Genre distribution for the end-of-run summary.

use indexmap::IndexMap;

use crate::store::BookRecord;

/// `(genre, count)` sorted by count, largest first.
/// Ties keep the order in which genres were first seen.
pub fn genre_counts(records: &[BookRecord]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.genre()).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(genre, n)| (s!(genre), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

pub fn render_report(counts: &[(String, usize)]) -> String {
    let mut out = s!("\nРаспределение жанров:\n");
    for (genre, count) in counts {
        out.push_str(&format!("  {genre}: {count} книг\n"));
    }
    out
}

/// Header block of the end-of-run summary: total books collected.
pub fn render_statistics(total: usize) -> String {
    format!("\nСтатистика:\nВсего собрано книг: {total}\n")
}

/// Count genres and print the distribution block to stdout.
pub fn summarize(records: &[BookRecord]) -> Vec<(String, usize)> {
    let counts = genre_counts(records);
    print!("{}", render_report(&counts));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(genre: &str) -> BookRecord {
        BookRecord::new(genre, "Книга: текст").unwrap()
    }

    #[test]
    fn sorted_by_count_descending() {
        let records = [rec("Стихи"), rec("Сказка"), rec("Сказка"), rec("Проза"), rec("Сказка"), rec("Проза")];
        assert_eq!(
            genre_counts(&records),
            vec![(s!("Сказка"), 3), (s!("Проза"), 2), (s!("Стихи"), 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = [rec("Проза"), rec("Стихи"), rec("Стихи"), rec("Проза")];
        let genres: Vec<_> = genre_counts(&records).into_iter().map(|(g, _)| g).collect();
        assert_eq!(genres, ["Проза", "Стихи"]);
    }

    #[test]
    fn renders_lines() {
        let text = render_report(&[(s!("Сказка"), 3), (s!("Проза"), 1)]);
        assert_eq!(text, "\nРаспределение жанров:\n  Сказка: 3 книг\n  Проза: 1 книг\n");
    }

    #[test]
    fn renders_total() {
        assert_eq!(render_statistics(4), "\nСтатистика:\nВсего собрано книг: 4\n");
    }

    #[test]
    fn empty_input() {
        assert!(genre_counts(&[]).is_empty());
        assert_eq!(render_report(&[]), "\nРаспределение жанров:\n");
    }
}
