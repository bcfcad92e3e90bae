// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

/// Everything that is not Cyrillic, a digit, whitespace or common punctuation.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^а-яА-ЯёЁ0-9\s.,!?;:()\-—–«»"“”„]"#).expect("sanitizer pattern")
});

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop characters outside the allowed set, then collapse whitespace.
/// Latin letters, symbols and emoji all go; Cyrillic text with
/// ordinary punctuation survives untouched.
pub fn clean_text<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    if s.is_empty() {
        return s!();
    }
    normalize_ws(&DISALLOWED.replace_all(s, ""))
}
