// src/core/html.rs
// Page decoding and small helpers over the scraper tree.

use encoding_rs::{Encoding, UTF_8};
use scraper::{ElementRef, Html};
use tracing::debug;

/// How far into the document we look for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Decode raw page bytes into text.
///
/// Order: byte-order mark, then `<meta charset=…>` / `http-equiv` content in the
/// head of the document, then UTF-8 (lossy).
pub fn decode_body(bytes: &[u8]) -> String {
    let encoding = Encoding::for_bom(bytes)
        .map(|(enc, _)| enc)
        .or_else(|| sniff_meta_charset(bytes))
        .unwrap_or(UTF_8);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!(encoding = encoding.name(), "decoded page with replacement characters");
    }
    text.into_owned()
}

fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let at = head.find("charset=")? + "charset=".len();
    let label: String = head[at..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    Encoding::for_label(label.as_bytes())
}

/// Decode and build the traversable tree.
pub fn parse_page(bytes: &[u8]) -> Html {
    Html::parse_document(&decode_body(bytes))
}

/// Concatenated text of a node and its descendants, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// True when the element carries a non-empty `class` attribute.
pub fn has_class_marker(el: ElementRef<'_>) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|c| !c.trim().is_empty())
}
