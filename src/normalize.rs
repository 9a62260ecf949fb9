//! Title normalization for cross-source comparison
//!
//! The chart and the library rarely agree on formatting: release years
//! in parentheses, stray punctuation, inconsistent case and whitespace.
//! Both sides are reduced to a canonical key before any membership test.

/// Punctuation stripped from titles before comparison.
///
/// Hyphens stay: they carry meaning in plenty of titles ("Spider-Man").
const STRIPPED_PUNCTUATION: [char; 7] = [',', '.', ':', '\'', '"', '!', '?'];

/// Reduce a raw title to its canonical comparison key.
///
/// Trims and collapses whitespace, lowercases, drops the characters in
/// [`STRIPPED_PUNCTUATION`], then removes any trailing "(1994)"-style
/// year tokens. Total over arbitrary input; the empty string maps to
/// itself. Re-applying the function to its own output is a no-op.
pub fn normalize(title: &str) -> String {
    let mut key = String::with_capacity(title.len());
    let mut pending_space = false;

    for ch in title.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if STRIPPED_PUNCTUATION.contains(&ch) {
            continue;
        }
        if pending_space && !key.is_empty() {
            key.push(' ');
        }
        pending_space = false;
        key.extend(ch.to_lowercase());
    }

    // Year stripping runs last, on the cleaned string, and loops so a
    // second pass over the result finds nothing left to remove.
    let mut end = key.len();
    loop {
        let stripped = strip_year_suffix(&key[..end]);
        if stripped.len() == end {
            break;
        }
        end = stripped.len();
    }
    key.truncate(end);

    key
}

/// Strip one trailing parenthesized 4-digit year token, if present.
fn strip_year_suffix(title: &str) -> &str {
    let bytes = title.as_bytes();
    let len = bytes.len();
    if len >= 6
        && bytes[len - 1] == b')'
        && bytes[len - 6] == b'('
        && bytes[len - 5..len - 1].iter().all(u8::is_ascii_digit)
    {
        title[..len - 6].trim_end()
    } else {
        title
    }
}
