//! Splits a raw extracted-text blob into candidate statement lines.
//!
//! Text extraction upstream can glue several transactions onto one physical
//! line, so a split point is any newline or any position where a `DD/MM`
//! token begins. Fragments that do not open with a date are noise (page
//! headers, running totals) and are dropped.

/// Segment a text blob into date-prefixed candidate lines, in input order.
pub fn segment_lines(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    for line in text.split('\n') {
        let bytes = line.as_bytes();
        let mut start = 0;
        for i in 1..bytes.len() {
            if starts_with_date(&bytes[i..]) {
                push_candidate(&mut candidates, &line[start..i]);
                start = i;
            }
        }
        push_candidate(&mut candidates, &line[start..]);
    }
    candidates
}

/// `DD/MM` at the head of the slice. Byte-level on purpose: the check runs
/// at every position of every line.
fn starts_with_date(b: &[u8]) -> bool {
    b.len() >= 5
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b'/'
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit()
}

fn push_candidate<'a>(candidates: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if starts_with_date(fragment.as_bytes()) {
        candidates.push(fragment);
    }
}
