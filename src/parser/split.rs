//! Splitting compound values into sub-clauses.

const AND: &str = "and";

/// Split on a single separator character, trimming and dropping empty parts.
pub fn split_list(raw: &str, separator: char) -> Vec<&str> {
    raw.split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Split a filter value on the whole word `and`.
///
/// The word must be bounded by whitespace (or the ends of the input), so a
/// property such as `sand` or `android` stays intact. A quoted run is skipped
/// only when it opens at the start of a token and a matching apostrophe closes
/// a token later on. Any other apostrophe (`O'Brien`) is ordinary text.
pub fn split_conjunction(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' => {
                if let Some(end) = quoted_run_end(raw, i) {
                    i = end;
                    continue;
                }
            }
            b'a' if is_and_at(raw, i) => {
                parts.push(&raw[start..i]);
                i += AND.len();
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&raw[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

// `i` always points at an ASCII byte, so both slices fall on char boundaries.
fn is_and_at(raw: &str, i: usize) -> bool {
    raw[i..].starts_with(AND)
        && raw[..i].chars().next_back().is_none_or(char::is_whitespace)
        && raw[i + AND.len()..].chars().next().is_none_or(char::is_whitespace)
}

/// Byte offset just past the apostrophe closing the run opened at `open`.
fn quoted_run_end(raw: &str, open: usize) -> Option<usize> {
    let opens = raw[..open]
        .chars()
        .next_back()
        .is_none_or(|c| c.is_whitespace() || c == '(' || c == ',');
    if !opens {
        return None;
    }

    raw[open + 1..]
        .match_indices('\'')
        .map(|(pos, _)| open + 1 + pos)
        .find(|&close| {
            raw[close + 1..]
                .chars()
                .next()
                .is_none_or(|c| c.is_whitespace() || c == ')' || c == ',')
        })
        .map(|close| close + 1)
}
