//! Item segmentation within a column's text.
//!
//! The source text has no reliable delimiter between entries; a new item
//! is recognized at a newline immediately followed by a date-range
//! expression, a separating dash and the first letter of a label.
//! Boundaries are found by an explicit left-to-right scan.

/// Byte offsets where items begin, in document order.
///
/// Offset 0 is always an implicit boundary. Every other boundary is the
/// offset of a `\n` followed by: one or two day-or-day/month tokens
/// (optionally joined by `a` or `e`), a space, `-` or `–`, one
/// whitespace character, and an ASCII letter. Matches do not overlap:
/// scanning resumes after a recognized boundary's last character.
pub fn item_boundaries(text: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut boundaries = vec![0];

    let mut i = 0;
    while i < chars.len() {
        if chars[i].1 == '\n' {
            if let Some(end) = match_boundary(&chars, i + 1) {
                if chars[i].0 != 0 {
                    boundaries.push(chars[i].0);
                }
                i = end;
                continue;
            }
        }
        i += 1;
    }

    boundaries
}

/// Slice `text` between consecutive boundaries; the last slice runs to
/// the end. Slicing then rejoining reconstructs `text` exactly.
pub fn split_at_boundaries<'a>(text: &'a str, boundaries: &[usize]) -> Vec<&'a str> {
    boundaries
        .iter()
        .enumerate()
        .map(|(index, &start)| match boundaries.get(index + 1) {
            Some(&next) => &text[start..next],
            None => &text[start..],
        })
        .collect()
}

/// Normalize one raw slice: newlines become spaces, the result is
/// trimmed, and the en-dash separator becomes an ASCII hyphen.
pub fn normalize_item(item: &str) -> String {
    item.replace('\n', " ").trim().replace('–', "-")
}

/// Split a column's text into normalized item strings, discarding
/// slices that are all whitespace.
pub fn split_items(text: &str) -> Vec<String> {
    let boundaries = item_boundaries(text);
    split_at_boundaries(text, &boundaries)
        .into_iter()
        .map(normalize_item)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Match a full boundary pattern starting just after a newline; returns
/// the index one past the matched label letter.
fn match_boundary(chars: &[(usize, char)], start: usize) -> Option<usize> {
    let mut i = match_date(chars, start)?;
    if let Some(next) = match_connector_and_date(chars, i) {
        i = next;
    }
    i = match_char(chars, i, |c| c == ' ')?;
    i = match_char(chars, i, |c| c == '-' || c == '–')?;
    i = match_char(chars, i, char::is_whitespace)?;
    match_char(chars, i, |c| c.is_ascii_alphabetic())
}

/// ` a 15` / ` e 21/3` — single whitespace around the connector word.
fn match_connector_and_date(chars: &[(usize, char)], start: usize) -> Option<usize> {
    let mut i = match_char(chars, start, char::is_whitespace)?;
    i = match_char(chars, i, |c| c == 'a' || c == 'e')?;
    i = match_char(chars, i, char::is_whitespace)?;
    match_date(chars, i)
}

/// `day` or `day/month`. A `/` not followed by digits is left in place
/// for the caller's next literal to reject.
fn match_date(chars: &[(usize, char)], start: usize) -> Option<usize> {
    let i = match_digits(chars, start)?;
    match chars.get(i) {
        Some(&(_, '/')) => Some(match_digits(chars, i + 1).unwrap_or(i)),
        _ => Some(i),
    }
}

/// One or two ASCII digits.
fn match_digits(chars: &[(usize, char)], start: usize) -> Option<usize> {
    let i = match_char(chars, start, |c| c.is_ascii_digit())?;
    Some(match_char(chars, i, |c| c.is_ascii_digit()).unwrap_or(i))
}

fn match_char(chars: &[(usize, char)], i: usize, pred: impl Fn(char) -> bool) -> Option<usize> {
    let &(_, c) = chars.get(i)?;
    pred(c).then_some(i + 1)
}
