use super::whitespace::{whitespace_set, Locale, WhitespaceSet};

/// Strips leading and trailing whitespace of the default (classic) locale.
pub fn trim_whitespace(source: &str) -> &str {
    trim_whitespace_with(source, whitespace_set(Locale::default()))
}

/// Strips leading and trailing chars found in `set`.
///
/// Input made only of whitespace trims down to `""`.
pub fn trim_whitespace_with<'a>(source: &'a str, set: &WhitespaceSet) -> &'a str {
    source.trim_matches(|c| set.contains(c))
}

/// Removes `n` chars from both ends of `source`.
///
/// A negative or zero `n` leaves the source untouched. Once `n` reaches half
/// the length (integer division) both cuts meet in the middle and the result
/// is `""`.
pub fn trim(source: &str, n: isize) -> &str {
    if n <= 0 {
        return source;
    }

    let n = n.unsigned_abs();
    let len = source.chars().count();
    if n >= len / 2 {
        return "";
    }

    let start = byte_offset(source, n);
    let end = byte_offset(source, len - n);
    &source[start..end]
}

/// Drops every whitespace char in `set`, wherever it appears.
pub fn remove_whitespace(source: &str, set: &WhitespaceSet) -> String {
    source.chars().filter(|&c| !set.contains(c)).collect()
}

fn byte_offset(source: &str, char_index: usize) -> usize {
    source
        .char_indices()
        .nth(char_index)
        .map_or(source.len(), |(offset, _)| offset)
}
