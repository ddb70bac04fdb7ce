//! Small conversions layered on the core primitives.

use super::numeric::{is_float, is_integer};

pub fn cap_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// `"true"` in any case is true. A number is true when its integer part is
/// non-zero, so `"0.1"` is false. Everything else is false.
pub fn string_to_bool(s: &str) -> bool {
    if s.eq_ignore_ascii_case("true") {
        return true;
    }

    if is_integer(s) {
        return s.parse::<i64>().map_or(false, |value| value != 0);
    }

    if is_float(s) {
        return s.parse::<f64>().map_or(false, |value| value.trunc() != 0.0);
    }

    false
}

pub fn bool_to_string(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn char_to_string(c: char) -> String {
    c.to_string()
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Exact char-for-char palindrome; case, spacing and punctuation all count.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Char at `index` after wrapping around the string as many times as needed.
pub fn circular_index(s: &str, index: usize) -> Option<char> {
    let len = s.chars().count();
    if len == 0 {
        return None;
    }

    s.chars().nth(index % len)
}

/// Drops the last `n` chars. Erasing more than the string holds leaves `""`.
pub fn erase_chars_from_end(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    if n >= len {
        return "";
    }

    match s.char_indices().nth(len - n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
