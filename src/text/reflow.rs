use super::tokenizer::{separate, split_lines};
use super::whitespace::{whitespace_set, Locale, WhitespaceSet};
use crate::engine::config::ReflowConfig;
use crate::engine::error::TextError;
use unicode_width::UnicodeWidthChar;

/// How the length of a line is measured against the reflow width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthMode {
    /// One unit per char.
    #[default]
    CodeUnits,
    /// Terminal display columns (CJK and emoji count double, combining marks zero).
    Columns,
}

impl WidthMode {
    fn measure(self, c: char) -> usize {
        match self {
            WidthMode::CodeUnits => 1,
            WidthMode::Columns => c.width().unwrap_or(0),
        }
    }
}

/// Outcome of laying a line against the width.
enum Fit {
    /// The whole line measures less than the width.
    Short,
    /// The whole line fills the width exactly (or one char overfills it).
    Exact,
    /// The char at this byte offset is the first that no longer fits.
    Partial(usize),
}

/// Greedy word wrapper with a validated, non-zero width.
#[derive(Debug, Clone)]
pub struct Reflow {
    width: usize,
    mode: WidthMode,
    whitespace: &'static WhitespaceSet,
}

impl Reflow {
    /// Validates the width. Break opportunities are the chars of `whitespace`.
    pub fn new(
        config: &ReflowConfig,
        whitespace: &'static WhitespaceSet,
    ) -> Result<Self, TextError> {
        if config.width == 0 {
            return Err(TextError::invalid_argument(
                "reflow width must be at least 1",
            ));
        }

        Ok(Self {
            width: config.width,
            mode: config.mode,
            whitespace,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mode(&self) -> WidthMode {
        self.mode
    }

    /// Re-wraps every physical line of `source` independently.
    ///
    /// Existing `\n` terminators are paragraph boundaries and come out
    /// one-for-one. Within a paragraph, a line is broken at the last whitespace
    /// that keeps it within the width, or hard-broken at the width when there
    /// is none. A chunk that fills the width exactly closes its line: the
    /// source terminator does that when one follows, otherwise a terminator is
    /// appended, so `"111222333"` at width 3 ends in `"333\n"`.
    pub fn wrap(&self, source: &str) -> String {
        let paragraphs = separate(source, "\n", false);
        let last = paragraphs.len().saturating_sub(1);
        let mut lines = Vec::new();

        for (index, paragraph) in paragraphs.into_iter().enumerate() {
            self.wrap_paragraph(paragraph, index == last, &mut lines);
        }

        lines.join("\n")
    }

    fn wrap_paragraph<'a>(&self, paragraph: &'a str, is_last: bool, lines: &mut Vec<&'a str>) {
        let mut rest = paragraph;

        loop {
            let (line, next) = match self.fit(rest) {
                Fit::Short => {
                    lines.push(rest);
                    return;
                }
                Fit::Exact => (rest, ""),
                Fit::Partial(end) => match self.break_point(rest, end) {
                    Some((at, blank)) => (&rest[..at], &rest[at + blank.len_utf8()..]),
                    None => (&rest[..end], &rest[end..]),
                },
            };

            lines.push(line);

            if next.is_empty() {
                // A following source terminator already closes this line.
                if is_last {
                    lines.push("");
                }
                return;
            }
            rest = next;
        }
    }

    fn fit(&self, line: &str) -> Fit {
        let mut used = 0;

        for (offset, c) in line.char_indices() {
            let width = self.mode.measure(c);
            // The first char is always taken so an over-wide char still advances.
            if offset > 0 && used + width > self.width {
                return Fit::Partial(offset);
            }
            used += width;
        }

        if used < self.width {
            Fit::Short
        } else {
            Fit::Exact
        }
    }

    /// Last whitespace at or before byte `end`, excluding the first char.
    fn break_point(&self, line: &str, end: usize) -> Option<(usize, char)> {
        if let Some(next) = line[end..].chars().next() {
            if self.whitespace.contains(next) {
                return Some((end, next));
            }
        }

        line[..end]
            .char_indices()
            .skip(1)
            .filter(|&(_, c)| self.whitespace.contains(c))
            .last()
    }
}

/// Wraps `source` to `width` chars using the classic locale.
///
/// A zero width can never fit anything; it yields `""` for every input
/// instead of looping. Use [`Reflow::new`] to have zero rejected as an
/// invalid argument.
pub fn wrap_to_width(source: &str, width: usize) -> String {
    let config = ReflowConfig {
        width,
        ..ReflowConfig::default()
    };

    match Reflow::new(&config, whitespace_set(Locale::default())) {
        Ok(reflow) => reflow.wrap(source),
        Err(err) => {
            log::warn!("wrap_to_width returning empty text: {}", err);
            String::new()
        }
    }
}

/// Counts physical lines. A trailing terminator does not add a line.
pub fn count_lines(source: &str) -> usize {
    split_lines(source).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(width: usize) -> Reflow {
        let config = ReflowConfig {
            width,
            mode: WidthMode::Columns,
        };
        Reflow::new(&config, whitespace_set(Locale::Classic)).unwrap()
    }

    #[test]
    fn test_wrap_to_width_3() {
        assert_eq!(wrap_to_width("111222333", 3), "111\n222\n333\n");
    }

    #[test]
    fn test_wrap_to_width_5() {
        assert_eq!(wrap_to_width("111112", 5), "11111\n2");
    }

    #[test]
    fn test_wrap_to_width_0_is_empty() {
        assert_eq!(wrap_to_width("111222333", 0), "");
        assert_eq!(wrap_to_width("", 0), "");
    }

    #[test]
    fn test_wrap_empty_string() {
        assert_eq!(wrap_to_width("", 10), "");
    }

    #[test]
    fn test_wrap_breaks_at_last_space() {
        assert_eq!(
            wrap_to_width("The quick brown fox jumps over the lazy dog", 10),
            "The quick\nbrown fox\njumps over\nthe lazy\ndog"
        );
    }

    #[test]
    fn test_wrap_space_exactly_at_width_is_consumed() {
        assert_eq!(wrap_to_width("abcd efgh", 4), "abcd\nefgh\n");
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap_to_width("short", 80), "short");
    }

    #[test]
    fn test_wrap_preserves_paragraph_breaks() {
        assert_eq!(wrap_to_width("aa bb\n\ncc dd\n", 3), "aa\nbb\n\ncc\ndd\n");
        assert_eq!(wrap_to_width("one\ntwo", 10), "one\ntwo");
    }

    #[test]
    fn test_wrap_exact_width_line_keeps_its_own_terminator() {
        assert_eq!(wrap_to_width("abc\ndef", 3), "abc\ndef\n");
        assert_eq!(wrap_to_width("abc\n", 3), "abc\n");
        assert_eq!(wrap_to_width("abc\n\nxy", 3), "abc\n\nxy");
        assert_eq!(wrap_to_width("aaa \nb", 3), "aaa\nb");
    }

    #[test]
    fn test_wrap_preserves_terminator_count() {
        let source = "abc\nde f\n\nghij\n";
        let wrapped = wrap_to_width(source, 3);
        assert_eq!(wrapped, "abc\nde\nf\n\nghi\nj\n");
        assert!(!wrapped.contains("\n\n\n"));
    }

    #[test]
    fn test_reflow_breaks_at_locale_whitespace() {
        let unicode = Reflow::new(
            &ReflowConfig {
                width: 3,
                ..ReflowConfig::default()
            },
            whitespace_set(Locale::Unicode),
        )
        .unwrap();
        assert_eq!(unicode.wrap("ab\u{3000}cd"), "ab\ncd");
        assert_eq!(wrap_to_width("ab\u{3000}cd", 3), "ab\u{3000}\ncd");
    }

    #[test]
    fn test_wrap_lines_never_exceed_width() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod";
        let wrapped = wrap_to_width(text, 12);
        for line in wrapped.split('\n') {
            assert!(line.chars().count() <= 12, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_wrap_leading_space_is_not_a_break() {
        assert_eq!(wrap_to_width(" abcdef", 3), " ab\ncde\nf");
    }

    #[test]
    fn test_reflow_rejects_zero_width() {
        let config = ReflowConfig {
            width: 0,
            ..ReflowConfig::default()
        };
        let result = Reflow::new(&config, whitespace_set(Locale::Classic));
        assert!(matches!(result, Err(TextError::InvalidArgument(_))));
    }

    #[test]
    fn test_reflow_columns_counts_wide_chars_double() {
        assert_eq!(columns(5).wrap("漢字 ab"), "漢字\nab");
        assert_eq!(wrap_to_width("漢字 ab", 5), "漢字 ab\n");
    }

    #[test]
    fn test_reflow_columns_overwide_char_still_advances() {
        assert_eq!(columns(1).wrap("漢a"), "漢\na\n");
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines("firstline\nsecondline\nthirdline\n"), 3);
        assert_eq!(count_lines("firstline\nsecondline"), 2);
        assert_eq!(count_lines(""), 0);
    }
}
