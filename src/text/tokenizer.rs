use crate::engine::config::TokenizerConfig;

/// Splits `source` at every non-overlapping occurrence of `separator`.
///
/// An empty separator explodes the source into one token per char. With
/// `omit_empty` set, empty tokens are dropped and the rest keep their order.
pub fn separate<'a>(source: &'a str, separator: &str, omit_empty: bool) -> Vec<&'a str> {
    let mut chars = separator.chars();
    let mut tokens = match (chars.next(), chars.next()) {
        (None, _) => explode(source),
        (Some(unit), None) => split_at_unit(source, unit),
        (Some(_), Some(_)) => split_at_sequence(source, separator),
    };

    if omit_empty {
        tokens.retain(|token| !token.is_empty());
    }

    tokens
}

fn explode(source: &str) -> Vec<&str> {
    source
        .char_indices()
        .map(|(start, c)| &source[start..start + c.len_utf8()])
        .collect()
}

fn split_at_unit(source: &str, unit: char) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for (offset, c) in source.char_indices() {
        if c == unit {
            tokens.push(&source[cursor..offset]);
            cursor = offset + c.len_utf8();
        }
    }
    tokens.push(&source[cursor..]);

    tokens
}

fn split_at_sequence<'a>(source: &'a str, separator: &str) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = source[cursor..].find(separator) {
        tokens.push(&source[cursor..cursor + found]);
        cursor += found + separator.len();
    }
    tokens.push(&source[cursor..]);

    tokens
}

/// Returns the byte offset of every occurrence of `substring`, overlaps included.
///
/// After a match at `p` the search resumes one char past `p`, so
/// `find_all("xxxx", "xx")` reports three offsets. The empty substring matches
/// once per char of `source`, not once per boundary.
pub fn find_all(source: &str, substring: &str) -> Vec<usize> {
    if substring.is_empty() {
        return source.char_indices().map(|(offset, _)| offset).collect();
    }

    let mut positions = Vec::new();
    let mut start = 0;

    while let Some(found) = source[start..].find(substring) {
        let position = start + found;
        positions.push(position);

        // Step over one whole char to stay on a UTF-8 boundary.
        let step = source[position..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        start = position + step;
    }

    positions
}

pub fn contains(source: &str, substring: &str) -> bool {
    source.contains(substring)
}

/// Splits text into physical lines.
///
/// A trailing terminator does not open another line and `"\r\n"` counts as a
/// single terminator, so `""` has no lines and `"a\nb\n"` has two.
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = separate(source, "\n", false);

    if source.is_empty() || source.ends_with('\n') {
        lines.pop();
    }

    lines
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// A separator bound to its omission policy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self::new(TokenizerConfig {
            separator: separator.into(),
            ..TokenizerConfig::default()
        })
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn separate<'a>(&self, source: &'a str) -> Vec<&'a str> {
        separate(source, &self.config.separator, self.config.omit_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINE: &str = "rock,iron,rock,clay,gold,rock,rock,rock,clay,topaz,rock,gold,gold,rock";

    #[test]
    fn test_separate_pokemon() {
        assert_eq!(
            separate("Charmander,Squirtle,Bulbasaur", ",", true),
            vec!["Charmander", "Squirtle", "Bulbasaur"]
        );
    }

    #[test]
    fn test_separate_by_multi_char_separator() {
        assert_eq!(
            separate("one<->two<->three", "<->", true),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_separate_empty_separator_explodes() {
        assert_eq!(separate("abc", "", true), vec!["a", "b", "c"]);
        assert_eq!(separate("añb", "", false), vec!["a", "ñ", "b"]);
    }

    #[test]
    fn test_separate_keeps_empty_tokens_when_asked() {
        assert_eq!(separate(",a,,b,", ",", false), vec!["", "a", "", "b", ""]);
        assert_eq!(separate(",a,,b,", ",", true), vec!["a", "b"]);
        assert_eq!(separate("--a----b--", "--", false), vec!["", "a", "", "b", ""]);
    }

    #[test]
    fn test_separate_without_occurrence_returns_whole_source() {
        assert_eq!(separate("no separators here", ";", true), vec!["no separators here"]);
        assert_eq!(separate("ab", "abc", true), vec!["ab"]);
    }

    #[test]
    fn test_separate_empty_source() {
        assert_eq!(separate("", ",", false), vec![""]);
        assert!(separate("", ",", true).is_empty());
        assert!(separate("", "::", true).is_empty());
        assert!(separate("", "", false).is_empty());
    }

    #[test]
    fn test_separate_is_non_overlapping() {
        assert_eq!(separate("aaaa", "aa", false), vec!["", "", ""]);
        assert_eq!(separate("aaa", "aa", false), vec!["", "a"]);
    }

    #[test]
    fn test_separate_join_reconstructs_source() {
        let cases = [
            ("a,b,,c,", ","),
            ("x::y::::z", "::"),
            ("::lead and trail::", "::"),
            ("plain", "|"),
            ("ünï|cödé||", "|"),
        ];

        for (source, separator) in cases {
            let tokens = separate(source, separator, false);
            assert_eq!(tokens.join(separator), source, "separator {:?}", separator);
            assert!(tokens.iter().all(|token| !token.contains(separator)));
        }
    }

    #[test]
    fn test_find_all_prospect_for_gold() {
        assert_eq!(find_all(MINE, "gold"), vec![20, 56, 61]);
    }

    #[test]
    fn test_find_all_single_chars() {
        assert_eq!(find_all("xxxxxxxxxx", "x").len(), 10);
    }

    #[test]
    fn test_find_all_overlapping() {
        assert_eq!(find_all("xxxx", "xx"), vec![0, 1, 2]);
        assert_eq!(find_all("abababa", "aba"), vec![0, 2, 4]);
    }

    #[test]
    fn test_find_all_missing_substring() {
        let source = "You're never awake, but don't seem to sleep at all";
        assert!(find_all(source, "mtns.").is_empty());
        assert!(find_all("ab", "abc").is_empty());
    }

    #[test]
    fn test_find_all_empty_substring_matches_each_char() {
        let source = "You tried to disappear. So long, I followed you.";
        let positions = find_all(source, "");
        assert_eq!(positions.len(), source.len());
        assert_eq!(positions.first(), Some(&0));
        assert_eq!(positions.last(), Some(&(source.len() - 1)));
        assert!(find_all("", "").is_empty());
    }

    #[test]
    fn test_find_all_offsets_are_slice_boundaries() {
        let source = "ééé";
        let positions = find_all(source, "é");
        assert_eq!(positions, vec![0, 2, 4]);
        for position in positions {
            assert!(source[position..].starts_with('é'));
        }
    }

    #[test]
    fn test_contains() {
        assert!(contains(MINE, "topaz"));
        assert!(!contains(MINE, "diamond"));
        assert!(contains("anything", ""));
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(
            split_lines("firstline\nsecondline\nthirdline\n"),
            vec!["firstline", "secondline", "thirdline"]
        );
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_tokenizer_defaults_to_comma_and_omits_empty() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.config().separator, ",");
        assert_eq!(tokenizer.separate("a,,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenizer_with_separator() {
        let tokenizer = Tokenizer::with_separator(" | ");
        assert_eq!(tokenizer.separate("a | b | c"), vec!["a", "b", "c"]);
    }
}
