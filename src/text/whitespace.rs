use lazy_static::lazy_static;
use std::collections::BTreeSet;
use std::fmt;

/// Supplies the character classification rules for one locale.
///
/// Nothing in this crate reads ambient locale state. Callers pick a provider
/// and pass it in, so the same input always classifies the same way.
pub trait LocaleProvider: Send + Sync {
    fn name(&self) -> &str;

    fn is_whitespace(&self, c: char) -> bool;

    fn decimal_point(&self) -> char {
        '.'
    }
}

/// Built-in locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// C/POSIX `isspace`: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
    #[default]
    Classic,
    /// Every char with the Unicode `White_Space` property.
    Unicode,
}

impl LocaleProvider for Locale {
    fn name(&self) -> &str {
        match self {
            Locale::Classic => "classic",
            Locale::Unicode => "unicode",
        }
    }

    fn is_whitespace(&self, c: char) -> bool {
        match self {
            Locale::Classic => matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'),
            Locale::Unicode => c.is_whitespace(),
        }
    }
}

/// Immutable lookup table of the chars a locale treats as whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitespaceSet {
    chars: BTreeSet<char>,
}

impl WhitespaceSet {
    /// Builds the table by testing every Unicode scalar value once.
    ///
    /// This is the expensive path; the built-in locales go through
    /// [`whitespace_set`], which caches the result.
    pub fn for_locale(locale: &dyn LocaleProvider) -> Self {
        let chars: BTreeSet<char> = ('\0'..=char::MAX)
            .filter(|&c| locale.is_whitespace(c))
            .collect();

        log::debug!(
            "Built whitespace table for locale '{}' ({} chars)",
            locale.name(),
            chars.len()
        );

        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterates the whitespace chars in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl fmt::Display for WhitespaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

lazy_static! {
    static ref CLASSIC_WHITESPACE: WhitespaceSet = WhitespaceSet::for_locale(&Locale::Classic);
    static ref UNICODE_WHITESPACE: WhitespaceSet = WhitespaceSet::for_locale(&Locale::Unicode);
}

/// Returns the cached whitespace table for a built-in locale.
pub fn whitespace_set(locale: Locale) -> &'static WhitespaceSet {
    match locale {
        Locale::Classic => &CLASSIC_WHITESPACE,
        Locale::Unicode => &UNICODE_WHITESPACE,
    }
}
