use crate::engine::config::TextConfig;
use crate::engine::error::TextError;
use crate::input;
use crate::text::mapify::mapify_with;
use crate::text::numeric::NumericRecognizer;
use crate::text::reflow::Reflow;
use crate::text::tokenizer::{self, Tokenizer};
use crate::text::trim;
use crate::text::whitespace::{whitespace_set, LocaleProvider, WhitespaceSet};
use std::collections::HashMap;
use std::path::Path;

/// A `TextConfig` validated once and bound to the core operations.
///
/// Building the toolkit resolves the locale's whitespace table and decimal
/// point up front, so every call afterwards is a pure lookup.
#[derive(Debug, Clone)]
pub struct Toolkit {
    config: TextConfig,
    whitespace: &'static WhitespaceSet,
    tokenizer: Tokenizer,
    reflow: Reflow,
    numbers: NumericRecognizer,
}

impl Toolkit {
    pub fn new(config: TextConfig) -> Result<Self, TextError> {
        let whitespace = whitespace_set(config.locale);
        let reflow = Reflow::new(&config.reflow, whitespace)?;
        let numbers = match config.numeric.decimal_point {
            Some(point) => NumericRecognizer::new(point)?,
            None => NumericRecognizer::for_locale(&config.locale)?,
        };

        log::debug!(
            "Toolkit ready: locale={}, separator={:?}, width={}",
            config.locale.name(),
            config.tokenizer.separator,
            reflow.width()
        );

        Ok(Self {
            whitespace,
            tokenizer: Tokenizer::new(config.tokenizer.clone()),
            reflow,
            numbers,
            config,
        })
    }

    pub fn with_defaults() -> Result<Self, TextError> {
        Self::new(TextConfig::default())
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    pub fn whitespace(&self) -> &WhitespaceSet {
        self.whitespace
    }

    pub fn separate<'a>(&self, source: &'a str) -> Vec<&'a str> {
        self.tokenizer.separate(source)
    }

    pub fn find_all(&self, source: &str, substring: &str) -> Vec<usize> {
        tokenizer::find_all(source, substring)
    }

    pub fn trim_whitespace<'a>(&self, source: &'a str) -> &'a str {
        trim::trim_whitespace_with(source, self.whitespace)
    }

    pub fn remove_whitespace(&self, source: &str) -> String {
        trim::remove_whitespace(source, self.whitespace)
    }

    pub fn trim<'a>(&self, source: &'a str, n: isize) -> &'a str {
        trim::trim(source, n)
    }

    pub fn wrap(&self, source: &str) -> String {
        self.reflow.wrap(source)
    }

    pub fn is_integer(&self, s: &str) -> bool {
        self.numbers.is_integer(s)
    }

    pub fn is_float(&self, s: &str) -> bool {
        self.numbers.is_float(s)
    }

    pub fn is_number(&self, s: &str) -> bool {
        self.numbers.is_number(s)
    }

    pub fn mapify(&self, source: &str) -> HashMap<String, String> {
        mapify_with(source, &self.config.mapify, self.whitespace)
    }

    /// Reads a document through the text-source providers.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<String, TextError> {
        Ok(input::load(path)?.text)
    }
}
