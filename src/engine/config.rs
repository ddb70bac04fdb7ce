// Configuration for the textkit components.
// Every struct has a Default matching the behaviour of the free functions.

use crate::text::reflow::WidthMode;
use crate::text::whitespace::Locale;

/// Tokenizer settings. Stands in for the `separator = ","` and
/// `omit_empty = true` defaults of `separate`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerConfig {
    /// Delimiter; empty means one token per char
    pub separator: String,

    /// Drop empty tokens from results (default true)
    pub omit_empty: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            omit_empty: true,
        }
    }
}

/// Reflow settings
#[derive(Debug, Clone, PartialEq)]
pub struct ReflowConfig {
    /// Maximum line measure (default 80). Zero is rejected by `Reflow::new`.
    pub width: usize,

    /// How a line is measured (default: one per char)
    pub mode: WidthMode,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            width: 80,
            mode: WidthMode::default(),
        }
    }
}

/// Numeric literal settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericConfig {
    /// Decimal separator; `None` takes the locale's
    pub decimal_point: Option<char>,
}

/// Key/value parsing settings used by `mapify`
#[derive(Debug, Clone, PartialEq)]
pub struct MapifyConfig {
    pub key_value_separator: String, // default ":"
    pub pair_separator: String,      // default ","
    pub ignore_whitespace: bool,     // default true
}

impl Default for MapifyConfig {
    fn default() -> Self {
        Self {
            key_value_separator: ":".to_string(),
            pair_separator: ",".to_string(),
            ignore_whitespace: true,
        }
    }
}

/// Master configuration combining all textkit settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextConfig {
    /// Locale whose whitespace drives trimming, reflow breaks and mapify,
    /// and whose decimal point numbers use unless overridden
    pub locale: Locale,
    pub tokenizer: TokenizerConfig,
    pub reflow: ReflowConfig,
    pub numeric: NumericConfig,
    pub mapify: MapifyConfig,
}
