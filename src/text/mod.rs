pub mod convert;
pub mod mapify;
pub mod numeric;
pub mod reflow;
pub mod tokenizer;
pub mod trim;
pub mod whitespace;

pub use convert::{
    bool_to_string, cap_first_char, char_to_string, circular_index, erase_chars_from_end,
    is_palindrome, reverse, string_to_bool, to_upper,
};
pub use mapify::{mapify, mapify_string, mapify_with, stringify_map, unordered_mapify_string};
pub use numeric::{erase_non_numeric_chars, is_float, is_integer, is_number, NumericRecognizer};
pub use reflow::{count_lines, wrap_to_width, Reflow, WidthMode};
pub use tokenizer::{contains, find_all, separate, split_lines, Tokenizer};
pub use trim::{remove_whitespace, trim, trim_whitespace, trim_whitespace_with};
pub use whitespace::{whitespace_set, Locale, LocaleProvider, WhitespaceSet};
