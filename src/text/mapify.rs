use super::tokenizer::separate;
use super::trim::remove_whitespace;
use super::whitespace::{whitespace_set, Locale, WhitespaceSet};
use crate::engine::config::MapifyConfig;
use std::collections::{BTreeMap, HashMap};

/// Parses `key<kv>value<pair>key<kv>value...` into any map-like collection.
///
/// When `strip` is given, its whitespace is removed from the whole input
/// first. A pair holding only a key maps it to `""`. Extra `kv` tokens after
/// the value are ignored. When a key repeats, the last value wins.
pub fn mapify<M>(
    s: &str,
    key_value_separator: &str,
    pair_separator: &str,
    strip: Option<&WhitespaceSet>,
) -> M
where
    M: FromIterator<(String, String)>,
{
    let stripped;
    let source = match strip {
        Some(set) => {
            stripped = remove_whitespace(s, set);
            stripped.as_str()
        }
        None => s,
    };

    separate(source, pair_separator, true)
        .into_iter()
        .filter_map(|pair| {
            let mut parts = separate(pair, key_value_separator, true).into_iter();
            let key = parts.next()?;
            let value = parts.next().unwrap_or("");
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Applies `config`, stripping the chars of `whitespace` when it asks to.
pub fn mapify_with<M>(s: &str, config: &MapifyConfig, whitespace: &WhitespaceSet) -> M
where
    M: FromIterator<(String, String)>,
{
    mapify(
        s,
        &config.key_value_separator,
        &config.pair_separator,
        config.ignore_whitespace.then_some(whitespace),
    )
}

pub fn mapify_string(s: &str, config: &MapifyConfig) -> BTreeMap<String, String> {
    mapify_with(s, config, whitespace_set(Locale::Classic))
}

pub fn unordered_mapify_string(s: &str, config: &MapifyConfig) -> HashMap<String, String> {
    mapify_with(s, config, whitespace_set(Locale::Classic))
}

/// Joins pairs as `key<kv>value`, separated by `pair_separator`, in iteration order.
pub fn stringify_map<I, K, V>(
    pairs: I,
    key_value_separator: &str,
    pair_separator: &str,
) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!("{}{}{}", key.as_ref(), key_value_separator, value.as_ref())
        })
        .collect::<Vec<_>>()
        .join(pair_separator)
}
