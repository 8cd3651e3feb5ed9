//! Record search.

use nucleo_matcher::Config;
use nucleo_matcher::Matcher;
use nucleo_matcher::Utf32Str;
use nucleo_matcher::pattern::AtomKind;
use nucleo_matcher::pattern::CaseMatching;
use nucleo_matcher::pattern::Normalization;
use nucleo_matcher::pattern::Pattern;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

/// How a search query is matched against field values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive prefix match.
    #[default]
    Prefix,
    /// Case-insensitive fuzzy subsequence match.
    Fuzzy,
}

/// Case-insensitive prefix search.
///
/// A record matches if any of `keys`, stringified and lowercased, starts with
/// the lowercased `query`. Missing fields never match. An empty query matches
/// every record. Matches keep their original relative order.
///
/// # Example
///
/// ```
/// use datatable_lib::filter::search;
/// use datatable_lib::model::Record;
///
/// let records = vec![
///     Record::new().set("firstName", "John"),
///     Record::new().set("firstName", "Jane"),
/// ];
/// let found = search(&records, &["firstName"], "JO");
/// assert_eq!(found.len(), 1);
/// ```
pub fn search<S: AsRef<str>>(records: &[Record], keys: &[S], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            keys.iter().any(|key| {
                record
                    .display(key.as_ref())
                    .is_some_and(|value| value.to_lowercase().starts_with(&needle))
            })
        })
        .cloned()
        .collect()
}

/// Fuzzy search using nucleo-matcher.
///
/// Unlike a ranked picker, matches are returned in their original order so
/// the page layout stays put while the user types.
pub fn fuzzy_search<S: AsRef<str>>(records: &[Record], keys: &[S], query: &str) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    records
        .iter()
        .filter(|record| {
            keys.iter().any(|key| {
                let Some(value) = record.display(key.as_ref()) else {
                    return false;
                };
                let haystack = Utf32Str::new(&value, &mut buf);
                pattern.score(haystack, &mut matcher).is_some()
            })
        })
        .cloned()
        .collect()
}

/// Runs a search with the given mode.
pub fn search_with<S: AsRef<str>>(
    records: &[Record],
    keys: &[S],
    query: &str,
    mode: SearchMode,
) -> Vec<Record> {
    match mode {
        SearchMode::Prefix => search(records, keys, query),
        SearchMode::Fuzzy => fuzzy_search(records, keys, query),
    }
}
