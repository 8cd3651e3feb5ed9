//! Record ordering for column sorts.
//!
//! Values are compared by class first, then within the class:
//!
//! | Class | Members | Ordering |
//! |-------|---------|----------|
//! | number | numbers, and strings that coerce to one (see below) | numeric |
//! | text | other strings, booleans | collated |
//! | unparsable | digit-bearing strings that do not parse as numbers | all equal |
//! | missing | absent fields, null, nested JSON | all equal |
//!
//! How a string coerces depends on what it is compared with. Against a
//! number it is parsed as written, so `"1.5"` is `1.5` and `" 12 "` is `12`.
//! Against another string, a string holding a digit or a `.` is parsed after
//! removing its first `.`, so `"1.5"` sorts as `15` and `"v1.2"` is
//! unparsable. This matches the behaviour users of existing tables rely on,
//! including its weakness with version-like strings.
//!
//! [`sort_records`] picks one coercion for the whole column: as written if
//! any value in the column is a number, dot-stripped otherwise. A single
//! coercion per sort keeps the order total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::Record;
use crate::model::Value;
use crate::model::parse_number;

/// Current sort configuration of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// The field the current page was last sorted by.
    pub key: Option<String>,
    /// Direction used by the next sort request.
    pub ascending: bool,
}

impl SortState {
    /// Records a sort on `key` and flips the direction for the next request.
    pub fn advance(&mut self, key: &str) {
        self.key = Some(key.to_string());
        self.ascending = !self.ascending;
    }
}

/// How strings are turned into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coercion {
    /// Parse as written; used when numbers are involved.
    AsWritten,
    /// Digit-bearing strings lose their first `.` before parsing.
    StripFirstDot,
}

impl Coercion {
    fn for_values<'a>(mut values: impl Iterator<Item = Option<&'a Value>>) -> Self {
        if values.any(|v| v.is_some_and(Value::is_numeric)) {
            Coercion::AsWritten
        } else {
            Coercion::StripFirstDot
        }
    }
}

/// Comparison class of a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
    Flag(bool),
    Unparsable,
    Missing,
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) | SortKey::Flag(_) => 1,
            SortKey::Unparsable => 2,
            SortKey::Missing => 3,
        }
    }
}

fn sort_key(value: Option<&Value>, coercion: Coercion) -> SortKey<'_> {
    match value {
        Some(Value::Int(n)) => SortKey::Number(*n as f64),
        Some(Value::Float(n)) if n.is_nan() => SortKey::Unparsable,
        Some(Value::Float(n)) => SortKey::Number(*n),
        Some(Value::String(s)) => string_key(s, coercion),
        Some(Value::Bool(b)) => SortKey::Flag(*b),
        Some(Value::Null) | Some(Value::Json(_)) | None => SortKey::Missing,
    }
}

fn string_key(s: &str, coercion: Coercion) -> SortKey<'_> {
    let parsed = match coercion {
        Coercion::AsWritten => parse_number(s),
        Coercion::StripFirstDot if looks_numeric(s) => parse_number(&s.replacen('.', "", 1)),
        Coercion::StripFirstDot => return SortKey::Text(s),
    };
    match parsed {
        Some(n) => SortKey::Number(n),
        None if looks_numeric(s) => SortKey::Unparsable,
        None => SortKey::Text(s),
    }
}

/// Returns `true` if the string contains a digit or a decimal point.
fn looks_numeric(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit() || c == '.')
}

/// Locale-style string ordering.
///
/// Strings compare by base letters first, ignoring case and accents, so
/// `"Émilie"` sorts between `"Adam"` and `"Zoe"`. Ties are broken by
/// accents (unaccented first), then by case (lowercase first).
pub fn collate(a: &str, b: &str) -> Ordering {
    let base = |s: &str| -> Vec<char> {
        s.nfd()
            .filter(|&c| !is_combining_mark(c))
            .flat_map(char::to_lowercase)
            .collect()
    };
    let accented = |s: &str| -> Vec<char> { s.nfd().flat_map(char::to_lowercase).collect() };
    let cased = |s: &str| -> Vec<(bool, char)> { s.nfd().map(|c| (!c.is_lowercase(), c)).collect() };

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| cased(a).cmp(&cased(b)))
}

fn compare_keys(a: SortKey<'_>, b: SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(&y),
        (SortKey::Text(x), SortKey::Text(y)) => collate(x, y),
        (SortKey::Flag(x), SortKey::Flag(y)) => collate(flag_text(x), flag_text(y)),
        (SortKey::Text(x), SortKey::Flag(y)) => collate(x, flag_text(y)),
        (SortKey::Flag(x), SortKey::Text(y)) => collate(flag_text(x), y),
        (a, b) => a.rank().cmp(&b.rank()),
    }
}

fn flag_text(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending { ordering } else { ordering.reverse() }
}

/// Compares two records on `key`.
///
/// If either value is a number the other is coerced as written; two strings
/// use the dot-stripping heuristic. `ascending = true` yields the natural
/// order, `false` its reverse.
pub fn compare(a: &Record, b: &Record, key: &str, ascending: bool) -> Ordering {
    let (a, b) = (a.get(key), b.get(key));
    let coercion = Coercion::for_values([a, b].into_iter());
    directed(compare_keys(sort_key(a, coercion), sort_key(b, coercion)), ascending)
}

/// Sorts records in place on `key`.
///
/// The coercion is chosen once for the whole slice, see the module docs.
pub fn sort_records(records: &mut [Record], key: &str, ascending: bool) {
    let coercion = Coercion::for_values(records.iter().map(|r| r.get(key)));
    records.sort_by(|a, b| {
        let ordering = compare_keys(sort_key(a.get(key), coercion), sort_key(b.get(key), coercion));
        directed(ordering, ascending)
    });
}
