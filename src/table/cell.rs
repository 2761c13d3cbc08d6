// Scalar cell values and the row abstraction consumed by the table pipeline

use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// A single scalar held by a row under some column key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<'a> {
    Null,
    Number(Decimal),
    Text(Cow<'a, str>),
}

impl<'a> Cell<'a> {
    pub fn text(value: &'a str) -> Self {
        Cell::Text(Cow::Borrowed(value))
    }

    pub fn number(value: impl Into<Decimal>) -> Self {
        Cell::Number(value.into())
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Lowercased string form used by the free-text filter.
    /// Null never matches anything.
    pub fn search_text(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Number(n) => Some(n.to_string()),
            Cell::Text(s) => Some(s.to_lowercase()),
        }
    }

    fn sort_key(&self) -> SortKey {
        match self {
            Cell::Null => SortKey::Null,
            Cell::Number(n) => SortKey::Number(*n),
            Cell::Text(s) => match Decimal::from_str(s.trim()) {
                Ok(n) => SortKey::Number(n),
                Err(_) => SortKey::Text(s.to_lowercase()),
            },
        }
    }

    /// Total order used by the sort stage: nulls first, then numbers
    /// (numeric text included) compared numerically, then remaining text
    /// compared case-insensitively.
    pub fn compare(&self, other: &Cell<'_>) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

// Variant order is the rank order
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Null,
    Number(Decimal),
    Text(String),
}

impl std::fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Null => f.write_str("-"),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Anything the table pipeline can filter, sort and total.
pub trait TableRow {
    /// Value stored under `key`; `Cell::Null` when the row has no such column.
    fn cell(&self, key: &str) -> Cell<'_>;

    /// Every field the free-text filter looks at, displayed or not.
    fn search_keys(&self) -> Vec<&str>;
}

impl<R: TableRow + ?Sized> TableRow for &R {
    fn cell(&self, key: &str) -> Cell<'_> {
        (**self).cell(key)
    }

    fn search_keys(&self) -> Vec<&str> {
        (**self).search_keys()
    }
}

// Open key/value rows, e.g. straight from a JSON list endpoint
impl TableRow for Map<String, Value> {
    fn cell(&self, key: &str) -> Cell<'_> {
        match self.get(key) {
            None | Some(Value::Null) => Cell::Null,
            Some(Value::String(s)) => Cell::text(s),
            Some(Value::Number(n)) => {
                let raw: String = n.to_string();
                Decimal::from_str(&raw)
                    .or_else(|_| Decimal::from_scientific(&raw))
                    .map(Cell::Number)
                    .unwrap_or(Cell::Text(Cow::Owned(raw)))
            }
            Some(Value::Bool(b)) => Cell::Text(Cow::Owned(b.to_string())),
            Some(other) => Cell::Text(Cow::Owned(other.to_string())),
        }
    }

    fn search_keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}
