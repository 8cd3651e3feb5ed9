//! Record field lookup errors

use std::fmt;

/// Why a typed field lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The record has no such field.
    Missing,
    /// The field holds a value of another type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::WrongType { expected, found } => write!(f, "expected {}, found {}", expected, found),
        }
    }
}

/// A typed lookup on a [`Record`](crate::model::Record) failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field '{key}': {kind}")]
pub struct FieldError {
    /// The looked-up field.
    pub key: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub(crate) fn missing(key: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: FieldErrorKind::Missing,
        }
    }

    pub(crate) fn wrong_type(key: &str, expected: &'static str, found: &'static str) -> Self {
        Self {
            key: key.to_string(),
            kind: FieldErrorKind::WrongType { expected, found },
        }
    }

    /// Returns `true` if the field was absent.
    pub fn is_missing(&self) -> bool {
        self.kind == FieldErrorKind::Missing
    }
}
