//! Dynamic table record

use std::collections::HashMap;

use super::Value;
use crate::error::FieldError;

/// A single row of the dataset.
///
/// Records hold field values as a `HashMap<String, Value>`. They have no
/// identity beyond their position in the dataset and the table state never
/// mutates them.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Record;
///
/// let record = Record::new()
///     .set("firstName", "John")
///     .set("age", 30i64);
///
/// assert_eq!(record.get_string("firstName").unwrap(), Some("John"));
/// assert_eq!(record.display("age").as_deref(), Some("30"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Stringifies a field for display and search.
    ///
    /// Returns `None` when the field is absent. A null field reads as `null`.
    pub fn display(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(|v| v.to_string())
    }

    /// Builds a JSON object holding only the given keys.
    ///
    /// Missing keys are omitted. Used for the per-row embedded JSON blob.
    pub fn project<S: AsRef<str>>(&self, keys: &[S]) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for key in keys {
            let key = key.as_ref();
            if let Some(value) = self.fields.get(key) {
                object.insert(key.to_string(), serde_json::Value::from(value));
            }
        }
        serde_json::Value::Object(object)
    }

    // =========================================================================
    // Typed getters
    //
    // A missing field or one of another type is an error; a null field reads
    // as `Ok(None)`.
    // =========================================================================

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        read: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        let value = self.fields.get(key).ok_or_else(|| FieldError::missing(key))?;
        if value.is_null() {
            return Ok(None);
        }
        read(value)
            .map(Some)
            .ok_or_else(|| FieldError::wrong_type(key, expected, value.type_name()))
    }

    /// Reads a text field.
    pub fn get_string(&self, key: &str) -> Result<Option<&str>, FieldError> {
        self.typed(key, "string", Value::as_str)
    }

    /// Reads an integer field.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>, FieldError> {
        self.typed(key, "int", |v| match v {
            Value::Int(n) => Some(*n),
            _ => None,
        })
    }

    /// Reads a numeric field; integers widen to `f64`.
    pub fn get_float(&self, key: &str) -> Result<Option<f64>, FieldError> {
        self.typed(key, "float", |v| match v {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        })
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, FieldError> {
        self.typed(key, "bool", |v| match v {
            Value::Bool(b) => Some(*b),
            _ => None,
        })
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
