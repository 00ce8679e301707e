use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::FieldValue;

/// Error type for typed value access.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Missing value for field: {0}")]
    Missing(String),

    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Collected answers, keyed by field name.
///
/// Iteration follows insertion order. Overwriting an existing field keeps its
/// original position, so the order reflects when each field was first answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: IndexMap<String, FieldValue>,
}

impl FieldValues {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Insert a value for the given field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get the value for a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Check if a field has a value.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Remove a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.values.shift_remove(field)
    }

    /// Iterate over field-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of answered fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no field has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text value for a field.
    pub fn get_text(&self, field: &str) -> Result<&str, ValueError> {
        match self.get(field) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(other) => Err(ValueError::TypeMismatch {
                field: field.to_string(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(field.to_string())),
        }
    }

    /// Get a date value for a field.
    pub fn get_date(&self, field: &str) -> Result<NaiveDate, ValueError> {
        match self.get(field) {
            Some(FieldValue::Date(d)) => Ok(*d),
            Some(other) => Err(ValueError::TypeMismatch {
                field: field.to_string(),
                expected: "Date",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(field.to_string())),
        }
    }

    /// Get the display string of a field, or `default` when it is unset.
    ///
    /// An empty string that was explicitly stored is returned as-is.
    pub fn display_or(&self, field: &str, default: &str) -> String {
        self.get(field)
            .map(|v| v.to_string())
            .unwrap_or_else(|| default.to_string())
    }
}

impl<'a> IntoIterator for &'a FieldValues {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = indexmap::map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}
