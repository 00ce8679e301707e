use chrono::NaiveDate;

use crate::{FieldDefinition, FieldValue, FieldValues};

/// State of one interactive session: the current page and the answers so far.
///
/// The page index always satisfies `0 <= page_index < page_count`. Only the
/// `Navigator` moves it; values are written by the form renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    page_index: usize,
    page_count: usize,
    values: FieldValues,
}

impl Session {
    /// Start a session on the first page with no answers.
    ///
    /// # Panics
    /// If `page_count` is zero.
    pub fn new(page_count: usize) -> Self {
        assert!(page_count > 0, "a wizard needs at least one page");
        Self {
            page_index: 0,
            page_count,
            values: FieldValues::new(),
        }
    }

    /// Get the value stored for a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Get the stored value, or the kind default for an unset field.
    pub fn value_or_default(&self, field: &FieldDefinition, today: NaiveDate) -> FieldValue {
        self.get(field.name())
            .cloned()
            .unwrap_or_else(|| field.default_value(today))
    }

    /// Store a value for a field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field, value);
    }

    /// All answers, in insertion order.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Get the current page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Check if the current page is the first one.
    pub fn is_first_page(&self) -> bool {
        self.page_index == 0
    }

    /// Check if the current page is the last one.
    pub fn is_last_page(&self) -> bool {
        self.page_index + 1 == self.page_count
    }

    pub(crate) fn set_page_index(&mut self, index: usize) {
        debug_assert!(index < self.page_count);
        self.page_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    #[test]
    fn starts_empty_on_first_page() {
        let session = Session::new(6);
        assert_eq!(session.page_index(), 0);
        assert!(session.values().is_empty());
        assert!(session.is_first_page());
        assert!(!session.is_last_page());
    }

    #[test]
    fn value_or_default_prefers_stored_value() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let field = FieldDefinition::new("Start Date", FieldKind::Date, "", 0);
        let mut session = Session::new(1);

        assert_eq!(session.value_or_default(&field, today), FieldValue::Date(today));

        let stored = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        session.set("Start Date", stored);
        assert_eq!(session.value_or_default(&field, today), FieldValue::Date(stored));
    }
}
