use chrono::NaiveDate;

use crate::FieldValue;

/// The sentinel option that asks for a free-text value instead.
pub const OTHER_OPTION: &str = "Other…";

/// A single field of the proposal form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// Human-readable name; doubles as the key in `FieldValues`.
    name: String,

    /// The kind of field (determines the input control).
    kind: FieldKind,

    /// One-line caption shown beneath the label.
    description: String,

    /// Index of the owning page in the registry.
    page: usize,
}

impl FieldDefinition {
    /// Create a new field definition.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        description: impl Into<String>,
        page: usize,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            page,
        }
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Get the caption text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the index of the owning page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The value a control is seeded with when the field is unset.
    pub fn default_value(&self, today: NaiveDate) -> FieldValue {
        match &self.kind {
            FieldKind::Text | FieldKind::TextArea => FieldValue::Text(String::new()),
            FieldKind::Date => FieldValue::Date(today),
            FieldKind::Select(select) => {
                FieldValue::Text(select.options.first().cloned().unwrap_or_default())
            }
        }
    }
}

/// The kind of field, determining the input control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,

    /// Multi-line text input.
    TextArea,

    /// Date picker.
    Date,

    /// Pick exactly one of an ordered list of options.
    Select(SelectField),
}

impl FieldKind {
    /// The registry tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "text_area",
            Self::Date => "date",
            Self::Select(_) => "select",
        }
    }

    /// Check if this kind stores free text.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text | Self::TextArea)
    }
}

/// Configuration for a select field.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    /// The available options, in display order.
    pub options: Vec<String>,
}

impl SelectField {
    /// Create a select field with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the sentinel "Other…" option, if this field has one.
    pub fn other_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == OTHER_OPTION)
    }

    /// Index of `value` among the options.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn defaults_per_kind() {
        let text = FieldDefinition::new("Name", FieldKind::Text, "", 0);
        assert_eq!(text.default_value(today()), FieldValue::from(""));

        let date = FieldDefinition::new("Start", FieldKind::Date, "", 0);
        assert_eq!(date.default_value(today()), FieldValue::Date(today()));

        let select = FieldDefinition::new(
            "Status",
            FieldKind::Select(SelectField::new(["A", "B"])),
            "",
            0,
        );
        assert_eq!(select.default_value(today()), FieldValue::from("A"));
    }

    #[test]
    fn sentinel_lookup() {
        let with_other = SelectField::new(["Kinshasa", OTHER_OPTION]);
        assert_eq!(with_other.other_index(), Some(1));
        assert_eq!(SelectField::new(["A"]).other_index(), None);
    }
}
