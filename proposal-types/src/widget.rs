use chrono::NaiveDate;

/// A field prepared for display: the control to show and the value it is seeded with.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// The field name, the key values are stored under.
    pub field: String,

    /// Text shown next to the control.
    pub label: String,

    /// Informational caption shown beneath the label.
    pub caption: String,

    /// The input control, seeded with the current value.
    pub control: Control,
}

impl Widget {
    /// The input equivalent to leaving the control untouched.
    pub fn seeded_input(&self) -> FieldInput {
        match &self.control {
            Control::TextInput { value } | Control::TextArea { value } => {
                FieldInput::Text(value.clone())
            }
            Control::DatePicker { value } => FieldInput::Date(*value),
            Control::Select {
                selected,
                other_index,
                other_text,
                ..
            } => FieldInput::Choice {
                index: *selected,
                other_text: (Some(*selected) == *other_index).then(|| other_text.clone()),
            },
        }
    }
}

/// The input control for a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Single-line text input.
    TextInput { value: String },

    /// Multi-line text input.
    TextArea { value: String },

    /// Date picker.
    DatePicker { value: NaiveDate },

    /// Single-choice picker.
    ///
    /// When `other_index` is set and selected, `other_text` seeds the extra
    /// free-text input whose content is stored instead of the option label.
    Select {
        options: Vec<String>,
        selected: usize,
        other_index: Option<usize>,
        other_text: String,
    },
}

impl Control {
    /// Short name of the control kind, for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TextInput { .. } => "text input",
            Self::TextArea { .. } => "text area",
            Self::DatePicker { .. } => "date picker",
            Self::Select { .. } => "select",
        }
    }
}

/// A value produced by the user for one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Content of a text input or text area.
    Text(String),

    /// A picked date.
    Date(NaiveDate),

    /// A picked option; `other_text` carries the free text for the sentinel option.
    Choice {
        index: usize,
        other_text: Option<String>,
    },
}

impl FieldInput {
    /// Pick an option by index.
    pub fn choice(index: usize) -> Self {
        Self::Choice {
            index,
            other_text: None,
        }
    }

    /// Pick the sentinel option with a free-text value.
    pub fn other(index: usize, text: impl Into<String>) -> Self {
        Self::Choice {
            index,
            other_text: Some(text.into()),
        }
    }
}
