//! Form renderer: turns the current page into widgets and commits inputs back.

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    Control, FieldDefinition, FieldInput, FieldKind, FieldValue, FormBackend, Registry, Session,
    Widget, WizardError,
};

/// Renders pages of a `Registry` against a `Session`.
#[derive(Debug, Clone)]
pub struct FormRenderer<'r> {
    registry: &'r Registry,
    today: NaiveDate,
}

impl<'r> FormRenderer<'r> {
    /// Create a renderer using the local date for date defaults.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Override the date used to seed unset date fields.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Get the registry.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Widgets for the session's current page, in declared order.
    pub fn widgets(&self, session: &Session) -> Vec<Widget> {
        self.registry
            .page(session.page_index())
            .map(|page| {
                page.fields()
                    .iter()
                    .map(|field| self.widget(field, session))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Build the widget for one field, seeded with its current value.
    pub fn widget(&self, field: &FieldDefinition, session: &Session) -> Widget {
        let value = session.value_or_default(field, self.today);

        let control = match field.kind() {
            FieldKind::Text => Control::TextInput {
                value: value.to_string(),
            },
            FieldKind::TextArea => Control::TextArea {
                value: value.to_string(),
            },
            FieldKind::Date => Control::DatePicker {
                value: value.as_date().unwrap_or(self.today),
            },
            FieldKind::Select(select) => {
                let current = value.to_string();
                let other_index = select.other_index();
                // A stored value that is not an option came from the free-text
                // input, so the sentinel stays selected across re-renders.
                let (selected, other_text) = match (select.position(&current), other_index) {
                    (Some(index), _) => (index, String::new()),
                    (None, Some(other)) => (other, current),
                    (None, None) => (0, String::new()),
                };
                Control::Select {
                    options: select.options().to_vec(),
                    selected,
                    other_index,
                    other_text,
                }
            }
        };

        Widget {
            field: field.name().to_string(),
            label: field.name().to_string(),
            caption: field.description().to_string(),
            control,
        }
    }

    /// Store an input for `field`, returning the committed value.
    ///
    /// For the sentinel option the free text is stored, never the option label.
    pub fn commit(
        &self,
        session: &mut Session,
        field: &str,
        input: FieldInput,
    ) -> Result<FieldValue, WizardError> {
        let value = self.resolve(field, input)?;
        debug!(field, value = %value, "committed field");
        session.set(field, value.clone());
        Ok(value)
    }

    /// Map an input to the value it would store, without touching a session.
    pub fn resolve(&self, field: &str, input: FieldInput) -> Result<FieldValue, WizardError> {
        let definition = self
            .registry
            .field(field)
            .ok_or_else(|| WizardError::UnknownField(field.to_string()))?;

        let mismatch = || WizardError::InputMismatch {
            field: field.to_string(),
            expected: definition.kind().tag(),
        };

        match (definition.kind(), input) {
            (FieldKind::Text | FieldKind::TextArea, FieldInput::Text(text)) => {
                Ok(FieldValue::Text(text))
            }
            (FieldKind::Date, FieldInput::Date(date)) => Ok(FieldValue::Date(date)),
            (FieldKind::Select(select), FieldInput::Choice { index, other_text }) => {
                let option = select.options().get(index).ok_or_else(mismatch)?;
                if select.other_index() == Some(index) {
                    Ok(FieldValue::Text(other_text.unwrap_or_default()))
                } else {
                    Ok(FieldValue::Text(option.clone()))
                }
            }
            _ => Err(mismatch()),
        }
    }

    /// Render the current page through `backend`, committing every field.
    ///
    /// Fields the backend leaves untouched are committed with their seeded
    /// value, so after a render every field of the page is set.
    pub fn render_page<B: FormBackend>(
        &self,
        session: &mut Session,
        backend: &mut B,
    ) -> Result<(), WizardError> {
        let index = session.page_index();
        let Some(page) = self.registry.page(index) else {
            return Err(WizardError::InvalidPageIndex {
                index,
                page_count: self.registry.page_count(),
            });
        };

        backend
            .begin_page(page, index, self.registry.page_count())
            .map_err(|e| WizardError::Backend(e.into()))?;

        for field in page.fields() {
            let widget = self.widget(field, session);
            let input = backend
                .edit(&widget)
                .map_err(|e| WizardError::Backend(e.into()))?
                .unwrap_or_else(|| widget.seeded_input());
            self.commit(session, field.name(), input)?;
        }

        Ok(())
    }
}
