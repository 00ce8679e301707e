//! Test backend for driving the wizard without user interaction.
//!
//! `TestBackend` answers widgets from a script of pre-defined inputs. This is
//! useful for testing rendering and navigation end to end.
//!
//! # Example
//!
//! ```rust,ignore
//! use proposal_wizard::{QueryParams, Registry, TestBackend, Wizard};
//!
//! let registry = Registry::builtin()?;
//! let mut wizard = Wizard::resume(&registry, QueryParams::new());
//!
//! let mut backend = TestBackend::new()
//!     .with_text("Project Name", "Foo")
//!     .with_other("Project Location", 4, "Goma");
//! wizard.render_page(&mut backend)?;
//!
//! assert_eq!(wizard.session().values().get_text("Project Location")?, "Goma");
//! ```

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{FieldInput, FormBackend, Page, Widget};

/// A backend that returns pre-configured inputs.
///
/// Widgets without a scripted input keep their seeded value, unless the
/// backend is `strict`, in which case they fail with `MissingInput`.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    inputs: HashMap<String, FieldInput>,
    strict: bool,
    pages: Vec<String>,
    seen: Vec<Widget>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Missing input for field: {0}")]
    MissingInput(String),
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that fails on unscripted widgets.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Add an input for a given field.
    pub fn with_input(mut self, field: impl Into<String>, input: FieldInput) -> Self {
        self.inputs.insert(field.into(), input);
        self
    }

    /// Add a text input.
    pub fn with_text(self, field: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_input(field, FieldInput::Text(text.into()))
    }

    /// Add a date input.
    pub fn with_date(self, field: impl Into<String>, date: NaiveDate) -> Self {
        self.with_input(field, FieldInput::Date(date))
    }

    /// Add a select input.
    pub fn with_choice(self, field: impl Into<String>, index: usize) -> Self {
        self.with_input(field, FieldInput::choice(index))
    }

    /// Add a select input for the sentinel option with its free text.
    pub fn with_other(
        self,
        field: impl Into<String>,
        index: usize,
        text: impl Into<String>,
    ) -> Self {
        self.with_input(field, FieldInput::other(index, text))
    }

    /// Widgets shown so far, in order.
    pub fn seen(&self) -> &[Widget] {
        &self.seen
    }

    /// Titles of the pages begun so far, in order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn begin_page(
        &mut self,
        page: &Page,
        _index: usize,
        _page_count: usize,
    ) -> Result<(), Self::Error> {
        self.pages.push(page.name().to_string());
        Ok(())
    }

    fn edit(&mut self, widget: &Widget) -> Result<Option<FieldInput>, Self::Error> {
        self.seen.push(widget.clone());
        match self.inputs.get(&widget.field) {
            Some(input) => Ok(Some(input.clone())),
            None if self.strict => Err(TestBackendError::MissingInput(widget.field.clone())),
            None => Ok(None),
        }
    }
}
