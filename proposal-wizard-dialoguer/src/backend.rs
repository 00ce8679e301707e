//! Dialoguer backend implementation for the FormBackend trait.

use chrono::NaiveDate;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Editor, FuzzySelect, Input, Select};
use proposal_wizard::{Control, FieldInput, FormBackend, Page, Widget, WizardError};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the wizard (e.g., pressed Ctrl+C or Escape).
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl DialoguerError {
    fn from_prompt(err: dialoguer::Error) -> Self {
        if is_cancelled(&err) {
            Self::Cancelled
        } else {
            Self::Dialoguer(err)
        }
    }

    /// Check whether a wizard error wraps a cancelled prompt.
    pub fn is_cancellation(err: &WizardError) -> bool {
        match err {
            WizardError::Cancelled => true,
            WizardError::Backend(inner) => {
                matches!(inner.downcast_ref::<Self>(), Some(Self::Cancelled))
            }
            _ => false,
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI prompts.
///
/// Text fields and dates are edited inline, text areas in the user's
/// `$EDITOR`, and selects with an arrow-key menu.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn caption(&self, caption: &str) {
        if caption.is_empty() {
            return;
        }
        if self.colorful {
            println!("{}", ColorfulTheme::default().hint_style.apply_to(caption));
        } else {
            println!("{caption}");
        }
    }

    /// Ask for one line of text, starting from `initial`.
    pub fn ask_line(&self, prompt: &str, initial: &str) -> Result<String, DialoguerError> {
        let theme = self.theme();
        Input::<String>::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(DialoguerError::from_prompt)
    }

    fn ask_date(&self, prompt: &str, default: NaiveDate) -> Result<NaiveDate, DialoguerError> {
        let theme = self.theme();
        Input::<NaiveDate>::with_theme(theme.as_ref())
            .with_prompt(format!("{prompt} (YYYY-MM-DD)"))
            .default(default)
            .interact_text()
            .map_err(DialoguerError::from_prompt)
    }

    fn ask_multiline(&self, prompt: &str, current: &str) -> Result<Option<String>, DialoguerError> {
        println!("{prompt} (opens your editor, save to keep changes)");
        let edited = Editor::new()
            .edit(current)
            .map_err(DialoguerError::from_prompt)?;
        // Editors usually append a trailing newline on save.
        Ok(edited.map(|text| text.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Pick one of `items`, starting at `default`.
    pub fn menu(
        &self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, DialoguerError> {
        let theme = self.theme();
        Select::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(DialoguerError::from_prompt)
    }

    /// Pick one of `items` with type-to-filter.
    pub fn fuzzy_menu(
        &self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, DialoguerError> {
        let theme = self.theme();
        FuzzySelect::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(DialoguerError::from_prompt)
    }
}

impl FormBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn begin_page(
        &mut self,
        page: &Page,
        index: usize,
        page_count: usize,
    ) -> Result<(), Self::Error> {
        let heading = format!("Step {} of {}: {}", index + 1, page_count, page.name());
        println!();
        if self.colorful {
            println!("{}", ColorfulTheme::default().active_item_style.apply_to(heading));
        } else {
            println!("{heading}");
        }
        println!();
        Ok(())
    }

    fn edit(&mut self, widget: &Widget) -> Result<Option<FieldInput>, Self::Error> {
        self.caption(&widget.caption);

        let input = match &widget.control {
            Control::TextInput { value } => {
                FieldInput::Text(self.ask_line(&widget.label, value)?)
            }
            Control::TextArea { value } => match self.ask_multiline(&widget.label, value)? {
                Some(text) => FieldInput::Text(text),
                None => return Ok(None),
            },
            Control::DatePicker { value } => FieldInput::Date(self.ask_date(&widget.label, *value)?),
            Control::Select {
                options,
                selected,
                other_index,
                other_text,
            } => {
                let items: Vec<&str> = options.iter().map(String::as_str).collect();
                let index = self.menu(&widget.label, &items, *selected)?;
                if Some(index) == *other_index {
                    let text = self.ask_line("Please specify", other_text)?;
                    FieldInput::other(index, text)
                } else {
                    FieldInput::choice(index)
                }
            }
        };
        Ok(Some(input))
    }
}
