use crate::{FieldInput, Page, Widget};

/// Trait for UI hosts that display the wizard's widgets.
///
/// The form renderer prepares a `Widget` per field of the current page and
/// hands it to the backend. The backend decides how to present it (terminal
/// prompt, GUI form, scripted test input) and returns the user's input.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Called once before the page's widgets are shown.
    fn begin_page(
        &mut self,
        _page: &Page,
        _index: usize,
        _page_count: usize,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Show a widget and collect the user's input.
    ///
    /// # Returns
    /// * `Ok(Some(input))` when the user produced a value
    /// * `Ok(None)` to keep the seeded value
    /// * `Err` on cancellation or backend failure
    fn edit(&mut self, widget: &Widget) -> Result<Option<FieldInput>, Self::Error>;
}
