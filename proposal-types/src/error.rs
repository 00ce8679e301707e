use std::path::PathBuf;

/// Error type for wizard operations.
///
/// None of these leave the session in a modified state.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// Navigation target outside `[0, page_count)`.
    #[error("Invalid page index {index} (wizard has {page_count} pages)")]
    InvalidPageIndex { index: usize, page_count: usize },

    /// Registry authoring bug: a field declares a kind tag nobody renders.
    #[error("Unsupported field kind '{kind}' for field '{field}'")]
    UnsupportedFieldKind { field: String, kind: String },

    /// An edit names a field that is not in the registry.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// An edit does not fit the field's kind.
    #[error("Input for field '{field}' does not match its kind ({expected})")]
    InputMismatch {
        field: String,
        expected: &'static str,
    },

    /// The header logo could not be found.
    #[error("Image asset missing: {}", .0.display())]
    ImageAssetMissing(PathBuf),

    /// User cancelled the wizard (Ctrl+C, Escape).
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl WizardError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if the session can simply continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageIndex { .. }
                | Self::UnknownField(_)
                | Self::InputMismatch { .. }
                | Self::ImageAssetMissing(_)
        )
    }
}
