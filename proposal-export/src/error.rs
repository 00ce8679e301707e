use std::path::PathBuf;

use proposal_doc_pdf::DocumentWriteError;

/// Error type for export actions.
///
/// Export never writes to the session, so all of these leave it as it was.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The email action was triggered without a recipient.
    #[error("Please enter a recipient email address")]
    MissingRecipient,

    #[error(transparent)]
    Document(#[from] DocumentWriteError),

    /// The system could not open the compose link.
    #[error("Failed to open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// A downloaded document could not be saved.
    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
