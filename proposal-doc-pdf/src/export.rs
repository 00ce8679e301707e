use std::fmt;
use std::io::Write;
use std::path::Path;

use proposal_wizard::{FieldValues, Registry};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{ExportedDocument, RenderError, render_pdf};

/// The step of writing a document that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    Create,
    Write,
    Read,
    Remove,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WriteStage::Create => "create",
            WriteStage::Write => "write",
            WriteStage::Read => "read",
            WriteStage::Remove => "remove",
        })
    }
}

/// Error type for document generation.
#[derive(Debug, thiserror::Error)]
pub enum DocumentWriteError {
    #[error("Failed to render the PDF document: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to {stage} the PDF document: {source}")]
    Io {
        stage: WriteStage,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentWriteError {
    fn at(stage: WriteStage) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { stage, source }
    }

    /// Get the file step that failed, if the failure was I/O.
    pub fn stage(&self) -> Option<WriteStage> {
        match self {
            Self::Io { stage, .. } => Some(*stage),
            Self::Render(_) => None,
        }
    }
}

/// A generated PDF in a temporary file.
///
/// The file is removed when the guard is dropped or closed.
#[derive(Debug)]
pub struct TempDocument {
    file: NamedTempFile,
}

impl TempDocument {
    /// Get the path of the temporary file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the whole document.
    pub fn read_bytes(&self) -> Result<Vec<u8>, DocumentWriteError> {
        std::fs::read(self.path()).map_err(DocumentWriteError::at(WriteStage::Read))
    }

    /// Remove the file, reporting failures that dropping would ignore.
    pub fn close(self) -> Result<(), DocumentWriteError> {
        self.file
            .close()
            .map_err(DocumentWriteError::at(WriteStage::Remove))
    }
}

/// Render `values` and write the PDF to a fresh temporary `.pdf` file.
pub fn generate_document(
    registry: &Registry,
    values: &FieldValues,
) -> Result<TempDocument, DocumentWriteError> {
    let doc = ExportedDocument::build(registry, values);
    let bytes = render_pdf(&doc)?;

    let mut file = tempfile::Builder::new()
        .prefix("projet_")
        .suffix(".pdf")
        .tempfile()
        .map_err(DocumentWriteError::at(WriteStage::Create))?;
    file.write_all(&bytes)
        .and_then(|()| file.flush())
        .map_err(DocumentWriteError::at(WriteStage::Write))?;

    debug!(path = %file.path().display(), "wrote temporary document");
    info!(
        bytes = bytes.len(),
        rows = doc.rows().count(),
        "generated project document"
    );
    Ok(TempDocument { file })
}
