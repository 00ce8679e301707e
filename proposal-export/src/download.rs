use std::path::{Path, PathBuf};

use proposal_doc_pdf::generate_document;
use proposal_wizard::{FieldValues, PROJECT_NAME, Registry};
use tracing::info;

use crate::ExportError;

pub const PDF_MIME: &str = "application/pdf";

/// Used in the file name when no project name was entered.
pub const DEFAULT_FILE_STEM: &str = "nouveau";

/// A rendered document ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// `projet_<Project Name>.pdf`, or `projet_nouveau.pdf` when unset.
pub fn download_file_name(values: &FieldValues) -> String {
    format!(
        "projet_{}.pdf",
        values.display_or(PROJECT_NAME, DEFAULT_FILE_STEM)
    )
}

/// Render the document and read it back.
///
/// The temporary file is gone by the time this returns.
pub fn prepare_download(
    registry: &Registry,
    values: &FieldValues,
) -> Result<Download, ExportError> {
    let doc = generate_document(registry, values)?;
    let bytes = doc.read_bytes()?;
    doc.close()?;

    Ok(Download {
        file_name: download_file_name(values),
        mime: PDF_MIME,
        bytes,
    })
}

impl Download {
    /// Write the document into `dir`, returning the path written.
    ///
    /// Path separators in the file name are replaced so the file always
    /// lands directly inside `dir`.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(safe_file_name(&self.file_name));
        std::fs::write(&path, &self.bytes).map_err(|source| ExportError::Save {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = self.bytes.len(), "saved document");
        Ok(path)
    }
}

fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_defaults_only_when_unset() {
        let mut values = FieldValues::new();
        assert_eq!(download_file_name(&values), "projet_nouveau.pdf");

        values.insert(PROJECT_NAME, "Foo");
        assert_eq!(download_file_name(&values), "projet_Foo.pdf");

        values.insert(PROJECT_NAME, "");
        assert_eq!(download_file_name(&values), "projet_.pdf");
    }

    #[test]
    fn separators_do_not_escape_the_directory() {
        assert_eq!(safe_file_name("projet_a/b\\c.pdf"), "projet_a_b_c.pdf");
        assert_eq!(safe_file_name("projet_Été.pdf"), "projet_Été.pdf");
    }

    #[test]
    fn download_carries_pdf_bytes() {
        let registry = Registry::builtin().unwrap();
        let download = prepare_download(&registry, &FieldValues::new()).unwrap();
        assert_eq!(download.mime, "application/pdf");
        assert!(download.bytes.starts_with(b"%PDF-"));
    }
}
