//! PDF backend for the proposal assistant: turns collected answers into a
//! printable project document.
//!
//! The pipeline has four steps:
//!
//! ```text
//! FieldValues
//!     ↓
//! [ExportedDocument] (title block + one section per page, declared order)
//!     ↓
//! [generate_typst_markup] (A4 page, headings, one table per section)
//!     ↓
//! [render_pdf] (typst layout → PDF bytes)
//!     ↓
//! [TempDocument] (temporary .pdf file, removed on drop)
//! ```
//!
//! ```rust,ignore
//! use proposal_doc_pdf::generate_document;
//!
//! let doc = generate_document(&registry, session.values())?;
//! let bytes = doc.read_bytes()?;
//! doc.close()?;
//! ```

mod document;
pub use document::{
    DEFAULT_PROJECT_NAME, DOCUMENT_TITLE, ExportedDocument, Row, SUBJECT_PREFIX, Section,
    project_title,
};

mod markup;
pub use markup::generate_typst_markup;

mod pdf;
pub use pdf::{RenderError, render_pdf};

mod export;
pub use export::{DocumentWriteError, TempDocument, WriteStage, generate_document};
