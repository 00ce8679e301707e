//! Export actions offered on the last page of the proposal wizard.
//!
//! - `prepare_download` - render the PDF and hand back its bytes with a file name
//! - `send_email_draft` - open a prefilled email compose window
//!
//! Both only read the session's values and can be repeated freely.

mod error;
pub use error::ExportError;

mod opener;
pub use opener::{LinkOpener, RecordingOpener, SystemOpener};

mod download;
pub use download::{DEFAULT_FILE_STEM, Download, PDF_MIME, download_file_name, prepare_download};

mod email;
pub use email::{
    ATTACHMENT_NOTE, DEFAULT_COMPOSE_URL, EMAIL_BODY_HEADER, EmailDraft, format_email_body,
    send_email_draft,
};

mod dispatcher;
pub use dispatcher::ExportDispatcher;
