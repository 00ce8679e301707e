//! Compiling document markup to PDF with typst.
//!
//! Fonts come from `typst-assets`, so the output never depends on the fonts
//! installed on the machine. No timestamp is written and the document
//! identifier is derived from the content, which keeps equal inputs
//! byte-identical.

use std::sync::LazyLock;

use typst::diag::{FileError, FileResult, SourceDiagnostic};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source, VirtualPath};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::{ExportedDocument, generate_typst_markup};

/// Error type for laying out or serializing a document.
#[derive(Debug, thiserror::Error)]
#[error("{}", messages.join("; "))]
pub struct RenderError {
    messages: Vec<String>,
}

impl RenderError {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn from_diagnostics(diagnostics: impl IntoIterator<Item = SourceDiagnostic>) -> Self {
        Self {
            messages: diagnostics
                .into_iter()
                .map(|d| d.message.to_string())
                .collect(),
        }
    }
}

struct FontSet {
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
}

static FONTS: LazyLock<FontSet> = LazyLock::new(|| {
    let fonts: Vec<Font> = typst_assets::fonts()
        .flat_map(|data| Font::iter(Bytes::new(data)))
        .collect();
    FontSet {
        book: LazyHash::new(FontBook::from_fonts(&fonts)),
        fonts,
    }
});

static LIBRARY: LazyLock<LazyHash<Library>> =
    LazyLock::new(|| LazyHash::new(Library::builder().build()));

/// A world holding a single in-memory source file and the bundled fonts.
struct DocumentWorld {
    main: FileId,
    source: Source,
}

impl DocumentWorld {
    fn new(markup: String) -> Self {
        let main = FileId::new(None, VirtualPath::new("/main.typ"));
        Self {
            main,
            source: Source::new(main, markup),
        }
    }
}

impl World for DocumentWorld {
    fn library(&self) -> &LazyHash<Library> {
        &LIBRARY
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &FONTS.book
    }

    fn main(&self) -> FileId {
        self.main
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main {
            Ok(self.source.clone())
        } else {
            Err(FileError::AccessDenied)
        }
    }

    fn file(&self, _id: FileId) -> FileResult<Bytes> {
        Err(FileError::AccessDenied)
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        None
    }
}

/// Lay out `doc` into pages.
pub(crate) fn layout(doc: &ExportedDocument) -> Result<PagedDocument, RenderError> {
    let world = DocumentWorld::new(generate_typst_markup(doc));
    typst::compile::<PagedDocument>(&world)
        .output
        .map_err(RenderError::from_diagnostics)
}

/// Render `doc` to the bytes of a complete PDF file.
pub fn render_pdf(doc: &ExportedDocument) -> Result<Vec<u8>, RenderError> {
    let document = layout(doc)?;
    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(RenderError::from_diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Row, Section};
    use typst::layout::{Frame, FrameItem};

    fn doc_with(rows: Vec<(&str, &str)>) -> ExportedDocument {
        ExportedDocument {
            title: "Digital Bridge RDC".to_string(),
            subtitle: "Projet: Foo".to_string(),
            sections: vec![Section {
                heading: "Basic Info".to_string(),
                rows: rows
                    .into_iter()
                    .map(|(label, value)| Row {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            }],
        }
    }

    fn collect_text(frame: &Frame, out: &mut Vec<String>) {
        for (_, item) in frame.items() {
            match item {
                FrameItem::Group(group) => collect_text(&group.frame, out),
                FrameItem::Text(text) => out.push(text.text.to_string()),
                _ => {}
            }
        }
    }

    /// Text runs of every page, with no-break spaces shown as spaces.
    fn page_text(doc: &ExportedDocument) -> Vec<String> {
        let document = layout(doc).unwrap();
        let mut out = Vec::new();
        for page in &document.pages {
            collect_text(&page.frame, &mut out);
        }
        out.into_iter().map(|t| t.replace('\u{a0}', " ")).collect()
    }

    #[test]
    fn pdf_file_structure() {
        let bytes = render_pdf(&doc_with(vec![("Project Name", "Foo")])).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(32)..]).into_owned();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn non_latin_text_is_kept() {
        let mut doc = doc_with(vec![("Project Name", "Łódź Pilot")]);
        doc.subtitle = "Projet: Łódź Pilot".to_string();

        let text = page_text(&doc).concat();
        assert!(text.contains("Projet: Łódź Pilot"));
        assert!(text.contains("Łódź Pilot"));
        assert!(!text.contains('?'));
    }

    #[test]
    fn indented_values_keep_their_whitespace() {
        let text = page_text(&doc_with(vec![(
            "Estimated Budget",
            "  1. staff   2. travel",
        )]));
        assert!(
            text.iter().any(|run| run.contains("  1. staff   2. travel")),
            "{text:?}"
        );
    }

    #[test]
    fn long_values_continue_on_new_pages() {
        let long = "lorem ipsum dolor sit amet ".repeat(600);
        let document = layout(&doc_with(vec![("Remarks", &long)])).unwrap();
        assert!(document.pages.len() > 1);
    }

    #[test]
    fn markup_like_values_are_shown_literally() {
        let text = page_text(&doc_with(vec![("Remarks", "*not bold* #x")])).concat();
        assert!(text.contains("*not bold* #x"));
    }
}
