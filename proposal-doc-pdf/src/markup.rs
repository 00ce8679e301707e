//! Typst markup for an `ExportedDocument`.
//!
//! Every piece of user text is emitted as a typst string literal, so nothing
//! the user typed is ever parsed as markup.

use std::fmt::Write;

use crate::ExportedDocument;

/// #0074a2, used for the title and the section headings.
const BRAND_BLUE: &str = "#0074a2";
/// #f0f2f6, the fill of the label column.
const LABEL_FILL: &str = "#f0f2f6";

const LABEL_WIDTH: &str = "150pt";
const VALUE_WIDTH: &str = "350pt";

/// Family of the bundled font used for all text.
const FONT_FAMILY: &str = "Libertinus Serif";

const NBSP: char = '\u{a0}';

/// Build the typst source for `doc`.
pub fn generate_typst_markup(doc: &ExportedDocument) -> String {
    let mut markup = String::new();

    // Page setup
    let _ = writeln!(markup, "#set document(title: {})", string_literal(&doc.subtitle));
    markup.push_str("#set page(paper: \"a4\", margin: 72pt)\n");
    let _ = writeln!(
        markup,
        "#set text(font: {}, size: 10pt, fill: black)",
        string_literal(FONT_FAMILY)
    );
    markup.push_str("#set par(leading: 0.5em, justify: false)\n");
    let _ = writeln!(
        markup,
        "#set table(columns: ({LABEL_WIDTH}, {VALUE_WIDTH}), inset: (x: 6pt, y: 12pt), \
         stroke: 1pt + gray, align: left + top, row-gutter: 10pt, \
         fill: (x, _) => if x == 0 {{ rgb(\"{LABEL_FILL}\") }})"
    );
    markup.push('\n');

    // Title block
    let _ = writeln!(
        markup,
        "#align(center)[#text(size: 18pt, weight: \"bold\", fill: rgb(\"{BRAND_BLUE}\"))[{}]]",
        text_content(&doc.title)
    );
    markup.push_str("#v(30pt)\n");
    heading(&mut markup, &doc.subtitle);
    markup.push_str("#v(32pt)\n\n");

    for section in &doc.sections {
        heading(&mut markup, &section.heading);
        markup.push_str("#v(12pt)\n");
        if !section.rows.is_empty() {
            markup.push_str("#align(center)[#table(\n");
            for row in &section.rows {
                let _ = writeln!(
                    markup,
                    "  [{}], [{}],",
                    text_content(&row.label),
                    text_content(&row.value)
                );
            }
            markup.push_str(")]\n");
        }
        markup.push_str("#v(20pt)\n\n");
    }

    markup
}

fn heading(markup: &mut String, text: &str) {
    let _ = writeln!(
        markup,
        "#text(size: 14pt, weight: \"bold\", fill: rgb(\"{BRAND_BLUE}\"))[{}]",
        text_content(text)
    );
}

/// Content showing `text` as typed: one string literal per line, joined by
/// forced line breaks.
fn text_content(text: &str) -> String {
    text.lines()
        .map(|line| format!("#{}", string_literal(&keep_spaces(line))))
        .collect::<Vec<_>>()
        .join(" \\ ")
}

/// Turn spaces that typst would collapse or trim into no-break spaces.
///
/// Leading spaces and every space after the first in a run are replaced, so a
/// single space between words still allows a line break there.
fn keep_spaces(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut after_space = true;
    for c in line.chars() {
        if c == ' ' && after_space {
            out.push(NBSP);
        } else {
            out.push(c);
        }
        after_space = c == ' ';
    }
    out
}

/// A typst string literal holding `text`.
fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            NBSP => out.push_str("\\u{a0}"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
