use proposal_wizard::{FieldValues, PROJECT_NAME, Registry};

/// Heading of every exported document.
pub const DOCUMENT_TITLE: &str = "Digital Bridge RDC";

/// Prefix of the document subtitle and of the email subject.
pub const SUBJECT_PREFIX: &str = "Projet: ";

/// Project name used when none was entered.
pub const DEFAULT_PROJECT_NAME: &str = "Nouveau Projet";

/// "Projet: <name>", falling back to the default name when unset.
pub fn project_title(values: &FieldValues) -> String {
    format!(
        "{SUBJECT_PREFIX}{}",
        values.display_or(PROJECT_NAME, DEFAULT_PROJECT_NAME)
    )
}

/// The logical content of an exported document, before layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
}

/// One page of the wizard, as a titled table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub rows: Vec<Row>,
}

/// A label/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl ExportedDocument {
    /// Build the document for `values`.
    ///
    /// Every page of the registry becomes a section, even without rows. Rows
    /// follow the registry's declared order, not the order the values were
    /// entered in, and unset fields are left out.
    pub fn build(registry: &Registry, values: &FieldValues) -> Self {
        let sections = registry
            .pages()
            .iter()
            .map(|page| Section {
                heading: page.name().to_string(),
                rows: page
                    .fields()
                    .iter()
                    .filter_map(|field| {
                        values.get(field.name()).map(|value| Row {
                            label: field.name().to_string(),
                            value: value.to_string(),
                        })
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: DOCUMENT_TITLE.to_string(),
            subtitle: project_title(values),
            sections,
        }
    }

    /// All rows, section by section.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    /// Section headings in order.
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.heading.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proposal_wizard::FieldValue;

    #[test]
    fn empty_values_keep_every_heading() {
        let registry = Registry::builtin().unwrap();
        let doc = ExportedDocument::build(&registry, &FieldValues::new());

        assert_eq!(
            doc.headings(),
            vec![
                "Basic Info",
                "Objectives",
                "Team & Budget",
                "Analysis",
                "SWOT Analysis",
                "Follow-up"
            ]
        );
        assert_eq!(doc.rows().count(), 0);
        assert_eq!(doc.title, "Digital Bridge RDC");
        assert_eq!(doc.subtitle, "Projet: Nouveau Projet");
    }

    #[test]
    fn rows_hold_present_fields_only() {
        let registry = Registry::builtin().unwrap();
        let mut values = FieldValues::new();
        values.insert("Start Date", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        values.insert(PROJECT_NAME, "Foo");

        let doc = ExportedDocument::build(&registry, &values);
        let rows: Vec<_> = doc
            .rows()
            .map(|r| (r.label.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![(PROJECT_NAME, "Foo"), ("Start Date", "2025-01-01")]
        );
        assert_eq!(doc.subtitle, "Projet: Foo");
    }

    #[test]
    fn rows_land_in_their_page_section() {
        let registry = Registry::builtin().unwrap();
        let mut values = FieldValues::new();
        values.insert("Threats", "Flooding");
        values.insert(
            "Team Members",
            FieldValue::List(vec!["Ana".into(), "Ben".into()]),
        );

        let doc = ExportedDocument::build(&registry, &values);
        assert_eq!(doc.sections[2].rows[0].value, "Ana, Ben");
        assert_eq!(doc.sections[4].rows[0].label, "Threats");
        assert!(doc.sections[0].rows.is_empty());
    }

    #[test]
    fn explicit_empty_name_is_not_defaulted() {
        let mut values = FieldValues::new();
        values.insert(PROJECT_NAME, "");
        assert_eq!(project_title(&values), "Projet: ");
    }
}
