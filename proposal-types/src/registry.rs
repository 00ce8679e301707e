//! The fixed field registry.
//!
//! Fields are authored as a static table with string kind tags and parsed into
//! `FieldDefinition`s once at startup. An unknown tag is an authoring bug and
//! surfaces as `WizardError::UnsupportedFieldKind` before anything is rendered.

use crate::{FieldDefinition, FieldKind, OTHER_OPTION, Page, SelectField, WizardError};

/// Name of the field used for titles, subjects and file names.
pub const PROJECT_NAME: &str = "Project Name";

/// Name of the only field with a free-text "Other…" option.
pub const PROJECT_LOCATION: &str = "Project Location";

/// A field as authored in the registry table.
#[derive(Debug, Clone, Copy)]
pub struct FieldTemplate {
    pub name: &'static str,
    /// One of `text`, `text_area`, `date`, `select`.
    pub kind: &'static str,
    /// Only meaningful for `select`.
    pub options: &'static [&'static str],
    pub description: &'static str,
}

/// A page as authored in the registry table.
#[derive(Debug, Clone, Copy)]
pub struct PageTemplate {
    pub name: &'static str,
    pub fields: &'static [FieldTemplate],
}

const fn field(
    name: &'static str,
    kind: &'static str,
    description: &'static str,
) -> FieldTemplate {
    FieldTemplate {
        name,
        kind,
        options: &[],
        description,
    }
}

const fn select(
    name: &'static str,
    options: &'static [&'static str],
    description: &'static str,
) -> FieldTemplate {
    FieldTemplate {
        name,
        kind: "select",
        options,
        description,
    }
}

pub const BUILTIN_PAGES: &[PageTemplate] = &[
    PageTemplate {
        name: "Basic Info",
        fields: &[
            field(
                PROJECT_NAME,
                "text",
                "Enter a unique, descriptive name for your project (e.g. 'Tech-Training-Kinshasa-2024')",
            ),
            select(
                PROJECT_LOCATION,
                &["Mbuji Mayi", "Kanaga", "Kinshasa", "Kikwit", OTHER_OPTION],
                "Specify the city and province where the project will take place",
            ),
            select(
                "Project Status",
                &["Proposed", "Active", "In Progress", "Completed"],
                "Select the current state of the project",
            ),
            field("Start Date", "date", "Planned or actual start date of the project"),
            field("End Date", "date", "Planned end date of the project"),
            field(
                "Description",
                "text_area",
                "Summarize the main goal and key activities of the project in 1-2 sentences",
            ),
        ],
    },
    PageTemplate {
        name: "Objectives",
        fields: &[
            field(
                "Short-Term Objectives",
                "text_area",
                "List 3-5 specific objectives to reach within 3-6 months",
            ),
            field(
                "Long-Term Objectives",
                "text_area",
                "Describe the lasting impact expected within 1-3 years",
            ),
            field(
                "Project Phases",
                "text_area",
                "List the main stages with their approximate timelines",
            ),
        ],
    },
    PageTemplate {
        name: "Team & Budget",
        fields: &[
            field(
                "Responsible Person(s)",
                "text",
                "Name the project lead and main owners with their contact details",
            ),
            field(
                "Team Members",
                "text_area",
                "List the key members and their specific roles",
            ),
            field(
                "Estimated Budget",
                "text",
                "Break costs down by category (staff, equipment, travel)",
            ),
            field(
                "Funding Sources",
                "text_area",
                "Give the confirmed and potential funding sources",
            ),
        ],
    },
    PageTemplate {
        name: "Analysis",
        fields: &[
            field(
                "Risks",
                "text_area",
                "Identify the main risks and how they will be mitigated",
            ),
            field(
                "Rewards",
                "text_area",
                "Describe the expected benefits (social, economic, environmental)",
            ),
        ],
    },
    PageTemplate {
        name: "SWOT Analysis",
        fields: &[
            field(
                "Strengths",
                "text_area",
                "List the internal advantages and distinctive capabilities of the project",
            ),
            field(
                "Weaknesses",
                "text_area",
                "Identify the internal limitations and challenges to overcome",
            ),
            field(
                "Opportunities",
                "text_area",
                "Describe the external factors in favour of the project",
            ),
            field("Threats", "text_area", "List the potential external obstacles"),
        ],
    },
    PageTemplate {
        name: "Follow-up",
        fields: &[
            field(
                "Stakeholders",
                "text_area",
                "Identify everyone involved (communities, authorities, partners)",
            ),
            field(
                "Impact Measures",
                "text_area",
                "Define the key performance indicators",
            ),
            select(
                "Report Frequency",
                &["Weekly", "Monthly", "Quarterly"],
                "Choose how often progress is reported",
            ),
            field(
                "Documentation Link",
                "text",
                "Add links to the detailed project documents",
            ),
            field("Remarks", "text_area", "Add any other relevant information"),
        ],
    },
];

/// The parsed, immutable field registry.
#[derive(Debug, Clone)]
pub struct Registry {
    pages: Vec<Page>,
}

impl Registry {
    /// Parse the built-in six-page registry.
    pub fn builtin() -> Result<Self, WizardError> {
        Self::from_templates(BUILTIN_PAGES)
    }

    /// Parse a registry table.
    pub fn from_templates(templates: &[PageTemplate]) -> Result<Self, WizardError> {
        let mut pages = Vec::with_capacity(templates.len());
        for (page_index, page) in templates.iter().enumerate() {
            let fields = page
                .fields
                .iter()
                .map(|template| parse_field(template, page_index))
                .collect::<Result<Vec<_>, _>>()?;
            pages.push(Page::new(page.name, fields));
        }
        Ok(Self { pages })
    }

    /// Get all pages in declared order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get a page by index.
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Iterate over all fields, page by page, in declared order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.pages.iter().flat_map(|p| p.fields().iter())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().find(|f| f.name() == name)
    }
}

fn parse_field(template: &FieldTemplate, page: usize) -> Result<FieldDefinition, WizardError> {
    let kind = match template.kind {
        "text" => FieldKind::Text,
        "text_area" => FieldKind::TextArea,
        "date" => FieldKind::Date,
        "select" => FieldKind::Select(SelectField::new(template.options.iter().copied())),
        other => {
            return Err(WizardError::UnsupportedFieldKind {
                field: template.name.to_string(),
                kind: other.to_string(),
            });
        }
    };
    Ok(FieldDefinition::new(template.name, kind, template.description, page))
}
