use crate::FieldDefinition;

/// A named group of fields: one wizard step and one document section.
#[derive(Debug, Clone)]
pub struct Page {
    /// Section title.
    pub name: String,

    /// Fields in declared order.
    pub fields: Vec<FieldDefinition>,
}

impl Page {
    /// Create a new page with the given fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Get the page title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the fields.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Check if the page has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
