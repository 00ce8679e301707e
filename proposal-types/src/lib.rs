//! Core types for the proposal assistant.
//!
//! This crate provides the foundational types for the project-proposal wizard:
//! - `Registry`, `Page` and `FieldDefinition` - The fixed, declarative field registry
//! - `FieldValue` and `FieldValues` - Collected answers, keyed by field name
//! - `Session` - Current page plus answers for one interactive session
//! - `PageLink` and `QueryParams` - The shareable page reference used for resuming
//! - `FormBackend` - Trait implemented by UI hosts that display widgets

mod field_value;
pub use field_value::FieldValue;

mod field_values;
pub use field_values::{FieldValues, ValueError};

mod field;
pub use field::{FieldDefinition, FieldKind, OTHER_OPTION, SelectField};

mod page;
pub use page::Page;

mod registry;
pub use registry::{
    BUILTIN_PAGES, FieldTemplate, PROJECT_LOCATION, PROJECT_NAME, PageTemplate, Registry,
};

mod session;
pub use session::Session;

mod page_link;
pub use page_link::{PAGE_PARAM, PageLink, QueryParams};

mod navigation;
pub use navigation::Navigator;

mod widget;
pub use widget::{Control, FieldInput, Widget};

mod error;
pub use error::WizardError;

mod traits;
pub use traits::FormBackend;
