//! # proposal-wizard
//!
//! The page/session state machine of the project-proposal assistant. Backend-agnostic.
//!
//! A `Wizard` owns the `Session` for one user, moves between the six pages of the
//! built-in `Registry` and renders the current page through any `FormBackend`
//! (terminal prompts, a GUI, or the scripted `TestBackend`).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use proposal_wizard::{QueryParams, Registry, TestBackend, Wizard, WizardEvent};
//!
//! let registry = Registry::builtin()?;
//! let mut wizard = Wizard::resume(&registry, QueryParams::parse("?page=0"));
//!
//! let mut backend = TestBackend::new().with_text("Project Name", "Foo");
//! wizard.render_page(&mut backend)?;
//! wizard.dispatch(WizardEvent::Next)?;
//!
//! assert_eq!(wizard.link().to_query_string(), "?page=1");
//! ```
//!
//! ## Execution model
//!
//! The host may re-render the whole page on every input event. Rendering and
//! navigation are idempotent for unchanged inputs: seeding a widget from the
//! session and committing it back leaves the session as it was.

// Re-export all types from proposal-types
pub use proposal_types::*;

mod renderer;
pub use renderer::FormRenderer;

mod event;
pub use event::{Transition, WizardEvent};

mod wizard;
pub use wizard::Wizard;

// Test backend for driving the wizard without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
