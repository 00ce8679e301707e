//! # proposal-wizard-dialoguer
//!
//! Command-line host for the proposal assistant.
//!
//! Each page of the wizard is presented as a series of `dialoguer` prompts,
//! followed by a navigation menu. The last page offers the PDF download and
//! the email draft.
//!
//! ## Example
//!
//! ```rust,ignore
//! use proposal_export::{ExportDispatcher, SystemOpener};
//! use proposal_wizard::{QueryParams, Registry};
//! use proposal_wizard_dialoguer::{App, DialoguerBackend};
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = Registry::builtin()?;
//!     let exporter = ExportDispatcher::new(&registry, SystemOpener);
//!     let app = App::new(&registry, QueryParams::new(), DialoguerBackend::new(), exporter);
//!     let session = app.run()?;
//!     println!("{} fields filled in", session.values().len());
//!     Ok(())
//! }
//! ```

mod backend;
pub use backend::{DialoguerBackend, DialoguerError};

mod app;
pub use app::{Action, App, PrintOpener, actions, run_assistant};

pub mod branding;

mod config;
pub use config::{AssistantConfig, ConfigError, DEFAULT_CONFIG_FILE, ENV_PREFIX};
