//! Runtime settings for the command-line assistant.
//!
//! Settings are layered: built-in defaults, then an optional TOML file
//! (`proposal-assistant.toml` in the working directory, or the file given with
//! `--config`), then environment variables with the `PROPOSAL_ASSISTANT`
//! prefix, e.g. `PROPOSAL_ASSISTANT__OUTPUT_DIR=/tmp`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use proposal_export::DEFAULT_COMPOSE_URL;
use serde::Deserialize;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "proposal-assistant.toml";

pub const ENV_PREFIX: &str = "PROPOSAL_ASSISTANT";

/// Error type for loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("compose_url must not be empty")]
    EmptyComposeUrl,
}

/// Settings for one run of the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Directory downloaded documents are saved to.
    pub output_dir: PathBuf,

    /// Web-mail compose endpoint used for email drafts.
    pub compose_url: String,

    /// Logo shown in the header.
    pub logo_path: PathBuf,

    /// Open compose links in the browser, or only print them.
    pub open_links: bool,

    pub colorful: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            compose_url: DEFAULT_COMPOSE_URL.to_string(),
            logo_path: PathBuf::from("resources/DBRDC_logo2.png"),
            open_links: true,
            colorful: true,
        }
    }
}

impl AssistantConfig {
    /// Load settings from `file` (required) or the default file (optional),
    /// overridden by the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let file = match file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(env.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compose_url.trim().is_empty() {
            return Err(ConfigError::EmptyComposeUrl);
        }
        Ok(())
    }
}
