use proposal_wizard::{FieldValues, Registry};

use crate::{
    DEFAULT_COMPOSE_URL, Download, ExportError, LinkOpener, prepare_download, send_email_draft,
};

/// The export actions, bound to a registry, a compose URL and a link opener.
#[derive(Debug)]
pub struct ExportDispatcher<'r, O> {
    registry: &'r Registry,
    compose_url: String,
    opener: O,
}

impl<'r, O: LinkOpener> ExportDispatcher<'r, O> {
    /// Create a dispatcher that composes through the default web-mail URL.
    pub fn new(registry: &'r Registry, opener: O) -> Self {
        Self {
            registry,
            compose_url: DEFAULT_COMPOSE_URL.to_string(),
            opener,
        }
    }

    pub fn with_compose_url(mut self, url: impl Into<String>) -> Self {
        self.compose_url = url.into();
        self
    }

    pub fn compose_url(&self) -> &str {
        &self.compose_url
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// See [`prepare_download`].
    pub fn download(&self, values: &FieldValues) -> Result<Download, ExportError> {
        prepare_download(self.registry, values)
    }

    /// See [`send_email_draft`].
    pub fn email(&mut self, values: &FieldValues, recipient: &str) -> Result<String, ExportError> {
        send_email_draft(
            self.registry,
            values,
            recipient,
            &self.compose_url,
            &mut self.opener,
        )
    }
}
