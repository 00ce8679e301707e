use proposal_doc_pdf::{generate_document, project_title};
use proposal_wizard::{FieldValues, Registry};
use tracing::{info, warn};

use crate::{ExportError, LinkOpener};

pub const EMAIL_BODY_HEADER: &str = "Détails du Projet:\n\n";

/// Appended to the body in the compose link.
pub const ATTACHMENT_NOTE: &str =
    "\n\nNote: Please find the attached PDF document with project details.";

pub const DEFAULT_COMPOSE_URL: &str = "https://mail.google.com/mail/";

/// One `"<field>: <value>"` line per set field, in the order they were entered.
pub fn format_email_body(values: &FieldValues) -> String {
    let mut body = String::from(EMAIL_BODY_HEADER);
    for (field, value) in values.iter() {
        body.push_str(&format!("{field}: {value}\n"));
    }
    body
}

/// A prefilled email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Build the draft for `values`, failing on a blank recipient.
    pub fn new(recipient: &str, values: &FieldValues) -> Result<Self, ExportError> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(ExportError::MissingRecipient);
        }
        Ok(Self {
            recipient: recipient.to_string(),
            subject: project_title(values),
            body: format_email_body(values),
        })
    }

    /// The web-mail compose link for this draft.
    ///
    /// All three parameters are percent-encoded; `@` stays readable in the
    /// recipient.
    pub fn compose_url(&self, base: &str) -> String {
        let body = format!("{}{ATTACHMENT_NOTE}", self.body);
        format!(
            "{base}?view=cm&fs=1&to={}&su={}&body={}",
            urlencoding::encode(&self.recipient).replace("%40", "@"),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}

/// Open a compose window addressed to `recipient` with the project details.
///
/// A document is rendered alongside and then discarded: the compose link
/// cannot carry attachments. Returns the link that was opened.
pub fn send_email_draft<O: LinkOpener>(
    registry: &Registry,
    values: &FieldValues,
    recipient: &str,
    compose_url: &str,
    opener: &mut O,
) -> Result<String, ExportError> {
    let draft = EmailDraft::new(recipient, values)?;

    let doc = generate_document(registry, values)?;
    let url = draft.compose_url(compose_url);
    let opened = opener.open(&url);
    if let Err(err) = doc.close() {
        warn!(%err, "could not remove the discarded document");
    }

    opened.map_err(|source| {
        warn!(error = %source, "could not open compose link");
        ExportError::OpenLink {
            url: url.clone(),
            source,
        }
    })?;
    info!(subject = %draft.subject, "opened email draft");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingOpener;
    use proposal_wizard::PROJECT_NAME;

    #[test]
    fn body_lists_fields_in_entry_order() {
        let mut values = FieldValues::new();
        values.insert("Risks", "Rain");
        values.insert(PROJECT_NAME, "Foo");

        assert_eq!(
            format_email_body(&values),
            "Détails du Projet:\n\nRisks: Rain\nProject Name: Foo\n"
        );
    }

    #[test]
    fn blank_recipient_is_rejected() {
        let values = FieldValues::new();
        assert!(matches!(
            EmailDraft::new("   ", &values),
            Err(ExportError::MissingRecipient)
        ));
        assert!(matches!(
            EmailDraft::new("", &values),
            Err(ExportError::MissingRecipient)
        ));
    }

    #[test]
    fn subject_defaults_to_new_project() {
        let draft = EmailDraft::new("a@b.cd", &FieldValues::new()).unwrap();
        assert_eq!(draft.subject, "Projet: Nouveau Projet");
        assert_eq!(draft.body, "Détails du Projet:\n\n");
    }

    #[test]
    fn compose_url_encodes_subject_and_body() {
        let mut values = FieldValues::new();
        values.insert(PROJECT_NAME, "Foo Bar");
        let draft = EmailDraft::new(" a@b.cd ", &values).unwrap();

        let url = draft.compose_url(DEFAULT_COMPOSE_URL);
        assert!(url.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=a@b.cd&su="));
        assert!(url.contains("&su=Projet%3A%20Foo%20Bar&"));
        assert!(url.contains("&body=D%C3%A9tails%20du%20Projet%3A%0A%0AProject%20Name%3A%20Foo%20Bar%0A"));
        assert!(url.ends_with("%0A%0ANote%3A%20Please%20find%20the%20attached%20PDF%20document%20with%20project%20details."));
    }

    #[test]
    fn recipient_cannot_add_parameters() {
        let draft = EmailDraft::new("a@b.cd&su=x", &FieldValues::new()).unwrap();
        let url = draft.compose_url(DEFAULT_COMPOSE_URL);

        assert!(url.contains("&to=a@b.cd%26su%3Dx&su="));
        assert_eq!(url.matches("&su=").count(), 1);
    }

    #[test]
    fn send_opens_the_compose_link() {
        let registry = Registry::builtin().unwrap();
        let mut values = FieldValues::new();
        values.insert(PROJECT_NAME, "Foo");
        let mut opener = RecordingOpener::new();

        let url = send_email_draft(
            &registry,
            &values,
            "a@b.cd",
            DEFAULT_COMPOSE_URL,
            &mut opener,
        )
        .unwrap();
        assert_eq!(opener.opened(), [url]);
    }

    #[test]
    fn failed_open_is_reported() {
        struct Broken;
        impl LinkOpener for Broken {
            fn open(&mut self, _url: &str) -> std::io::Result<()> {
                Err(std::io::Error::other("no browser"))
            }
        }

        let registry = Registry::builtin().unwrap();
        let err = send_email_draft(
            &registry,
            &FieldValues::new(),
            "a@b.cd",
            DEFAULT_COMPOSE_URL,
            &mut Broken,
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::OpenLink { .. }));
    }
}
