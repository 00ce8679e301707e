//! The interactive page loop.

use std::path::PathBuf;

use proposal_export::{ExportDispatcher, ExportError, LinkOpener};
use proposal_wizard::{QueryParams, Registry, Session, Wizard, WizardEvent};
use tracing::{info, warn};

use crate::{DialoguerBackend, DialoguerError, branding};

/// What the user can do once a page has been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    GoTo,
    EditAgain,
    Email,
    Download,
    Quit,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Next => "Next",
            Action::Previous => "Previous",
            Action::GoTo => "Go to section…",
            Action::EditAgain => "Edit this section again",
            Action::Email => "Send by email",
            Action::Download => "Download the PDF",
            Action::Quit => "Quit",
        }
    }
}

/// The menu for the session's current page, default entry first.
pub fn actions(session: &Session) -> Vec<Action> {
    let mut actions = Vec::new();
    if session.is_last_page() {
        actions.extend([Action::Email, Action::Download]);
    } else {
        actions.push(Action::Next);
    }
    if !session.is_first_page() {
        actions.push(Action::Previous);
    }
    actions.extend([Action::GoTo, Action::EditAgain, Action::Quit]);
    actions
}

/// Prints compose links instead of opening them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        println!("Open this link to compose the email:\n{url}");
        Ok(())
    }
}

enum Flow {
    Render,
    Quit,
}

/// One terminal session of the assistant.
pub struct App<'r, O> {
    wizard: Wizard<'r, QueryParams>,
    exporter: ExportDispatcher<'r, O>,
    backend: DialoguerBackend,
    output_dir: PathBuf,
}

impl<'r, O: LinkOpener> App<'r, O> {
    pub fn new(
        registry: &'r Registry,
        link: QueryParams,
        backend: DialoguerBackend,
        exporter: ExportDispatcher<'r, O>,
    ) -> Self {
        Self {
            wizard: Wizard::resume(registry, link),
            exporter,
            backend,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn wizard(&self) -> &Wizard<'r, QueryParams> {
        &self.wizard
    }

    /// Run pages until the user quits or cancels, returning the final session.
    pub fn run(mut self) -> anyhow::Result<Session> {
        loop {
            if let Err(err) = self.wizard.render_page(&mut self.backend) {
                if DialoguerError::is_cancellation(&err) {
                    info!("wizard cancelled");
                    break;
                }
                return Err(err.into());
            }

            println!();
            println!(
                "Resume this section later with: --resume '{}'",
                self.wizard.link()
            );

            match self.menu()? {
                Flow::Render => continue,
                Flow::Quit => break,
            }
        }
        Ok(self.wizard.into_session())
    }

    fn menu(&mut self) -> anyhow::Result<Flow> {
        loop {
            let actions = actions(self.wizard.session());
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
            let choice = match self.backend.menu("What next?", &labels, 0) {
                Ok(choice) => choice,
                Err(DialoguerError::Cancelled) => return Ok(Flow::Quit),
                Err(err) => return Err(err.into()),
            };
            let Some(action) = actions.get(choice).copied() else {
                continue;
            };

            match action {
                Action::Next => {
                    self.wizard.dispatch(WizardEvent::Next)?;
                    return Ok(Flow::Render);
                }
                Action::Previous => {
                    self.wizard.dispatch(WizardEvent::Previous)?;
                    return Ok(Flow::Render);
                }
                Action::GoTo => {
                    let names: Vec<&str> = self
                        .wizard
                        .registry()
                        .pages()
                        .iter()
                        .map(|p| p.name())
                        .collect();
                    let current = self.wizard.session().page_index();
                    match self.backend.fuzzy_menu("Go to section", &names, current) {
                        Ok(page) => {
                            self.wizard.dispatch(WizardEvent::GoTo(page))?;
                            return Ok(Flow::Render);
                        }
                        Err(DialoguerError::Cancelled) => continue,
                        Err(err) => return Err(err.into()),
                    }
                }
                Action::EditAgain => return Ok(Flow::Render),
                Action::Email => self.email()?,
                Action::Download => self.download(),
                Action::Quit => return Ok(Flow::Quit),
            }
        }
    }

    fn email(&mut self) -> anyhow::Result<()> {
        let recipient = match self.backend.ask_line("Recipient email", "") {
            Ok(recipient) => recipient,
            Err(DialoguerError::Cancelled) => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        match self.exporter.email(self.wizard.session().values(), &recipient) {
            Ok(_) => println!("Email draft opened. Attach the downloaded PDF before sending."),
            Err(ExportError::MissingRecipient) => {
                eprintln!("{}", ExportError::MissingRecipient);
            }
            Err(ExportError::OpenLink { url, source }) => {
                warn!(error = %source, "falling back to printing the compose link");
                println!("Could not open the browser. Compose link:\n{url}");
            }
            Err(err) => eprintln!("{err}"),
        }
        Ok(())
    }

    fn download(&self) {
        let saved = self
            .exporter
            .download(self.wizard.session().values())
            .and_then(|download| download.save_to(&self.output_dir));
        match saved {
            Ok(path) => println!("Saved {}", path.display()),
            Err(err) => eprintln!("{err}"),
        }
    }
}

/// Print the header, run the wizard, print the footer.
pub fn run_assistant<O: LinkOpener>(
    app: App<'_, O>,
    logo: &std::path::Path,
) -> anyhow::Result<Session> {
    println!("{}", branding::header(logo));
    let session = app.run()?;
    println!();
    println!("{}", branding::footer());
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(page: usize) -> Session {
        let mut session = Session::new(6);
        session.jump(page).unwrap();
        session
    }

    #[test]
    fn first_page_has_no_previous() {
        let actions = actions(&session_at(0));
        assert_eq!(actions[0], Action::Next);
        assert!(!actions.contains(&Action::Previous));
        assert!(!actions.contains(&Action::Email));
    }

    #[test]
    fn middle_pages_move_both_ways() {
        let actions = actions(&session_at(3));
        assert_eq!(&actions[..2], &[Action::Next, Action::Previous]);
    }

    #[test]
    fn last_page_offers_exports() {
        let actions = actions(&session_at(5));
        assert_eq!(
            actions,
            vec![
                Action::Email,
                Action::Download,
                Action::Previous,
                Action::GoTo,
                Action::EditAgain,
                Action::Quit
            ]
        );
    }

    #[test]
    fn labels_are_distinct() {
        let all = [
            Action::Next,
            Action::Previous,
            Action::GoTo,
            Action::EditAgain,
            Action::Email,
            Action::Download,
            Action::Quit,
        ];
        let mut labels: Vec<_> = all.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), all.len());
    }

    #[test]
    fn print_opener_accepts_links() {
        assert!(PrintOpener.open("https://example.org").is_ok());
    }
}
