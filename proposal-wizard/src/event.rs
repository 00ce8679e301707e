//! The wizard as a pure reducer: `(Session, WizardEvent) -> Transition`.

use crate::{FieldInput, FormRenderer, Session, WizardError};

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// "Next" button.
    Next,
    /// "Previous" button.
    Previous,
    /// Sidebar entry for a page.
    GoTo(usize),
    /// A widget produced a value.
    Edit { field: String, input: FieldInput },
}

/// Result of applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The session after the event.
    pub session: Session,

    /// The page index to publish to the page link, if navigation happened.
    pub publish: Option<usize>,
}

impl FormRenderer<'_> {
    /// Apply `event` to a copy of `session`.
    ///
    /// The input session is never modified, so a failed event leaves the
    /// caller's state exactly as it was.
    pub fn apply(&self, session: &Session, event: WizardEvent) -> Result<Transition, WizardError> {
        let mut next = session.clone();
        let publish = match event {
            WizardEvent::Next => next.advance().then(|| next.page_index()),
            WizardEvent::Previous => next.retreat().then(|| next.page_index()),
            WizardEvent::GoTo(page) => {
                next.jump(page)?;
                Some(page)
            }
            WizardEvent::Edit { field, input } => {
                self.commit(&mut next, &field, input)?;
                None
            }
        };
        Ok(Transition {
            session: next,
            publish,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldValue, PROJECT_LOCATION, Registry};

    #[test]
    fn navigation_events_publish_new_index() {
        let registry = Registry::builtin().unwrap();
        let renderer = FormRenderer::new(&registry);
        let session = Session::new(registry.page_count());

        let t = renderer.apply(&session, WizardEvent::Next).unwrap();
        assert_eq!(t.session.page_index(), 1);
        assert_eq!(t.publish, Some(1));

        let t = renderer.apply(&t.session, WizardEvent::GoTo(5)).unwrap();
        assert_eq!(t.publish, Some(5));

        let t = renderer.apply(&t.session, WizardEvent::Next).unwrap();
        assert_eq!(t.session.page_index(), 5);
        assert_eq!(t.publish, None);
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let registry = Registry::builtin().unwrap();
        let renderer = FormRenderer::new(&registry);
        let session = Session::new(registry.page_count());

        let t = renderer.apply(&session, WizardEvent::Previous).unwrap();
        assert_eq!(t.session, session);
        assert_eq!(t.publish, None);
    }

    #[test]
    fn failed_event_leaves_input_untouched() {
        let registry = Registry::builtin().unwrap();
        let renderer = FormRenderer::new(&registry);
        let session = Session::new(registry.page_count());

        assert!(renderer.apply(&session, WizardEvent::GoTo(6)).is_err());
        assert_eq!(session.page_index(), 0);
    }

    #[test]
    fn edit_event_commits_value() {
        let registry = Registry::builtin().unwrap();
        let renderer = FormRenderer::new(&registry);
        let session = Session::new(registry.page_count());

        let t = renderer
            .apply(
                &session,
                WizardEvent::Edit {
                    field: PROJECT_LOCATION.to_string(),
                    input: FieldInput::other(4, "Goma"),
                },
            )
            .unwrap();
        assert_eq!(t.session.get(PROJECT_LOCATION), Some(&FieldValue::from("Goma")));
        assert_eq!(t.publish, None);
    }

    #[test]
    fn repeated_application_is_idempotent() {
        let registry = Registry::builtin().unwrap();
        let renderer = FormRenderer::new(&registry);
        let session = Session::new(registry.page_count());
        let event = WizardEvent::Edit {
            field: "Project Status".to_string(),
            input: FieldInput::choice(1),
        };

        let once = renderer.apply(&session, event.clone()).unwrap().session;
        let twice = renderer.apply(&once, event).unwrap().session;
        assert_eq!(once, twice);
    }
}
