use chrono::NaiveDate;
use tracing::info;

use crate::{
    FormBackend, FormRenderer, Navigator, Page, PageLink, Registry, Session, Widget, WizardError,
    WizardEvent,
};

/// One interactive session: renderer, navigation controller and session state.
#[derive(Debug)]
pub struct Wizard<'r, L> {
    renderer: FormRenderer<'r>,
    navigator: Navigator<L>,
    session: Session,
}

impl<'r, L: PageLink> Wizard<'r, L> {
    /// Start a session at the page stored in `link` (or the first page).
    pub fn resume(registry: &'r Registry, link: L) -> Self {
        let mut navigator = Navigator::new(link);
        let session = navigator.resume(registry.page_count());
        info!(page = session.page_index(), "session started");
        Self {
            renderer: FormRenderer::new(registry),
            navigator,
            session,
        }
    }

    /// Override the date used to seed unset date fields.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.renderer = self.renderer.with_today(today);
        self
    }

    /// Get the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get the renderer.
    pub fn renderer(&self) -> &FormRenderer<'r> {
        &self.renderer
    }

    /// Get the registry.
    pub fn registry(&self) -> &'r Registry {
        self.renderer.registry()
    }

    /// Get the page link.
    pub fn link(&self) -> &L {
        self.navigator.link()
    }

    /// Get the page the session is on.
    pub fn current_page(&self) -> &'r Page {
        let registry = self.renderer.registry();
        &registry.pages()[self.session.page_index()]
    }

    /// Widgets for the current page.
    pub fn widgets(&self) -> Vec<Widget> {
        self.renderer.widgets(&self.session)
    }

    /// Apply an event and publish any page change.
    ///
    /// On error the session is unchanged.
    pub fn dispatch(&mut self, event: WizardEvent) -> Result<(), WizardError> {
        let transition = self.renderer.apply(&self.session, event)?;
        self.session = transition.session;
        if let Some(index) = transition.publish {
            self.navigator.publish(index);
        }
        Ok(())
    }

    /// Render the current page through `backend`.
    pub fn render_page<B: FormBackend>(&mut self, backend: &mut B) -> Result<(), WizardError> {
        self.renderer.render_page(&mut self.session, backend)
    }

    /// End the session, returning its final state.
    pub fn into_session(self) -> Session {
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryParams;

    #[test]
    fn resume_publishes_starting_page() {
        let registry = Registry::builtin().unwrap();
        let wizard = Wizard::resume(&registry, QueryParams::parse("?page=3"));
        assert_eq!(wizard.session().page_index(), 3);
        assert_eq!(wizard.current_page().name(), "Analysis");
        assert_eq!(wizard.link().to_query_string(), "?page=3");
    }

    #[test]
    fn dispatch_keeps_link_in_sync() {
        let registry = Registry::builtin().unwrap();
        let mut wizard = Wizard::resume(&registry, QueryParams::new());

        wizard.dispatch(WizardEvent::Next).unwrap();
        wizard.dispatch(WizardEvent::Next).unwrap();
        wizard.dispatch(WizardEvent::Previous).unwrap();
        assert_eq!(wizard.link().to_query_string(), "?page=1");

        let err = wizard.dispatch(WizardEvent::GoTo(42)).unwrap_err();
        assert!(matches!(err, WizardError::InvalidPageIndex { .. }));
        assert_eq!(wizard.session().page_index(), 1);
        assert_eq!(wizard.link().to_query_string(), "?page=1");
    }
}
