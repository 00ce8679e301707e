//! Page navigation rules and link synchronisation.

use tracing::{debug, warn};

use crate::{PageLink, Session, WizardError};

impl Session {
    /// Move to the next page. No-op on the last page.
    ///
    /// Returns `true` if the index changed.
    pub fn advance(&mut self) -> bool {
        if self.is_last_page() {
            return false;
        }
        self.set_page_index(self.page_index() + 1);
        true
    }

    /// Move to the previous page. No-op on the first page.
    ///
    /// Returns `true` if the index changed.
    pub fn retreat(&mut self) -> bool {
        if self.is_first_page() {
            return false;
        }
        self.set_page_index(self.page_index() - 1);
        true
    }

    /// Move directly to `page`.
    ///
    /// Fails with `InvalidPageIndex` and leaves the index unchanged if `page`
    /// is out of range.
    pub fn jump(&mut self, page: usize) -> Result<(), WizardError> {
        if page >= self.page_count() {
            return Err(WizardError::InvalidPageIndex {
                index: page,
                page_count: self.page_count(),
            });
        }
        self.set_page_index(page);
        Ok(())
    }

    /// Start a session at the page stored in `link`.
    ///
    /// A present, numeric, in-range value wins over the default of 0; anything
    /// else falls back to the first page.
    pub fn resume(link: &impl PageLink, page_count: usize) -> Self {
        let mut session = Session::new(page_count);
        let Some(raw) = link.page() else {
            return session;
        };
        match raw.trim().parse::<usize>() {
            Ok(page) if page < page_count => {
                debug!(page, "resuming session from page link");
                session.set_page_index(page);
            }
            Ok(page) => warn!(page, page_count, "page link out of range, starting at 0"),
            Err(_) => warn!(value = raw, "page link is not a number, starting at 0"),
        }
        session
    }
}

/// Navigation controller: moves the session between pages and publishes
/// every change to the shareable page link.
#[derive(Debug, Clone, Default)]
pub struct Navigator<L> {
    link: L,
}

impl<L: PageLink> Navigator<L> {
    /// Create a navigator publishing to `link`.
    pub fn new(link: L) -> Self {
        Self { link }
    }

    /// Get the page link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Consume the navigator, returning the page link.
    pub fn into_link(self) -> L {
        self.link
    }

    /// Start a session from the link's stored page.
    pub fn resume(&mut self, page_count: usize) -> Session {
        let session = Session::resume(&self.link, page_count);
        self.link.publish(session.page_index());
        session
    }

    /// Move to the next page and publish it.
    pub fn advance(&mut self, session: &mut Session) -> bool {
        let moved = session.advance();
        self.publish_if(moved, session);
        moved
    }

    /// Move to the previous page and publish it.
    pub fn retreat(&mut self, session: &mut Session) -> bool {
        let moved = session.retreat();
        self.publish_if(moved, session);
        moved
    }

    /// Jump to `page` and publish it.
    pub fn jump(&mut self, session: &mut Session, page: usize) -> Result<(), WizardError> {
        session.jump(page)?;
        self.publish_if(true, session);
        Ok(())
    }

    /// Publish an index chosen elsewhere (e.g. by the event reducer).
    pub fn publish(&mut self, index: usize) {
        self.link.publish(index);
    }

    fn publish_if(&mut self, moved: bool, session: &Session) {
        if moved {
            debug!(page = session.page_index(), "navigated");
            self.link.publish(session.page_index());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryParams;

    #[test]
    fn jump_round_trips_for_every_valid_page() {
        let mut session = Session::new(6);
        for page in 0..6 {
            session.jump(page).unwrap();
            assert_eq!(session.page_index(), page);
        }
    }

    #[test]
    fn jump_out_of_range_leaves_index_unchanged() {
        let mut session = Session::new(6);
        session.jump(2).unwrap();

        for page in [6, 7, usize::MAX] {
            let err = session.jump(page).unwrap_err();
            assert!(matches!(
                err,
                WizardError::InvalidPageIndex { index, page_count: 6 } if index == page
            ));
            assert_eq!(session.page_index(), 2);
        }
    }

    #[test]
    fn advance_at_last_page_is_noop() {
        let mut session = Session::new(6);
        session.jump(5).unwrap();
        assert!(!session.advance());
        assert_eq!(session.page_index(), 5);
    }

    #[test]
    fn retreat_at_first_page_is_noop() {
        let mut session = Session::new(6);
        assert!(!session.retreat());
        assert_eq!(session.page_index(), 0);
    }

    #[test]
    fn navigator_publishes_changes() {
        let mut nav = Navigator::new(QueryParams::new());
        let mut session = nav.resume(6);
        assert_eq!(nav.link().to_query_string(), "?page=0");

        nav.advance(&mut session);
        nav.advance(&mut session);
        assert_eq!(nav.link().to_query_string(), "?page=2");

        nav.retreat(&mut session);
        assert_eq!(nav.link().to_query_string(), "?page=1");

        nav.jump(&mut session, 5).unwrap();
        assert_eq!(nav.link().to_query_string(), "?page=5");
    }

    #[test]
    fn failed_jump_publishes_nothing() {
        let mut nav = Navigator::new(QueryParams::parse("?page=3"));
        let mut session = nav.resume(6);
        assert!(nav.jump(&mut session, 9).is_err());
        assert_eq!(nav.link().page(), Some("3"));
    }

    #[test]
    fn resume_uses_valid_link() {
        let session = Session::resume(&QueryParams::parse("?page=4"), 6);
        assert_eq!(session.page_index(), 4);
    }

    #[test]
    fn resume_falls_back_to_first_page() {
        for query in ["", "?page=6", "?page=-1", "?page=abc", "?other=2"] {
            let session = Session::resume(&QueryParams::parse(query), 6);
            assert_eq!(session.page_index(), 0, "query {query:?}");
        }
    }
}
