//! Browse session
//!
//! Pagination cursor for the location-area listing. Owned by the REPL state
//! and passed to each browse command.

use crate::models::LocationAreaPage;

/// Tracks the last location-area page shown to the user.
#[derive(Debug, Clone, Default)]
pub struct BrowseSession {
    current: Option<LocationAreaPage>,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL to load for `mapf`.
    ///
    /// Before any page was shown this is the first page. Returns `None` on
    /// the last page.
    pub fn next_url(&self, first_page_url: &str) -> Option<String> {
        match &self.current {
            None => Some(first_page_url.to_string()),
            Some(page) => page.next.clone(),
        }
    }

    /// URL to load for `mapb`.
    ///
    /// Before any page was shown this is the first page. Returns `None` on
    /// the first page.
    pub fn previous_url(&self, first_page_url: &str) -> Option<String> {
        match &self.current {
            None => Some(first_page_url.to_string()),
            Some(page) => page.previous.clone(),
        }
    }

    /// Records `page` as the one now on screen.
    pub fn advance(&mut self, page: LocationAreaPage) {
        self.current = Some(page);
    }

    pub fn current(&self) -> Option<&LocationAreaPage> {
        self.current.as_ref()
    }
}
