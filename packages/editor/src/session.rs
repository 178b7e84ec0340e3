//! # Edit Session
//!
//! Page-level editing state: the content store plus the edit-mode flag the
//! floating edit/save/reset controls toggle. Commits are accepted only while
//! edit mode is on, which is how every editable field on the page gets its
//! mode from one place.

use crate::{ContentStore, Mutation, Storage, StoreError};
use renobook_content::SiteContent;

/// One operator's editing session over the page content
pub struct EditSession<S: Storage> {
    store: ContentStore<S>,
    editing: bool,
}

impl<S: Storage> EditSession<S> {
    pub fn new(store: ContentStore<S>) -> Self {
        Self {
            store,
            editing: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Flip edit mode; returns the new state
    pub fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    pub fn content(&self) -> &SiteContent {
        self.store.content()
    }

    pub fn store(&self) -> &ContentStore<S> {
        &self.store
    }

    /// Commit a completed edit. Ignored while not in edit mode.
    pub fn commit(&mut self, mutation: &Mutation) -> Result<bool, StoreError> {
        if !self.editing {
            return Ok(false);
        }
        self.store.apply(mutation)
    }

    /// Revert to the built-in defaults and drop the persisted snapshot
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.store.reset()
    }
}

/// Newsletter signup form state. Delivery is out of scope: submit just
/// clears the input.
#[derive(Debug, Default)]
pub struct NewsletterSignup {
    email: String,
}

impl NewsletterSignup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn submit(&mut self) {
        tracing::debug!(email = %self.email, "Newsletter signup");
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeroField, MemoryStorage};

    #[test]
    fn test_session_starts_read_only() {
        let session = EditSession::new(ContentStore::load(MemoryStorage::new()));
        assert!(!session.is_editing());
    }

    #[test]
    fn test_commit_ignored_outside_edit_mode() {
        let mut session = EditSession::new(ContentStore::load(MemoryStorage::new()));

        let mutation = Mutation::SetHeroField {
            field: HeroField::Subtitle,
            value: "Notebooks".to_string(),
        };
        assert!(!session.commit(&mutation).unwrap());
        assert_eq!(session.content().hero.subtitle, "Laptops");

        session.toggle_editing();
        assert!(session.commit(&mutation).unwrap());
        assert_eq!(session.content().hero.subtitle, "Notebooks");
    }

    #[test]
    fn test_newsletter_submit_clears_email() {
        let mut signup = NewsletterSignup::new();
        signup.input("hello@renobook.com");
        signup.submit();
        assert_eq!(signup.email(), "");
    }
}
