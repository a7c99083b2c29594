//! Session
//!
//! One page session: the store, the form and the list renderer, owned
//! together and dropped together. Components reach the store only through
//! the session, never through shared global state.

use crate::bootstrap::{BootstrapLoader, BootstrapOutcome};
use crate::form::{SubmissionForm, SubmitEvent, SubmitOutcome};
use crate::render::{render_html, DisplayFragment, ListRenderer, RenderStats};
use crate::visitors::VisitorStore;

/// A single-user, in-memory guestbook session
#[derive(Debug, Default)]
pub struct Session {
    store: VisitorStore,
    form: SubmissionForm,
    list: ListRenderer,
}

impl Session {
    /// An empty session
    pub fn new() -> Self {
        Self::with_store(VisitorStore::new())
    }

    /// A session around an existing store
    pub fn with_store(store: VisitorStore) -> Self {
        Self {
            store,
            form: SubmissionForm::new(),
            list: ListRenderer::new(),
        }
    }

    /// Seed the session from `loader`; failures leave it empty but usable
    pub async fn bootstrap(&mut self, loader: &BootstrapLoader) -> BootstrapOutcome {
        loader.load(&mut self.store).await
    }

    pub fn store(&self) -> &VisitorStore {
        &self.store
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    /// Mutable access to the form's input fields
    pub fn form_mut(&mut self) -> &mut SubmissionForm {
        &mut self.form
    }

    /// Submit the form against this session's store
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut event = SubmitEvent::new();
        self.form.submit(&mut event, &mut self.store)
    }

    /// Render the current list
    pub fn render(&mut self) -> Vec<DisplayFragment> {
        self.list.render(self.store.entries())
    }

    /// Render the current list as markup
    pub fn render_html(&mut self) -> String {
        render_html(&self.render())
    }

    /// Work done by the last render
    pub fn render_stats(&self) -> RenderStats {
        self.list.last_stats()
    }
}
