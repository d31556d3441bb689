//! What a visitor can reach: the published site and the contact form.

use std::sync::Arc;

use becore_shared::{Message, NewMessage, SiteConfig};
use becore_store::{ConfigStore, MessageStore};
use tokio::sync::watch;

use crate::error::Result;

pub struct PublicSite<'a> {
    config: &'a ConfigStore,
    inbox: &'a mut MessageStore,
}

impl<'a> PublicSite<'a> {
    pub(crate) fn new(config: &'a ConfigStore, inbox: &'a mut MessageStore) -> Self {
        Self { config, inbox }
    }

    /// The last saved document. Unsaved admin edits never show here.
    pub fn site(&self) -> Arc<SiteConfig> {
        self.config.published()
    }

    /// Re-render whenever the admin saves.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SiteConfig>> {
        self.config.subscribe()
    }

    /// Validate a contact form submission and file it in the inbox.
    pub fn submit_contact(&mut self, input: NewMessage) -> Result<Message> {
        if let Err(e) = input.validate() {
            tracing::debug!(error = %e, "contact submission rejected");
            return Err(e.into());
        }
        Ok(self.inbox.add_message(input)?)
    }
}
