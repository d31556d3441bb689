//! The admin console: content editing and the inbox, behind [`AdminGate`].
//!
//! Every operation other than login/logout fails with
//! [`ClientError::NotAuthenticated`](crate::error::ClientError) while the
//! gate is closed.

use becore_shared::{Message, SiteConfig};
use becore_store::{ConfigStore, InboxStats, MessageStore};
use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::auth::AdminGate;
use crate::error::Result;

pub struct AdminConsole<'a> {
    gate: &'a mut AdminGate,
    config: &'a mut ConfigStore,
    inbox: &'a mut MessageStore,
}

impl<'a> AdminConsole<'a> {
    pub(crate) fn new(
        gate: &'a mut AdminGate,
        config: &'a mut ConfigStore,
        inbox: &'a mut MessageStore,
    ) -> Self {
        Self { gate, config, inbox }
    }

    // -- Session --

    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.gate.login(username, password)
    }

    pub fn logout(&mut self) {
        self.gate.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    // -- Content --

    /// The working copy, including unsaved edits.
    pub fn draft(&self) -> Result<&SiteConfig> {
        self.gate.ensure()?;
        Ok(self.config.current())
    }

    pub fn update(&mut self, path: &str, value: Value) -> Result<&SiteConfig> {
        self.gate.ensure()?;
        Ok(self.config.update(path, value)?)
    }

    pub fn append_to_list(&mut self, path: &str, item: Value) -> Result<&SiteConfig> {
        self.gate.ensure()?;
        Ok(self.config.append_to_list(path, item)?)
    }

    pub fn remove_from_list(&mut self, path: &str, index: usize) -> Result<&SiteConfig> {
        self.gate.ensure()?;
        Ok(self.config.remove_from_list(path, index)?)
    }

    /// Persist and publish the draft.
    pub fn save(&mut self) -> Result<()> {
        self.gate.ensure()?;
        Ok(self.config.save()?)
    }

    pub fn is_dirty(&self) -> Result<bool> {
        self.gate.ensure()?;
        Ok(self.config.is_dirty())
    }

    pub fn discard_changes(&mut self) -> Result<()> {
        self.gate.ensure()?;
        self.config.discard_changes();
        Ok(())
    }

    pub fn reset_to_default(&mut self) -> Result<()> {
        self.gate.ensure()?;
        self.config.reset_to_default();
        Ok(())
    }

    // -- Inbox --

    pub fn messages(&self) -> Result<&[Message]> {
        self.gate.ensure()?;
        Ok(self.inbox.messages())
    }

    pub fn message(&self, id: &str) -> Result<Option<&Message>> {
        self.gate.ensure()?;
        Ok(self.inbox.get(id))
    }

    pub fn mark_as_read(&mut self, id: &str) -> Result<bool> {
        self.gate.ensure()?;
        Ok(self.inbox.mark_as_read(id)?)
    }

    pub fn mark_as_replied(&mut self, id: &str) -> Result<bool> {
        self.gate.ensure()?;
        Ok(self.inbox.mark_as_replied(id)?)
    }

    pub fn delete_message(&mut self, id: &str) -> Result<bool> {
        self.gate.ensure()?;
        Ok(self.inbox.delete_message(id)?)
    }

    pub fn unread_count(&self) -> Result<usize> {
        self.gate.ensure()?;
        Ok(self.inbox.unread_count())
    }

    pub fn search(&self, term: &str) -> Result<Vec<&Message>> {
        self.gate.ensure()?;
        Ok(self.inbox.search(term))
    }

    /// Dashboard totals, with "this month" relative to today.
    pub fn stats(&self) -> Result<InboxStats> {
        self.stats_on(Local::now().date_naive())
    }

    pub fn stats_on(&self, today: NaiveDate) -> Result<InboxStats> {
        self.gate.ensure()?;
        Ok(self.inbox.stats(today))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use becore_store::MemoryStore;
    use serde_json::json;

    use crate::auth::StaticCredentials;
    use crate::error::ClientError;
    use crate::state::SiteContext;

    fn context() -> SiteContext {
        SiteContext::with_storage(
            Arc::new(MemoryStore::new()),
            Box::new(StaticCredentials::new("admin", "admin123")),
        )
    }

    #[test]
    fn closed_gate_refuses_everything() {
        let mut ctx = context();
        let mut admin = ctx.admin();

        assert!(matches!(admin.draft(), Err(ClientError::NotAuthenticated)));
        assert!(matches!(
            admin.update("hero.title", json!("x")),
            Err(ClientError::NotAuthenticated)
        ));
        assert!(matches!(admin.save(), Err(ClientError::NotAuthenticated)));
        assert!(matches!(admin.messages(), Err(ClientError::NotAuthenticated)));
        assert!(matches!(
            admin.delete_message("any"),
            Err(ClientError::NotAuthenticated)
        ));
        assert!(matches!(admin.stats(), Err(ClientError::NotAuthenticated)));
    }

    #[test]
    fn logout_closes_the_gate_again() {
        let mut ctx = context();
        let mut admin = ctx.admin();
        admin.login("admin", "admin123").unwrap();
        assert!(admin.unread_count().is_ok());

        admin.logout();
        assert!(!admin.is_authenticated());
        assert!(admin.unread_count().is_err());
    }

    #[test]
    fn session_survives_between_console_borrows() {
        let mut ctx = context();
        ctx.admin().login("admin", "admin123").unwrap();
        assert!(ctx.admin().is_authenticated());
    }

    #[test]
    fn edit_errors_are_reported() {
        let mut ctx = context();
        let mut admin = ctx.admin();
        admin.login("admin", "admin123").unwrap();

        assert!(matches!(
            admin.update("hero.noSuchField", json!("x")),
            Err(ClientError::Edit(_))
        ));
        assert!(!admin.is_dirty().unwrap());
    }

    #[test]
    fn save_publishes_to_the_public_site() {
        let mut ctx = context();
        {
            let mut admin = ctx.admin();
            admin.login("admin", "admin123").unwrap();
            admin.update("hero.title", json!("Published")).unwrap();
            admin.save().unwrap();
            assert!(!admin.is_dirty().unwrap());
        }
        assert_eq!(ctx.public().site().hero.title, "Published");
    }
}
