//! Site state shared by the public pages and the admin console.
//!
//! [`SiteContext`] is built once at startup and owns both stores plus the
//! admin gate. The public site and the console borrow it through
//! [`PublicSite`] and [`AdminConsole`].

use std::sync::Arc;

use becore_store::{ConfigStore, KeyValueStore, MemoryStore, MessageStore, SqliteStore};

use crate::admin::AdminConsole;
use crate::auth::{AdminGate, Authenticator, StaticCredentials};
use crate::error::Result;
use crate::public::PublicSite;
use crate::settings::ClientSettings;

pub struct SiteContext {
    storage: Arc<dyn KeyValueStore>,
    config: ConfigStore,
    inbox: MessageStore,
    gate: AdminGate,
}

impl SiteContext {
    /// Open the storage named by `settings` and load both stores from it.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        let storage = open_storage(settings)?;
        Ok(Self::with_storage(
            storage,
            Box::new(StaticCredentials::from_settings(settings)),
        ))
    }

    /// Build a context over an existing backend.
    pub fn with_storage(
        storage: Arc<dyn KeyValueStore>,
        authenticator: Box<dyn Authenticator>,
    ) -> Self {
        let config = ConfigStore::load(storage.clone());
        let inbox = MessageStore::load(storage.clone());
        tracing::info!(messages = inbox.len(), "site state loaded");

        Self {
            storage,
            config,
            inbox,
            gate: AdminGate::new(authenticator),
        }
    }

    /// The backend both stores write to.
    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        self.storage.clone()
    }

    pub fn public(&mut self) -> PublicSite<'_> {
        PublicSite::new(&self.config, &mut self.inbox)
    }

    pub fn admin(&mut self) -> AdminConsole<'_> {
        AdminConsole::new(&mut self.gate, &mut self.config, &mut self.inbox)
    }
}

fn open_storage(settings: &ClientSettings) -> Result<Arc<dyn KeyValueStore>> {
    if settings.in_memory {
        tracing::info!(quota = settings.storage_quota, "using in-memory storage");
        return Ok(Arc::new(MemoryStore::with_quota(settings.storage_quota)));
    }

    let store = match &settings.db_path {
        Some(path) => SqliteStore::open(path)?,
        None => SqliteStore::open_default()?,
    };
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_settings_use_memory_backend() {
        let settings = ClientSettings {
            in_memory: true,
            storage_quota: 16,
            ..ClientSettings::default()
        };
        let ctx = SiteContext::from_settings(&settings).unwrap();

        // 20 bytes against a 16-byte quota.
        assert!(ctx.storage().set("messages", "[0123456789]").is_err());
    }

    #[test]
    fn sqlite_settings_open_the_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.db");
        let settings = ClientSettings {
            db_path: Some(path.clone()),
            ..ClientSettings::default()
        };

        let ctx = SiteContext::from_settings(&settings).unwrap();
        ctx.storage().set("probe", "1").unwrap();
        assert!(path.exists());
    }
}
