//! The site document store.
//!
//! [`ConfigStore`] keeps two versions of the document:
//!
//! - the **published** document, what the public site renders. It only
//!   changes when a save succeeds, and every change is broadcast on a
//!   `tokio::sync::watch` channel;
//! - the **draft**, the admin's edit buffer. Path edits replace the draft
//!   with a new document that shares every untouched section with the old
//!   one.
//!
//! Nothing is written to storage until [`ConfigStore::save`].

use std::sync::Arc;

use becore_shared::constants::SITE_CONFIG_KEY;
use becore_shared::{EditError, SiteConfig};
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::{read_json, write_json, KeyValueStore};
use crate::error::Result;

pub struct ConfigStore {
    storage: Arc<dyn KeyValueStore>,
    draft: SiteConfig,
    published: watch::Sender<Arc<SiteConfig>>,
}

impl ConfigStore {
    /// Load the persisted document (or the default) and publish it.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let document = Self::load_document(storage.as_ref());
        let (published, _) = watch::channel(Arc::new(document.clone()));
        Self {
            storage,
            draft: document,
            published,
        }
    }

    /// Read the persisted document, completing it from the default.
    ///
    /// Never fails: a missing, unreadable or unusable document yields
    /// [`SiteConfig::default`].
    pub fn load_document(storage: &dyn KeyValueStore) -> SiteConfig {
        let Some(persisted) = read_json::<Value>(storage, SITE_CONFIG_KEY) else {
            return SiteConfig::default();
        };

        match SiteConfig::merged_over_default(persisted) {
            Ok(document) => {
                debug!("loaded persisted site config");
                document
            }
            Err(e) => {
                warn!(error = %e, "persisted site config does not fit the schema, using default");
                SiteConfig::default()
            }
        }
    }

    /// The draft, including edits that have not been saved.
    pub fn current(&self) -> &SiteConfig {
        &self.draft
    }

    /// The document the public site should render.
    pub fn published(&self) -> Arc<SiteConfig> {
        self.published.borrow().clone()
    }

    /// Receive every document published by a later [`save`](Self::save).
    pub fn subscribe(&self) -> watch::Receiver<Arc<SiteConfig>> {
        self.published.subscribe()
    }

    /// Replace the value at `path` in the draft.
    pub fn update(&mut self, path: &str, value: Value) -> std::result::Result<&SiteConfig, EditError> {
        self.draft = self.draft.with_value(path, value)?;
        Ok(&self.draft)
    }

    /// Append `item` to the list at `path` in the draft.
    pub fn append_to_list(
        &mut self,
        path: &str,
        item: Value,
    ) -> std::result::Result<&SiteConfig, EditError> {
        self.draft = self.draft.with_appended(path, item)?;
        Ok(&self.draft)
    }

    /// Remove element `index` of the list at `path` in the draft.
    pub fn remove_from_list(
        &mut self,
        path: &str,
        index: usize,
    ) -> std::result::Result<&SiteConfig, EditError> {
        self.draft = self.draft.with_removed(path, index)?;
        Ok(&self.draft)
    }

    /// Whether the draft differs from the published document.
    pub fn is_dirty(&self) -> bool {
        self.draft != **self.published.borrow()
    }

    /// Throw the draft away and start again from the published document.
    pub fn discard_changes(&mut self) {
        self.draft = (**self.published.borrow()).clone();
    }

    /// Replace the draft with the built-in default. Takes effect on save.
    pub fn reset_to_default(&mut self) {
        self.draft = SiteConfig::default();
    }

    /// Re-read storage, replacing both the draft and the published document.
    ///
    /// Picks up a save made through another store over the same storage.
    pub fn reload(&mut self) {
        let document = Self::load_document(self.storage.as_ref());
        self.draft = document.clone();
        self.published.send_replace(Arc::new(document));
    }

    /// Persist the draft and publish it.
    ///
    /// On failure the draft is kept so the caller can retry, and the
    /// published document does not change.
    pub fn save(&mut self) -> Result<()> {
        write_json(self.storage.as_ref(), SITE_CONFIG_KEY, &self.draft)?;
        self.published.send_replace(Arc::new(self.draft.clone()));
        info!("site config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde_json::json;

    fn memory() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn missing_or_corrupt_document_loads_default() {
        let storage = memory();
        assert_eq!(ConfigStore::load_document(storage.as_ref()), SiteConfig::default());

        storage.set(SITE_CONFIG_KEY, "{ definitely not json").unwrap();
        assert_eq!(ConfigStore::load_document(storage.as_ref()), SiteConfig::default());

        storage.set(SITE_CONFIG_KEY, "{\"hero\": 7}").unwrap();
        assert_eq!(ConfigStore::load_document(storage.as_ref()), SiteConfig::default());
    }

    #[test]
    fn partial_document_keeps_default_fields() {
        let storage = memory();
        storage
            .set(SITE_CONFIG_KEY, r#"{"tagline":"Saved tagline","hero":{"badges":[]}}"#)
            .unwrap();

        let store = ConfigStore::load(storage);
        let doc = store.current();
        assert_eq!(doc.tagline, "Saved tagline");
        assert!(doc.hero.badges.is_empty());
        assert_eq!(doc.hero.title, SiteConfig::default().hero.title);
    }

    #[test]
    fn edits_stay_in_draft_until_saved() {
        let storage = memory();
        let mut store = ConfigStore::load(storage.clone());
        let mut rx = store.subscribe();

        store.update("hero.title", json!("Draft title")).unwrap();
        assert!(store.is_dirty());
        assert_eq!(store.current().hero.title, "Draft title");
        assert_ne!(store.published().hero.title, "Draft title");
        assert!(!rx.has_changed().unwrap());
        assert_eq!(storage.get(SITE_CONFIG_KEY).unwrap(), None);

        store.save().unwrap();
        assert!(!store.is_dirty());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().hero.title, "Draft title");

        let fresh = ConfigStore::load(storage);
        assert_eq!(fresh.current().hero.title, "Draft title");
    }

    #[test]
    fn failed_save_keeps_draft_and_published() {
        let storage = memory();
        let mut store = ConfigStore::load(storage.clone());
        let mut rx = store.subscribe();

        store.update("footer.copyright", json!("© 2025")).unwrap();
        storage.set_read_only(true);

        assert!(store.save().is_err());
        assert!(store.is_dirty());
        assert_eq!(store.current().footer.copyright, "© 2025");
        assert_ne!(store.published().footer.copyright, "© 2025");
        assert!(!rx.has_changed().unwrap());

        storage.set_read_only(false);
        store.save().unwrap();
        assert_eq!(rx.borrow_and_update().footer.copyright, "© 2025");
    }

    #[test]
    fn quota_failure_is_reported() {
        let storage = Arc::new(MemoryStore::with_quota(64));
        let mut store = ConfigStore::load(storage);
        let err = store.save().unwrap_err();
        assert!(matches!(err, crate::StoreError::QuotaExceeded { .. }));
    }

    #[test]
    fn list_edits_and_discard() {
        let mut store = ConfigStore::load(memory());
        let highlights = store.current().summary.highlights.len();

        store.append_to_list("summary.highlights", json!("New highlight")).unwrap();
        store.remove_from_list("summary.highlights", 0).unwrap();
        assert_eq!(store.current().summary.highlights.len(), highlights);
        assert_eq!(
            store.current().summary.highlights.last().map(String::as_str),
            Some("New highlight")
        );

        store.discard_changes();
        assert!(!store.is_dirty());
        assert_eq!(*store.current(), *store.published());
    }

    #[test]
    fn bad_edit_leaves_draft_alone() {
        let mut store = ConfigStore::load(memory());
        assert!(store.update("hero.ctaButtons[7].text", json!("x")).is_err());
        assert!(!store.is_dirty());
    }

    #[test]
    fn reset_to_default_needs_save() {
        let storage = memory();
        let mut store = ConfigStore::load(storage.clone());
        store.update("siteName", json!("Renamed")).unwrap();
        store.save().unwrap();

        store.reset_to_default();
        assert!(store.is_dirty());
        assert_eq!(store.published().site_name, "Renamed");

        store.save().unwrap();
        assert_eq!(ConfigStore::load_document(storage.as_ref()), SiteConfig::default());
    }

    #[test]
    fn last_save_wins_across_stores() {
        let storage = memory();
        let mut first = ConfigStore::load(storage.clone());
        let mut second = ConfigStore::load(storage.clone());

        first.update("siteName", json!("First")).unwrap();
        second.update("siteName", json!("Second")).unwrap();
        first.save().unwrap();
        second.save().unwrap();

        // `first` does not see the other save until it reloads.
        assert_eq!(first.published().site_name, "First");
        first.reload();
        assert_eq!(first.published().site_name, "Second");
        assert_eq!(ConfigStore::load_document(storage.as_ref()).site_name, "Second");
    }
}
