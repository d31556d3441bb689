//! In-process [`KeyValueStore`] with an optional byte quota.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::backend::KeyValueStore;
use crate::error::{Result, StoreError};

/// Keys and values held in a map.
///
/// With a quota, a write that would push the total size of keys plus values
/// over the limit fails with [`StoreError::QuotaExceeded`] and leaves the
/// previous value in place, the way browser storage behaves when full.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
    read_only: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Make every later write fail with [`StoreError::Unavailable`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("Lock poisoned: {e}")))
    }
}

fn used(entries: &HashMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("storage is read-only".into()));
        }

        let mut entries = self.lock()?;

        if let Some(quota) = self.quota {
            let previous = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let needed = used(&*entries) - previous + key.len() + value.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_counts_keys_and_values() {
        let store = MemoryStore::with_quota(10);
        // Exactly at the quota.
        store.set("ab", "12345678").unwrap();

        // Overwriting with a same-sized value still fits.
        store.set("ab", "87654321").unwrap();

        let err = store.set("c", "x").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { needed: 12, quota: 10 }));
        assert_eq!(store.get("ab").unwrap().as_deref(), Some("87654321"));
    }

    #[test]
    fn read_only_rejects_writes_but_serves_reads() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.set_read_only(true);

        assert!(matches!(store.set("k", "w"), Err(StoreError::Unavailable(_))));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set_read_only(false);
        store.set("k", "w").unwrap();
    }
}
