//! # becore-store
//!
//! Persistence for the BeCore site: the editable site document and the
//! contact inbox.
//!
//! Both stores sit on a [`KeyValueStore`], either the SQLite-backed
//! [`SqliteStore`] or the in-process [`MemoryStore`]. The site document is
//! only written on an explicit save; the inbox writes through on every
//! change.

pub mod backend;
pub mod database;
pub mod kv;
pub mod memory;
pub mod messages;
pub mod migrations;
pub mod site_config;

mod error;

pub use backend::{read_json, write_json, KeyValueStore, SqliteStore};
pub use database::Database;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use messages::{InboxStats, MessageStore};
pub use site_config::ConfigStore;
