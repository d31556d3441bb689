//! Client settings loaded from environment variables.
//!
//! Every setting has a default so the site starts with zero configuration.

use std::path::PathBuf;

use becore_shared::constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER, DEFAULT_STORAGE_QUOTA};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// SQLite file holding the site document and the inbox.
    /// Env: `BECORE_DB_PATH`
    /// Default: `becore.db` in the platform data directory.
    pub db_path: Option<PathBuf>,

    /// Keep everything in memory instead of SQLite. Nothing survives exit.
    /// Env: `BECORE_IN_MEMORY` (true/false)
    /// Default: `false`
    pub in_memory: bool,

    /// Byte quota of the in-memory backend.
    /// Env: `BECORE_STORAGE_QUOTA`
    /// Default: 5 MiB
    pub storage_quota: usize,

    /// Env: `BECORE_ADMIN_USER`
    /// Default: `admin`
    pub admin_user: String,

    /// Env: `BECORE_ADMIN_PASSWORD`
    /// Default: `admin123`
    pub admin_password: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            db_path: None,
            in_memory: false,
            storage_quota: DEFAULT_STORAGE_QUOTA,
            admin_user: DEFAULT_ADMIN_USER.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl ClientSettings {
    /// Load settings from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(path) = lookup("BECORE_DB_PATH") {
            if !path.trim().is_empty() {
                settings.db_path = Some(PathBuf::from(path));
            }
        }

        if let Some(value) = lookup("BECORE_IN_MEMORY") {
            match parse_bool(&value) {
                Some(b) => settings.in_memory = b,
                None => tracing::warn!(value = %value, "Invalid BECORE_IN_MEMORY, using default"),
            }
        }

        if let Some(value) = lookup("BECORE_STORAGE_QUOTA") {
            match value.trim().parse::<usize>() {
                Ok(quota) if quota > 0 => settings.storage_quota = quota,
                _ => tracing::warn!(value = %value, "Invalid BECORE_STORAGE_QUOTA, using default"),
            }
        }

        if let Some(user) = lookup("BECORE_ADMIN_USER") {
            settings.admin_user = user;
        }

        if let Some(password) = lookup("BECORE_ADMIN_PASSWORD") {
            settings.admin_password = password;
        }

        settings
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
