/// Application name
pub const APP_NAME: &str = "BeCore";

/// Storage key of the persisted site document
pub const SITE_CONFIG_KEY: &str = "siteConfig";

/// Storage key of the persisted inbox, newest first
pub const MESSAGES_KEY: &str = "messages";

/// Storage quota of the in-memory backend (5 MiB, the usual browser limit)
pub const DEFAULT_STORAGE_QUOTA: usize = 5 * 1024 * 1024;

/// Placeholder admin credentials. Not a security boundary.
pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
