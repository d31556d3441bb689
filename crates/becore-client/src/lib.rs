//! # becore-client
//!
//! Application layer of the BeCore site. [`SiteContext`] wires storage, the
//! site document store, the inbox and the admin gate together; the public
//! pages use [`PublicSite`] and the console uses [`AdminConsole`].

pub mod admin;
pub mod auth;
pub mod error;
pub mod public;
pub mod settings;
pub mod state;
pub mod telemetry;

pub use admin::AdminConsole;
pub use auth::{AdminGate, Authenticator, StaticCredentials};
pub use error::{ClientError, Result};
pub use public::PublicSite;
pub use settings::ClientSettings;
pub use state::SiteContext;

/// Load settings from the environment, install logging and open the site.
pub fn start() -> Result<SiteContext> {
    telemetry::init();
    let settings = ClientSettings::from_env();
    tracing::info!(
        in_memory = settings.in_memory,
        "Starting {} site",
        becore_shared::constants::APP_NAME
    );
    SiteContext::from_settings(&settings)
}
