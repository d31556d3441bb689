use tracing_subscriber::{fmt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set. Calling this more than once is
/// harmless; only the first call installs a subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("becore_client=debug,becore_store=info,warn"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("tracing initialised");
    }
}
