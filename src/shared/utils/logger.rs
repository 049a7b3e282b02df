use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the logging system.
/// Safe to call more than once; only the first call takes effect.
pub fn init_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,aniview=debug,reqwest=warn,tokio=warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();

        tracing::info!("Logging system initialized");
    });
}
