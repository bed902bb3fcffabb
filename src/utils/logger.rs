use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber writing to stdout
///
/// The level is read from `LOGLEVEL` (`ERROR`, `WARN`, `INFO`, `DEBUG`,
/// `TRACE`), defaulting to `INFO`. Calling it more than once is harmless.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL")
            .ok()
            .and_then(|l| l.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .with_thread_ids(false)
            .with_line_number(true)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global subscriber already set");
        }
    });
}
