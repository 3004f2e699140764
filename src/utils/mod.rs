pub mod validation;

use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

pub use validation::{ensure_positive, parse_amount, parse_period};

const DEFAULT_DIR_NAME: &str = ".finance_tracker";
const CONFIG_FILE: &str = "config.json";
const SNAPSHOT_FILE: &str = "finance_data.txt";
const DEFAULT_LOG_DIRECTIVE: &str = "finance_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, logging to stderr so the
/// interactive console stays readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Returns the application data directory, defaulting to `~/.finance_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANCE_TRACKER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default destination for appended snapshots.
pub fn snapshot_file_in(base: &std::path::Path) -> PathBuf {
    base.join(SNAPSHOT_FILE)
}

pub fn ensure_dir(path: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
