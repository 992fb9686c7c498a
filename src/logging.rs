use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "TOA_LOGIN_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `TOA_LOGIN_LOG` names a file path; the TUI owns
/// stdout. The file gets a `{path}.{timestamp}.{pid}` suffix so concurrent
/// instances do not clobber each other. `RUST_LOG` sets the filter
/// (default `info`).
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
