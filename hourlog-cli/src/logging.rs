use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Variable holding the log filter, e.g. `HOURLOG_LOG=debug`.
pub const LOG_ENV: &str = "HOURLOG_LOG";

/// Sends library and CLI logs to stderr so that stdout stays clean for
/// reports and `--analyze` JSON.
pub fn enable_logging() -> Result<()> {
    let level = std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "hourlog_core={level},hourlog={level}"
        )))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("initializing logging: {e}"))
}
