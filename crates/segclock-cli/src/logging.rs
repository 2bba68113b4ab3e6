use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr so they never interleave with the display line on
/// stdout. `RUST_LOG` overrides the default `warn` level.
///
/// # Errors
/// Returns error if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;
    Ok(())
}
