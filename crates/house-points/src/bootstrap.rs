use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` value to an [`EnvFilter`] directive.
///
/// Unrecognised values are passed through, so `"trace"` or a full
/// directive such as `"points_data=debug"` still work.
pub fn log_directive(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber, writing to stderr.
///
/// Falls back to `"info"` if the level string is not a valid directive.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(log_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directive_maps_cli_levels() {
        assert_eq!(log_directive("DEBUG"), "debug");
        assert_eq!(log_directive("INFO"), "info");
        assert_eq!(log_directive("WARNING"), "warn");
        assert_eq!(log_directive("error"), "error");
    }

    #[test]
    fn test_log_directive_passes_through_unknown() {
        assert_eq!(log_directive("points_data=trace"), "points_data=trace");
    }

    #[test]
    fn test_setup_logging_only_once() {
        assert!(setup_logging("INFO").is_ok());
        assert!(setup_logging("DEBUG").is_err());
    }
}
