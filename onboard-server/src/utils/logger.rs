//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Log file name prefix (daily rotation appends the date)
const LOG_FILE_PREFIX: &str = "onboard-server";

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. When `log_dir` exists,
/// output goes to a daily rolling file in it instead of stdout.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let filter = build_filter(log_level.unwrap_or("info"));
    let json = json.unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            let builder = builder.with_ansi(false).with_writer(file_appender);
            let result = if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            if result.is_err() {
                tracing::debug!("Logger already initialized");
            }
            return;
        }
        eprintln!("LOG_DIR {dir} is not a directory, logging to stdout");
    }

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}

/// `RUST_LOG` if set and valid, otherwise `default_level`
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // Does not panic on garbage input
        let _ = build_filter("not a level [");
    }

    #[test]
    fn test_init_with_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        init_logger_with_file(Some("debug"), Some(false), Some(path));
        // Second call must not panic
        init_logger_with_file(Some("debug"), Some(true), Some(path));
    }
}
