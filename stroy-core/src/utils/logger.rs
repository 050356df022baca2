//! Logging setup
//!
//! `RUST_LOG` takes precedence over the configured level. Output goes to
//! stderr, or to daily rolling `stroy.*` files when the log directory exists.

use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger at `info`, console only
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let file_dir = match log_dir {
        Some(dir) if Path::new(dir).is_dir() => Some(dir),
        Some(dir) => {
            eprintln!("Log directory {dir} does not exist, logging to console");
            None
        }
        None => None,
    };

    let writer = match file_dir {
        Some(dir) => BoxMakeWriter::new(tracing_appender::rolling::daily(dir, "stroy")),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(level_filter(log_level.unwrap_or("info")))
        .with_writer(writer)
        .with_ansi(file_dir.is_none())
        .with_target(false)
        .try_init();
}

/// `RUST_LOG` if set and valid, else `level`, else `info`
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        let dir = tempfile::TempDir::new().unwrap();
        init_logger_with_file(Some("debug"), dir.path().to_str());
        init_logger_with_file(Some("warn"), Some("/definitely/not/a/dir"));
        init_logger();
        tracing::info!("still alive");
    }
}
