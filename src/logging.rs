//! Structured JSONL logging and human-readable stderr output.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (~/.browser-shell/logs/browser-shell.jsonl) - structured, one event per line
//! - **Pretty to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use browser_shell::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "app_start", "Application started");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "browser-shell.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// If the log file cannot be opened, only stderr output is installed.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_path();

    eprintln!("========================================");
    eprintln!("[BROWSER-SHELL] JSONL log: {}", log_path.display());
    eprintln!("[BROWSER-SHELL] Pretty logs: stderr");
    eprintln!("========================================");

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            None
        }
    };

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gpui=warn"));

    // Pretty layer for stderr
    // Generic over the subscriber so both branches below can stack it
    fn pretty_layer<S>() -> fmt::Layer<
        S,
        fmt::format::DefaultFields,
        fmt::format::Format<fmt::format::Compact>,
        fn() -> std::io::Stderr,
    > {
        fmt::layer()
            .with_writer(std::io::stderr as fn() -> std::io::Stderr)
            .with_ansi(true)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .compact()
    }

    let file_guard = match file {
        Some(file) => {
            // Non-blocking writer so a slow disk never stalls the UI thread
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);

            let json_layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(json_layer)
                .with(pretty_layer())
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(pretty_layer())
                .init();
            None
        }
    };

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Application logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Get the log directory path (~/.browser-shell/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".browser-shell").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("browser-shell-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

// =============================================================================
// Category helpers
// =============================================================================

/// Log a message under a category.
///
/// Prefer tracing macros directly for structured fields:
/// ```rust,ignore
/// tracing::info!(category = "WINDOW_MGR", window_id = 3, "Window opened");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::info!(category = category, "{}", message);
}

/// Debug-only logging - compiled out in release builds
#[cfg(debug_assertions)]
pub fn log_debug(category: &str, message: &str) {
    tracing::debug!(category = category, "{}", message);
}

#[cfg(not(debug_assertions))]
pub fn log_debug(_category: &str, _message: &str) {
    // No-op in release builds
}

/// Log an error with structured fields and context
pub fn log_error(category: &str, error: &str, context: Option<&str>) {
    let msg = match context {
        Some(ctx) => format!("{}: {} (context: {})", category, error, ctx),
        None => format!("{}: {}", category, error),
    };
    tracing::error!(
        event_type = "error",
        category = category,
        error_message = error,
        context = context,
        "{}",
        msg
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_file_name() {
        assert!(log_path().ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_log_path_inside_log_dir() {
        assert_eq!(log_path().parent(), Some(get_log_dir().as_path()));
    }

    #[test]
    fn test_category_helpers_without_subscriber() {
        log("TEST", "no subscriber installed");
        log_error("TEST", "boom", Some("window-1"));
        log_debug("TEST", "debug line");
    }
}
