use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for the browser shell
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Window operation failed: {0}")]
    Window(String),
}

impl ShellError {
    /// Short message without the error chain, for the window-failure log line.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::Io { path, .. } => format!("Could not read {}", path),
            Self::Window(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use browser_shell::error::ResultExt;
///
/// let handle = cx.open_window(options, build).log_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_user_message_is_bare() {
        let err = ShellError::Window("failed to open window-3: no display".into());
        assert_eq!(err.user_message(), "failed to open window-3: no display");
        assert!(err.to_string().starts_with("Window operation failed"));
    }

    #[test]
    fn test_user_message() {
        let err = ShellError::Io {
            path: "/tmp/config.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.user_message(), "Could not read /tmp/config.json");
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_log_err_passes_ok_through() {
        let ok: std::result::Result<u32, ShellError> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));

        let err: std::result::Result<u32, ShellError> = Err(ShellError::Window("x".into()));
        assert_eq!(err.warn_on_err(), None);
    }
}
