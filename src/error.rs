//! Central error types for the desktop shell.
//!
//! All errors implement `Serialize` for Tauri IPC compatibility.

use serde::Serialize;
use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Host framework (window, tray, menu) failure
    #[error("Runtime error: {0}")]
    Tauri(#[from] tauri::Error),

    /// Global shortcut registration failed
    #[error("Shortcut error: {0}")]
    Shortcut(String),

    /// Desktop integration file operation failed
    #[error("Desktop integration error: {0}")]
    Integration(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Implement Serialize for Tauri IPC compatibility.
/// Tauri requires errors to be serializable to send to the frontend.
impl Serialize for ShellError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Type alias for Results using ShellError.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::Shortcut("already registered".to_string());
        assert_eq!(err.to_string(), "Shortcut error: already registered");
    }

    #[test]
    fn test_error_serialization() {
        let err = ShellError::Other("tray unavailable".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("tray unavailable"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ShellError = io_err.into();
        assert!(matches!(err, ShellError::Integration(_)));
        assert!(err.to_string().contains("Desktop integration"));
    }
}
