//! Error types for swisseph

use thiserror::Error;

/// Result type for swisseph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using swisseph
#[derive(Error, Debug)]
pub enum Error {
    /// The engine returned a negative status
    #[error("{operation} failed with status {code}{}", fmt_message(.message))]
    Engine {
        /// Engine routine that failed (e.g. `swe_calc_ut`)
        operation: &'static str,
        /// Status code as returned by the engine
        code: i32,
        /// Diagnostic text written by the engine, empty when none was produced
        message: String,
    },

    /// Another live handle already owns the process-wide engine state
    #[error("Ephemeris engine is already in use by another handle")]
    EngineBusy,

    /// Argument cannot be passed to the engine
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

fn fmt_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

impl Error {
    /// Create an Error from a negative engine status and its message buffer
    pub(crate) fn from_status(operation: &'static str, code: i32, message: impl Into<String>) -> Self {
        Error::Engine {
            operation,
            code,
            message: message.into(),
        }
    }

    /// Engine status code, if this error came from the engine
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::Engine { code, .. } => Some(*code),
            _ => None,
        }
    }
}
