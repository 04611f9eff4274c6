// src/error.rs

use std::fmt;

/// Errors raised while reading the question file.
///
/// The request path never turns these into an error response; the store
/// logs them and serves an empty list instead.
#[derive(Debug)]
pub enum AppError {
    /// The file could not be read (missing, permissions...).
    Io(std::io::Error),

    /// The file is not a valid question bank.
    Parse(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "failed to read question file: {}", err),
            AppError::Parse(err) => write!(f, "failed to parse question file: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Parse(err) => Some(err),
        }
    }
}

/// Allows using `?` on file system calls.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err)
    }
}
