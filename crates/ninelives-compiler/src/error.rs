/// Error types for the Nine Lives transpiler

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranspileError>;

#[derive(Error, Debug)]
pub enum TranspileError {
    /// Malformed story input; transpilation cannot continue.
    #[error("{line}: {message}")]
    Fatal { line: usize, message: String },

    /// An internal invariant was violated.
    #[error("{line}: Bug: {message}")]
    Bug { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl TranspileError {
    pub fn fatal(line: usize, message: impl Into<String>) -> Self {
        TranspileError::Fatal {
            line,
            message: message.into(),
        }
    }

    pub fn bug(line: usize, message: impl Into<String>) -> Self {
        TranspileError::Bug {
            line,
            message: message.into(),
        }
    }

    /// Source line the error was raised on, if it came from the story itself.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            TranspileError::Fatal { line, .. } | TranspileError::Bug { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn is_bug(&self) -> bool {
        matches!(self, TranspileError::Bug { .. })
    }
}
