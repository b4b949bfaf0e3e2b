use std::collections::TryReserveError;
use std::fmt;
use std::path::PathBuf;

/// The closed set of failure categories a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Memory,
    Io,
    Syntax,
    InvalidArgument,
}

impl ErrorKind {
    /// Stable, human-readable description of the kind.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Memory => "Memory allocation error",
            ErrorKind::Io => "I/O error",
            ErrorKind::Syntax => "Syntax error",
            ErrorKind::InvalidArgument => "Invalid argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
    #[error("allocation failed: {0}")]
    Memory(#[from] TryReserveError),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDirectory(String),
}

impl Error {
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Folds the error onto its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::Memory(_) => ErrorKind::Memory,
            Error::NotFound(_) | Error::Io(_) | Error::InvalidDirectory(_) => ErrorKind::Io,
        }
    }

    /// Byte offset of a syntax error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Syntax { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
