use crate::error::{ParseError, RuntimeError};

/// Any failure a session can report.
///
/// Parse and runtime errors are recoverable inside an interactive session;
/// they only reach the caller of [`Session::run`](crate::Session::run) in
/// strict mode. I/O errors always end the session.
#[derive(Debug)]
pub enum SessionError {
    /// A lexing or grammar error.
    Parse(ParseError),
    /// An evaluation error.
    Runtime(RuntimeError),
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for SessionError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for SessionError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
