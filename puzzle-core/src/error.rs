use std::fmt;

/// Failure reported by the surface capture collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureError {
    message: String,
}

impl CaptureError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface capture failed: {}", self.message)
    }
}

impl std::error::Error for CaptureError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidGrid { rows: usize, cols: usize },
    EmptyImage { width: u32, height: u32 },
    NotAPermutation { len: usize },
    Capture(CaptureError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidGrid { rows, cols } => {
                write!(f, "grid must have at least one row and column, got {rows}x{cols}")
            }
            PuzzleError::EmptyImage { width, height } => {
                write!(f, "image must have a positive size, got {width}x{height}")
            }
            PuzzleError::NotAPermutation { len } => {
                write!(f, "tile order must contain each index below {len} exactly once")
            }
            PuzzleError::Capture(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Capture(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CaptureError> for PuzzleError {
    fn from(err: CaptureError) -> Self {
        PuzzleError::Capture(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: String, value: String },
    OutOfRange { key: String, value: u64 },
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "query parameter '{key}' is not a number: '{value}'")
            }
            ConfigError::OutOfRange { key, value } => {
                write!(f, "config value '{key}' is out of range: {value}")
            }
            ConfigError::Json(msg) => write!(f, "invalid config JSON: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
