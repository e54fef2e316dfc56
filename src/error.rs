//! Error types for restoring saved mazes

use std::fmt;

use crate::maze::Shape;

/// Reasons a restored maze cannot be trusted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The layout does not have as many rows or rings as the saved size
    SizeMismatch { expected: usize, found: usize },
    /// Cell storage is inconsistent with the layout it claims to be
    MalformedLayout(String),
    /// A start, end or goal point is missing, duplicated or out of place
    InvalidPoint(String),
    /// A sound maze that is not the shape or size the caller asked for
    ConfigMismatch {
        expected: (Shape, u16),
        found: (Shape, u16),
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::SizeMismatch { expected, found } => {
                write!(f, "size mismatch: expected {}, found {}", expected, found)
            }
            MazeError::MalformedLayout(msg) => write!(f, "malformed layout: {}", msg),
            MazeError::InvalidPoint(msg) => write!(f, "invalid point: {}", msg),
            MazeError::ConfigMismatch { expected, found } => write!(
                f,
                "requested {} size {}, got {} size {}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

impl std::error::Error for MazeError {}

/// Result type alias for maze restoration
pub type Result<T> = std::result::Result<T, MazeError>;
