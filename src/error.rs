//! Error types for txtcore.

use std::collections::TryReserveError;
use std::fmt;

/// Result type alias for txtcore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for buffer and selection operations.
///
/// Nothing-to-do outcomes (undo with an empty history, a caret already at the
/// buffer start) are not errors; those come back as `Ok(false)`.
#[derive(Debug)]
pub enum Error {
    /// An offset outside `[0, len]`.
    OutOfRange { offset: usize, len: usize },
    /// A span that does not fit inside the buffer.
    SpanOutOfRange {
        position: usize,
        size: usize,
        len: usize,
    },
    /// Growing the buffer failed. The buffer is left untouched.
    Allocation(TryReserveError),
}

impl Error {
    /// Check if this is a range error (offset or span).
    #[must_use]
    pub fn is_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::SpanOutOfRange { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { offset, len } => {
                write!(f, "offset {offset} out of range for buffer of length {len}")
            }
            Self::SpanOutOfRange {
                position,
                size,
                len,
            } => {
                write!(
                    f,
                    "span {position}..{} out of range for buffer of length {len}",
                    position.saturating_add(*size)
                )
            }
            Self::Allocation(e) => write!(f, "buffer growth failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Self::Allocation(e)
    }
}
