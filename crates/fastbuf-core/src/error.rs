//! Buffer error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing a buffer.
///
/// Sized construction is the only fallible buffer operation. Moves,
/// accessors, and drops are total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The allocator could not satisfy the request, the byte size
    /// overflowed `isize::MAX`, or the request exceeded the configured
    /// allocation budget.
    OutOfMemory {
        /// Number of elements requested.
        requested: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
}

impl BufferError {
    /// Total bytes the failed request asked for, or `None` if that
    /// product overflows `usize`.
    pub fn requested_bytes(&self) -> Option<usize> {
        match self {
            Self::OutOfMemory {
                requested,
                element_size,
            } => requested.checked_mul(*element_size),
        }
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                element_size,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} elements of {element_size} bytes"
                )
            }
        }
    }
}

impl Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_request() {
        let err = BufferError::OutOfMemory {
            requested: 10,
            element_size: 4,
        };
        assert_eq!(
            err.to_string(),
            "out of memory: requested 10 elements of 4 bytes"
        );
    }

    #[test]
    fn requested_bytes_multiplies() {
        let err = BufferError::OutOfMemory {
            requested: 10,
            element_size: 8,
        };
        assert_eq!(err.requested_bytes(), Some(80));
    }

    #[test]
    fn requested_bytes_overflow_is_none() {
        let err = BufferError::OutOfMemory {
            requested: usize::MAX,
            element_size: 2,
        };
        assert_eq!(err.requested_bytes(), None);
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(BufferError::OutOfMemory {
            requested: 1,
            element_size: 1,
        });
        assert!(err.source().is_none());
    }
}
