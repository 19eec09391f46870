//! Error types for rawbuf

use crate::types::ValueKind;
use thiserror::Error;

/// Host-style classification of a construction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The argument was not numeric at all
    Type,
    /// The argument was numeric but not a usable length
    Range,
}

/// Errors raised while constructing a buffer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Construction argument is not a number
    #[error("invalid argument: expected a number, got {actual}")]
    NotNumeric { actual: ValueKind },

    /// Negative, fractional, NaN, infinite or oversized numeric length
    #[error("invalid array buffer length: {requested}")]
    InvalidLength { requested: f64 },

    /// Integer length above the largest exactly representable integer
    #[error("array buffer length {requested} exceeds maximum {max}")]
    LengthTooLarge { requested: u64, max: u64 },

    /// The allocator could not provide the requested bytes
    #[error("array buffer allocation of {requested} bytes failed")]
    AllocationFailed { requested: u64 },
}

impl BufferError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::NotNumeric { .. } => ErrorKind::Type,
            BufferError::InvalidLength { .. }
            | BufferError::LengthTooLarge { .. }
            | BufferError::AllocationFailed { .. } => ErrorKind::Range,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}

/// Errors raised while placing a view over a buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Offset or length is not a whole number of elements
    #[error("view of {dtype_size}-byte elements cannot start at {byte_offset} over {byte_length} bytes")]
    Misaligned {
        dtype_size: usize,
        byte_offset: usize,
        byte_length: usize,
    },

    /// The requested window extends past the end of the buffer
    #[error("view [{byte_offset}, {byte_offset}+{byte_length}) is outside a buffer of {buffer_length} bytes")]
    OutOfBounds {
        byte_offset: usize,
        byte_length: usize,
        buffer_length: usize,
    },
}
