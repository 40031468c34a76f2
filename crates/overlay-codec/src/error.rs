//! Codec error types

use thiserror::Error;

/// Wire codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Source ran out before a value was complete
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the value needs
        needed: usize,
        /// Bytes left in the source
        remaining: usize,
    },

    /// Input left over after the value
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// Append would exceed a fixed buffer's capacity
    #[error("buffer overflow: requested {requested} bytes, {available} available")]
    Overflow {
        /// Bytes requested
        requested: usize,
        /// Bytes still free
        available: usize,
    },

    /// Read outside the written part of a buffer
    #[error("field out of bounds: offset {offset} + len {len} exceeds size {size}")]
    OutOfBounds {
        /// Start of the field
        offset: usize,
        /// Length of the field
        len: usize,
        /// Bytes written so far
        size: usize,
    },

    /// RLP decoding failed
    #[error("rlp error: {0}")]
    Rlp(#[from] rlp::DecoderError),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
