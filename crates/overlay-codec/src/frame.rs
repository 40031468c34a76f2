//! Fixed-capacity frame buffer

use std::fmt;

use tracing::debug;

use crate::error::{CodecError, CodecResult};
use crate::{Decode, Encode};

/// Append-only byte buffer with a compile-time capacity.
///
/// Appends that would exceed `C` fail with [`CodecError::Overflow`] and leave
/// the buffer unchanged. Reads are bounded by the bytes written so far.
#[derive(Clone)]
pub struct FrameBuffer<const C: usize> {
    data: [u8; C],
    len: usize,
}

impl<const C: usize> FrameBuffer<C> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self { data: [0u8; C], len: 0 }
    }

    /// Maximum number of bytes the buffer holds
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Bytes written so far
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been written
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still free
    pub const fn remaining_capacity(&self) -> usize {
        C - self.len
    }

    /// Written bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Discard all written bytes
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Reserve `n` bytes at the end and return them for writing
    pub fn append_field(&mut self, n: usize) -> CodecResult<&mut [u8]> {
        let available = self.remaining_capacity();
        if n > available {
            debug!(requested = n, available, capacity = C, "frame buffer overflow");
            return Err(CodecError::Overflow { requested: n, available });
        }
        let start = self.len;
        self.len += n;
        Ok(&mut self.data[start..self.len])
    }

    /// Append raw bytes
    pub fn append_bytes(&mut self, bytes: &[u8]) -> CodecResult<()> {
        self.append_field(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Append an encodable value
    pub fn append<T: Encode>(&mut self, value: &T) -> CodecResult<()> {
        let mut region = self.append_field(value.encoded_len())?;
        value.encode_to(&mut region);
        Ok(())
    }

    /// Append a byte
    pub fn append_u8(&mut self, value: u8) -> CodecResult<()> {
        self.append(&value)
    }

    /// Append a big-endian u16
    pub fn append_u16(&mut self, value: u16) -> CodecResult<()> {
        self.append(&value)
    }

    /// Append a big-endian u32
    pub fn append_u32(&mut self, value: u32) -> CodecResult<()> {
        self.append(&value)
    }

    /// Append a big-endian u64
    pub fn append_u64(&mut self, value: u64) -> CodecResult<()> {
        self.append(&value)
    }

    /// Borrow `len` written bytes starting at `offset`
    pub fn field(&self, offset: usize, len: usize) -> CodecResult<&[u8]> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Ok(&self.data[offset..end]),
            _ => Err(CodecError::OutOfBounds {
                offset,
                len,
                size: self.len,
            }),
        }
    }

    /// Decode a value starting at `offset`
    pub fn read<T: Decode>(&self, offset: usize) -> CodecResult<T> {
        let mut src = self.field(offset, self.len.saturating_sub(offset))?;
        T::decode_from(&mut src)
    }
}

impl<const C: usize> Default for FrameBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> AsRef<[u8]> for FrameBuffer<C> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const C: usize> fmt::Debug for FrameBuffer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("len", &self.len)
            .field("capacity", &C)
            .finish()
    }
}
