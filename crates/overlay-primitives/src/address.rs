//! Overlay node address type (40 bits, 5 bytes on the wire)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bytes::BufMut;
use thiserror::Error;
use tracing::trace;

use crate::{ADDRESS_HEX_LENGTH, ADDRESS_LENGTH, ADDRESS_MASK, ADDRESS_RESERVED_PREFIX};

/// Address parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid address length: expected 5 bytes, got {0}")]
    InvalidLength(usize),
}

/// 40-bit node address.
///
/// The value is masked to 40 bits on every construction and assignment, so
/// bits 40..64 of the inner integer are never set. Zero is the null address.
///
/// Ordering and hashing follow the unsigned integer value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u64);

impl Address {
    /// Null address (0000000000)
    pub const NULL: Address = Address(0);

    /// Create address from an integer, keeping the low 40 bits
    pub const fn new(value: u64) -> Self {
        Address(value & ADDRESS_MASK)
    }

    /// Create address from its 5-byte big-endian form
    pub const fn from_bytes(bytes: [u8; 5]) -> Self {
        Address(
            ((bytes[0] as u64) << 32)
                | ((bytes[1] as u64) << 24)
                | ((bytes[2] as u64) << 16)
                | ((bytes[3] as u64) << 8)
                | (bytes[4] as u64),
        )
    }

    /// Create address from the first 5 bytes of a slice.
    ///
    /// A slice shorter than 5 bytes yields the null address rather than an
    /// error; use [`Address::try_from_slice`] to tell the two apart.
    pub fn from_slice(slice: &[u8]) -> Self {
        let mut addr = Address::NULL;
        addr.set_from_slice(slice);
        addr
    }

    /// Assign from the first 5 bytes of a slice, or reset to null if shorter
    pub fn set_from_slice(&mut self, slice: &[u8]) {
        match slice.get(..ADDRESS_LENGTH) {
            Some(head) => {
                let mut bytes = [0u8; ADDRESS_LENGTH];
                bytes.copy_from_slice(head);
                *self = Address::from_bytes(bytes);
            }
            None => {
                trace!(len = slice.len(), needed = ADDRESS_LENGTH, "short address input, using null address");
                self.0 = 0;
            }
        }
    }

    /// Create address from a slice of exactly 5 bytes
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != ADDRESS_LENGTH {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        Ok(Address::from_slice(slice))
    }

    /// Parse address from 10 hex digits (with or without 0x/0X prefix)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::try_from_slice(&bytes)
    }

    /// Assign from an integer, keeping the low 40 bits
    pub fn set(&mut self, value: u64) {
        self.0 = value & ADDRESS_MASK;
    }

    /// Reset to the null address
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Raw 40-bit value
    pub const fn to_u64(&self) -> u64 {
        self.0
    }

    /// Hash code for hash-table keying; equal addresses give equal codes
    pub const fn hash_code(&self) -> u64 {
        self.0
    }

    /// 5-byte big-endian form
    pub const fn to_bytes(&self) -> [u8; 5] {
        let b = self.0.to_be_bytes();
        [b[3], b[4], b[5], b[6], b[7]]
    }

    /// Write the 5-byte big-endian form into `dst`.
    ///
    /// Does nothing if `dst` is shorter than 5 bytes. Bytes past the fifth
    /// are left untouched.
    pub fn copy_to(&self, dst: &mut [u8]) {
        match dst.get_mut(..ADDRESS_LENGTH) {
            Some(head) => head.copy_from_slice(&self.to_bytes()),
            None => {
                trace!(len = dst.len(), needed = ADDRESS_LENGTH, "short address output, nothing written");
            }
        }
    }

    /// Append the 5-byte big-endian form to a growable buffer
    pub fn append_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_uint(self.0, ADDRESS_LENGTH);
    }

    /// Byte at position `i` of the big-endian form (0 is most significant).
    ///
    /// `i` must be in `0..5`. This is only checked in debug builds.
    #[inline]
    pub fn byte(&self, i: usize) -> u8 {
        debug_assert!(i < ADDRESS_LENGTH, "address byte index {} out of range", i);
        let shift = 32u32.wrapping_sub((i as u32).wrapping_mul(8));
        (self.0.wrapping_shr(shift) & 0xff) as u8
    }

    /// True if this is not the null address
    pub const fn is_set(&self) -> bool {
        self.0 != 0
    }

    /// True if this is the null address
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Check if this address is reserved and may not name a node.
    ///
    /// The null address and every address whose top byte is
    /// [`ADDRESS_RESERVED_PREFIX`] are reserved.
    pub const fn is_reserved(&self) -> bool {
        self.0 == 0 || (self.0 >> 32) as u8 == ADDRESS_RESERVED_PREFIX
    }

    /// Convert to 10 lowercase hex digits
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Write hex digits into a bounded buffer, NUL-terminated.
    ///
    /// Behaves like a bounded `snprintf`: at most `buf.len() - 1` digits are
    /// written, then a terminating zero byte. Returns the number of digits
    /// written, which is less than 10 when the buffer is too small. An empty
    /// buffer is left alone.
    pub fn write_hex(&self, buf: &mut [u8]) -> usize {
        let Some(room) = buf.len().checked_sub(1) else {
            return 0;
        };
        let digits = self.hex_digits();
        let n = room.min(ADDRESS_HEX_LENGTH);
        buf[..n].copy_from_slice(&digits[..n]);
        buf[n] = 0;
        if n < ADDRESS_HEX_LENGTH {
            trace!(written = n, needed = ADDRESS_HEX_LENGTH, "address hex truncated");
        }
        n
    }

    fn hex_digits(&self) -> [u8; ADDRESS_HEX_LENGTH] {
        let mut out = [0u8; ADDRESS_HEX_LENGTH];
        // 5 bytes always fill exactly 10 digits
        let encoded = hex::encode_to_slice(self.to_bytes(), &mut out);
        debug_assert!(encoded.is_ok());
        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Address::new(value)
    }
}

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<[u8; 5]> for Address {
    fn from(bytes: [u8; 5]) -> Self {
        Address::from_bytes(bytes)
    }
}

impl From<Address> for [u8; 5] {
    fn from(addr: Address) -> Self {
        addr.to_bytes()
    }
}

// Comparisons against raw integers mask the integer first

impl PartialEq<u64> for Address {
    fn eq(&self, other: &u64) -> bool {
        self.0 == (other & ADDRESS_MASK)
    }
}

impl PartialEq<Address> for u64 {
    fn eq(&self, other: &Address) -> bool {
        (self & ADDRESS_MASK) == other.0
    }
}

impl PartialOrd<u64> for Address {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(self.0.cmp(&(other & ADDRESS_MASK)))
    }
}

impl PartialOrd<Address> for u64 {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some((self & ADDRESS_MASK).cmp(&other.0))
    }
}

// Serde implementation (behind feature flag)
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Address {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s: String = Deserialize::deserialize(deserializer)?;
            Address::from_hex(&s).map_err(serde::de::Error::custom)
        }
    }
}

// RLP implementation (behind feature flag)
#[cfg(feature = "rlp")]
mod rlp_impl {
    use super::*;
    use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

    impl Encodable for Address {
        fn rlp_append(&self, s: &mut RlpStream) {
            s.encoder().encode_value(&self.to_bytes());
        }
    }

    impl Decodable for Address {
        fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
            let bytes: Vec<u8> = rlp.as_val()?;
            Address::try_from_slice(&bytes).map_err(|_| DecoderError::RlpInvalidLength)
        }
    }
}
