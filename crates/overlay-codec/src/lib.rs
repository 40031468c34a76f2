//! # overlay-codec
//!
//! Wire encoding/decoding for the overlay network.
//!
//! All multi-byte values are big-endian. Decoding through [`Decode`] is
//! strict: a short source is an error and nothing is consumed, unlike the
//! tolerant [`Address::from_slice`] which degrades to the null address.
//!
//! ## Address lists
//!
//! Peer address lists can also be carried as RLP, one 5-byte string per
//! address, see [`rlp_codec`].

#![warn(missing_docs)]
#![warn(clippy::all)]

use bytes::{Buf, BufMut, Bytes, BytesMut};

mod error;
mod frame;

pub use error::{CodecError, CodecResult};
pub use frame::FrameBuffer;

// Re-export primitives for direct use
pub use overlay_primitives::{Address, ADDRESS_LENGTH};

/// Value with a fixed big-endian wire form
pub trait Encode {
    /// Number of bytes [`Encode::encode_to`] writes
    fn encoded_len(&self) -> usize;

    /// Write the wire form to `buf`
    fn encode_to<B: BufMut>(&self, buf: &mut B);
}

/// Value readable from its wire form
pub trait Decode: Sized {
    /// Read one value from `buf`.
    ///
    /// Fails with [`CodecError::UnexpectedEof`] without consuming anything
    /// when `buf` is too short.
    fn decode_from<B: Buf>(buf: &mut B) -> CodecResult<Self>;
}

/// Encode a value to bytes
pub fn encode<T: Encode>(value: &T) -> Bytes {
    let mut buf = BytesMut::with_capacity(value.encoded_len());
    value.encode_to(&mut buf);
    buf.freeze()
}

/// Decode a value from bytes, rejecting leftover input
pub fn decode<T: Decode>(data: &[u8]) -> CodecResult<T> {
    let mut buf = data;
    let value = T::decode_from(&mut buf)?;
    if buf.has_remaining() {
        return Err(CodecError::TrailingBytes(buf.remaining()));
    }
    Ok(value)
}

fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> CodecResult<()> {
    let remaining = buf.remaining();
    if remaining < needed {
        return Err(CodecError::UnexpectedEof { needed, remaining });
    }
    Ok(())
}

impl Encode for Address {
    fn encoded_len(&self) -> usize {
        ADDRESS_LENGTH
    }

    fn encode_to<B: BufMut>(&self, buf: &mut B) {
        self.append_to(buf);
    }
}

impl Decode for Address {
    fn decode_from<B: Buf>(buf: &mut B) -> CodecResult<Self> {
        ensure_remaining(buf, ADDRESS_LENGTH)?;
        Ok(Address::new(buf.get_uint(ADDRESS_LENGTH)))
    }
}

macro_rules! impl_int_codec {
    ($($ty:ty => $put:ident, $get:ident;)*) => {
        $(
            impl Encode for $ty {
                fn encoded_len(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                fn encode_to<B: BufMut>(&self, buf: &mut B) {
                    buf.$put(*self);
                }
            }

            impl Decode for $ty {
                fn decode_from<B: Buf>(buf: &mut B) -> CodecResult<Self> {
                    ensure_remaining(buf, std::mem::size_of::<$ty>())?;
                    Ok(buf.$get())
                }
            }
        )*
    };
}

impl_int_codec! {
    u8 => put_u8, get_u8;
    u16 => put_u16, get_u16;
    u32 => put_u32, get_u32;
    u64 => put_u64, get_u64;
}

/// RLP helpers for address lists
pub mod rlp_codec {
    use super::*;

    // Re-export rlp crate for direct use
    pub use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

    /// Encode addresses as an RLP list of 5-byte strings
    pub fn encode_addresses(addrs: &[Address]) -> Vec<u8> {
        rlp::encode_list::<Address, Address>(addrs).to_vec()
    }

    /// Decode an RLP list of 5-byte strings
    pub fn decode_addresses(data: &[u8]) -> CodecResult<Vec<Address>> {
        Ok(Rlp::new(data).as_list()?)
    }
}
