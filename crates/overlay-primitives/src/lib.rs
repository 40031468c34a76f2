//! # overlay-primitives
//!
//! Primitive types for the overlay network.
//!
//! This crate provides the node address, the leaf value type every message,
//! route and identity reference in the network resolves to.
//!
//! ## Wire and text forms
//!
//! - Wire: exactly 5 bytes, big-endian (most significant byte first)
//! - Text: exactly 10 lowercase hex digits, zero-padded, no prefix

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;

pub use address::{Address, AddressError};

/// Length of a node address on the wire, in bytes
pub const ADDRESS_LENGTH: usize = 5;

/// Length of the hex rendering of a node address
pub const ADDRESS_HEX_LENGTH: usize = ADDRESS_LENGTH * 2;

/// Mask selecting the 40 significant bits of an address
pub const ADDRESS_MASK: u64 = 0xff_ffff_ffff;

/// Top byte marking an address as reserved.
///
/// Set aside for future longer or derived address forms.
pub const ADDRESS_RESERVED_PREFIX: u8 = 0xff;
