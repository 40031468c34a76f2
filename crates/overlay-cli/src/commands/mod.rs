//! Subcommand implementations

pub mod address;
pub mod generate;

use overlay_primitives::Address;

use crate::{CliError, Output};

/// Wire bytes as colon-separated hex
pub(crate) fn wire_text(addr: Address) -> String {
    overlay_codec::encode(&addr)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Human-readable summary of an address
pub(crate) fn summary(addr: Address) -> String {
    format!(
        "Address:  {}\nInteger:  {}\nBytes:    {}\nReserved: {}",
        addr,
        addr.to_u64(),
        wire_text(addr),
        addr.is_reserved()
    )
}

/// Output carrying every field of an address
pub(crate) fn describe(addr: Address, json: bool) -> Result<Output, CliError> {
    Ok(Output::new(json)
        .field_value("address", serde_json::to_value(addr)?)
        .field_u64("integer", addr.to_u64())
        .field("bytes", &wire_text(addr))
        .field_bool("null", addr.is_null())
        .field_bool("reserved", addr.is_reserved()))
}
