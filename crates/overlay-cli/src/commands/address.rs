//! Address inspection and conversion commands

use overlay_primitives::{Address, ADDRESS_LENGTH};
use serde_json::Value;
use tracing::debug;

use super::{describe, summary};
use crate::CliError;

/// Parse and show a hex address
pub fn inspect(address: &str, json: bool) -> Result<(), CliError> {
    let addr: Address = address.trim().parse()?;
    debug!(%addr, "inspecting address");
    describe(addr, json)?.message(&summary(addr)).print();
    Ok(())
}

/// Build an address from an integer, masking to 40 bits
pub fn from_int(value: &str, json: bool) -> Result<(), CliError> {
    let raw = parse_u64(value.trim())?;
    let addr = Address::new(raw);
    let masked = addr.to_u64() != raw;
    debug!(raw, %addr, masked, "converted integer to address");

    let mut message = summary(addr);
    if masked {
        message.push_str(&format!("\nNote: {:#x} masked to 40 bits", raw));
    }
    describe(addr, json)?
        .field_bool("masked", masked)
        .message(&message)
        .print();
    Ok(())
}

/// Build an address from wire bytes given as hex
pub fn from_bytes(input: &str, json: bool) -> Result<(), CliError> {
    let input = input.trim();
    let input = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let bytes = hex::decode(input).map_err(|e| CliError::InvalidHex(e.to_string()))?;

    let addr = Address::from_slice(&bytes);
    let short = bytes.len() < ADDRESS_LENGTH;
    let strict = overlay_codec::decode::<Address>(&bytes);
    debug!(len = bytes.len(), %addr, short, "parsed wire bytes");

    let mut message = summary(addr);
    if short {
        message.push_str(&format!(
            "\nNote: {} bytes is shorter than {}, null address used",
            bytes.len(),
            ADDRESS_LENGTH
        ));
    } else if bytes.len() > ADDRESS_LENGTH {
        message.push_str(&format!(
            "\nNote: {} trailing bytes ignored",
            bytes.len() - ADDRESS_LENGTH
        ));
    }

    let strict_error = match strict {
        Ok(_) => Value::Null,
        Err(e) => Value::String(e.to_string()),
    };
    describe(addr, json)?
        .field_u64("input_len", bytes.len() as u64)
        .field_bool("short", short)
        .field_value("strict_error", strict_error)
        .message(&message)
        .print();
    Ok(())
}

/// Parse a decimal or 0x-prefixed hex integer
pub(crate) fn parse_u64(s: &str) -> Result<u64, CliError> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| CliError::InvalidInput(format!("{}: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64_decimal_and_hex() {
        assert_eq!(parse_u64("4886718345").unwrap(), 0x01_2345_6789);
        assert_eq!(parse_u64("0x0123456789").unwrap(), 0x01_2345_6789);
        assert_eq!(parse_u64("0XFF").unwrap(), 255);
    }

    #[test]
    fn test_parse_u64_invalid() {
        assert!(matches!(parse_u64("abc"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_u64("0xzz"), Err(CliError::InvalidInput(_))));
        assert!(parse_u64("18446744073709551616").is_err());
    }

    #[test]
    fn test_inspect_rejects_bad_hex() {
        assert!(matches!(inspect("nothex", false), Err(CliError::InvalidAddress(_))));
        assert!(matches!(inspect("0123", false), Err(CliError::InvalidAddress(_))));
    }

    #[test]
    fn test_prefix_spellings_accepted() {
        assert!(inspect("0X0123456789", false).is_ok());
        assert!(from_bytes("0X0123456789", false).is_ok());
        assert!(from_int("0X0123456789", false).is_ok());
    }

    #[test]
    fn test_from_bytes_rejects_bad_hex() {
        assert!(matches!(from_bytes("0xgg", false), Err(CliError::InvalidHex(_))));
    }
}
