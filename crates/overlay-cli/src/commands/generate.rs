//! Random address generation
//!
//! Produces test fixtures only. Real node addresses are derived from identity
//! keys elsewhere.

use overlay_primitives::Address;
use rand::Rng;
use tracing::trace;

use crate::{CliError, Output};

/// Print `count` random non-reserved addresses
pub fn generate(count: usize, json: bool) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidInput("count must be at least 1".to_string()));
    }

    let mut rng = rand::thread_rng();
    let addrs: Vec<Address> = (0..count).map(|_| random_address(&mut rng)).collect();

    let lines: Vec<String> = addrs.iter().map(Address::to_hex).collect();
    Output::new(json)
        .field_value("addresses", serde_json::to_value(&addrs)?)
        .field_u64("count", addrs.len() as u64)
        .message(&lines.join("\n"))
        .print();
    Ok(())
}

/// Draw addresses until one is not reserved
pub(crate) fn random_address<R: Rng>(rng: &mut R) -> Address {
    loop {
        let addr = Address::new(rng.gen());
        if !addr.is_reserved() {
            return addr;
        }
        trace!(%addr, "discarding reserved address");
    }
}
