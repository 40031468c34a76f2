//! Property tests for the node address type

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use overlay_primitives::{Address, ADDRESS_MASK, ADDRESS_RESERVED_PREFIX};
use proptest::prelude::*;

fn std_hash(addr: &Address) -> u64 {
    let mut hasher = DefaultHasher::new();
    addr.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn masks_to_forty_bits(v in any::<u64>()) {
        let addr = Address::new(v);
        prop_assert_eq!(addr.to_u64(), v & ADDRESS_MASK);
        prop_assert!(addr.to_u64() <= ADDRESS_MASK);
    }

    #[test]
    fn set_masks_like_new(v in any::<u64>()) {
        let mut addr = Address::NULL;
        addr.set(v);
        prop_assert_eq!(addr, Address::new(v));
    }

    #[test]
    fn wire_bytes_roundtrip(bytes in any::<[u8; 5]>()) {
        let addr = Address::from_slice(&bytes);
        let mut out = [0u8; 5];
        addr.copy_to(&mut out);
        prop_assert_eq!(out, bytes);

        let mut appended = Vec::new();
        addr.append_to(&mut appended);
        prop_assert_eq!(appended, bytes.to_vec());
    }

    #[test]
    fn hex_roundtrip(v in any::<u64>()) {
        let addr = Address::new(v);
        let hex = addr.to_hex();
        prop_assert_eq!(hex.len(), 10);
        prop_assert!(hex.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
        prop_assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), addr.to_u64());
        prop_assert_eq!(hex.parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn bounded_hex_is_prefix(v in any::<u64>(), cap in 0usize..16) {
        let addr = Address::new(v);
        let mut buf = vec![0xffu8; cap];
        let n = addr.write_hex(&mut buf);
        let hex = addr.to_hex();
        prop_assert_eq!(n, cap.saturating_sub(1).min(10));
        prop_assert_eq!(&buf[..n], &hex.as_bytes()[..n]);
        if cap > 0 {
            prop_assert_eq!(buf[n], 0);
        }
    }

    #[test]
    fn short_input_is_null(bytes in proptest::collection::vec(any::<u8>(), 0..5)) {
        prop_assert!(Address::from_slice(&bytes).is_null());
    }

    #[test]
    fn short_output_is_untouched(v in any::<u64>(), len in 0usize..5) {
        let mut buf = vec![0x5au8; len];
        Address::new(v).copy_to(&mut buf);
        prop_assert!(buf.iter().all(|&b| b == 0x5a));
    }

    #[test]
    fn reserved_rule(v in any::<u64>()) {
        let addr = Address::new(v);
        let expected = addr.is_null() || addr.byte(0) == ADDRESS_RESERVED_PREFIX;
        prop_assert_eq!(addr.is_reserved(), expected);
    }

    #[test]
    fn total_order_consistent(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (Address::new(a), Address::new(b));
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&x| x).count(), 1);
        prop_assert_eq!(a <= b, a < b || a == b);
        prop_assert_eq!(a >= b, a > b || a == b);
        prop_assert_eq!(a.cmp(&b), a.to_u64().cmp(&b.to_u64()));
    }

    #[test]
    fn integer_comparison_masks(a in any::<u64>(), raw in any::<u64>()) {
        let addr = Address::new(a);
        let masked = Address::new(raw);
        prop_assert_eq!(addr == raw, addr == masked);
        prop_assert_eq!(addr < raw, addr < masked);
        prop_assert_eq!(addr >= raw, addr >= masked);
        prop_assert_eq!(raw == addr, masked == addr);
        prop_assert_eq!(raw > addr, masked > addr);
    }

    #[test]
    fn hash_consistent_with_eq(v in any::<u64>(), high in any::<u64>()) {
        let a = Address::new(v);
        let b = Address::new((v & ADDRESS_MASK) | (high << 40));
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
        prop_assert_eq!(std_hash(&a), std_hash(&b));
    }
}
