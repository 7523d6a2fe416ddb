//! EVM address validation for untrusted request input.

use std::str::FromStr;

use alloy::primitives::Address;
use once_cell::sync::Lazy;
use regex::Regex;

static EVM_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid address regex"));

/// Parses a `0x`-prefixed, 40 hex character address.
///
/// All-lowercase and all-uppercase input is accepted as is. Mixed-case input
/// must carry a valid EIP-55 checksum.
pub fn parse_evm_address(value: &str) -> Option<Address> {
    if !EVM_ADDRESS_RE.is_match(value) {
        return None;
    }

    let hex_part = &value[2..];
    let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());

    if has_lower && has_upper {
        Address::parse_checksummed(value, None).ok()
    } else {
        Address::from_str(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lowercase_address_is_valid() {
        assert!(parse_evm_address("0x1111111111111111111111111111111111111111").is_some());
        assert!(parse_evm_address("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd").is_some());
    }

    #[test]
    fn test_checksummed_address_is_valid() {
        assert_eq!(
            parse_evm_address("0x35FbA5dE07ed5479c8a151b78013b8Fea0FE67B4"),
            Some(Address::from_str("0x35fba5de07ed5479c8a151b78013b8fea0fe67b4").unwrap())
        );
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        // one letter flipped from the checksummed form above
        assert!(parse_evm_address("0x35fbA5dE07ed5479c8a151b78013b8Fea0FE67B4").is_none());
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        for value in [
            "",
            "not-an-address",
            "1111111111111111111111111111111111111111",
            "0x111111111111111111111111111111111111111",
            "0x11111111111111111111111111111111111111111",
            "0xg111111111111111111111111111111111111111",
            " 0x1111111111111111111111111111111111111111",
        ] {
            assert!(parse_evm_address(value).is_none(), "accepted {value:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_any_lowercase_hex_address_is_accepted(bytes in proptest::array::uniform20(any::<u8>())) {
            let value = format!("0x{}", alloy::hex::encode(bytes));
            prop_assert_eq!(parse_evm_address(&value), Some(Address::from(bytes)));
        }

        #[test]
        fn prop_strings_without_prefix_are_rejected(value in "[0-9a-f]{40}") {
            prop_assert!(parse_evm_address(&value).is_none());
        }

        #[test]
        fn prop_wrong_length_is_rejected(value in "0x[0-9a-f]{0,39}|0x[0-9a-f]{41,60}") {
            prop_assert!(parse_evm_address(&value).is_none());
        }
    }
}
