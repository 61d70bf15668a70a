//! Exchange-rate ordering inside order-book directory keys.
//!
//! A book directory key is a 24-byte hash prefix naming the trading pair
//! followed by an 8-byte big-endian quality. Holding the prefix fixed,
//! ascending key order is ascending quality order, so a plain range scan of
//! the state store walks a book from best to worst rate.

use keylet_types::Uint256;

/// Distance between adjacent quality buckets: 2^64.
pub const QUALITY_STEP: Uint256 = {
    let mut bytes = [0u8; 32];
    bytes[23] = 1;
    Uint256::from_bytes(bytes)
};

/// `base` with its trailing 8 bytes replaced by `quality`.
pub fn quality_index(base: &Uint256, quality: u64) -> Uint256 {
    base.with_low_u64(quality)
}

/// The first key past every quality under `key`'s prefix.
///
/// Exact 256-bit addition of 2^64: a carry out of the prefix propagates into
/// the upper bytes, and overflow past the top wraps to zero.
pub fn quality_next(key: &Uint256) -> Uint256 {
    key.wrapping_add(&QUALITY_STEP)
}

/// The quality stored in `key`'s trailing 8 bytes.
pub fn quality(key: &Uint256) -> u64 {
    key.low_u64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn step_is_two_to_the_64() {
        assert_eq!(
            Uint256::from_hex_text("10000000000000000").unwrap(),
            QUALITY_STEP
        );
    }

    #[test]
    fn next_of_zero_prefix() {
        let next = quality_next(&Uint256::ZERO.with_low_u64(u64::MAX));
        assert_eq!(quality(&next), u64::MAX);
        assert_eq!(next.as_bytes()[23], 1);
    }

    #[test]
    fn next_carries_into_upper_bytes() {
        let mut bytes = [0u8; 32];
        bytes[8..24].fill(0xff);
        let next = quality_next(&Uint256::from_bytes(bytes));
        let mut expected = [0u8; 32];
        expected[7] = 1;
        assert_eq!(next, Uint256::from_bytes(expected));
    }

    #[test]
    fn next_wraps_at_the_top() {
        let top = Uint256::MAX;
        assert_eq!(quality_next(&top), Uint256::ZERO.with_low_u64(u64::MAX));
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(base: [u8; 32], q: u64) {
            let base = Uint256::from_bytes(base);
            let keyed = quality_index(&base, q);
            prop_assert_eq!(quality(&keyed), q);
            prop_assert_eq!(&keyed.as_bytes()[..24], &base.as_bytes()[..24]);
        }

        #[test]
        fn quality_order_is_key_order(base: [u8; 32], q1: u64, q2: u64) {
            let base = Uint256::from_bytes(base);
            let k1 = quality_index(&base, q1);
            let k2 = quality_index(&base, q2);
            prop_assert_eq!(k1.cmp(&k2), q1.cmp(&q2));
        }

        #[test]
        fn next_adds_exactly_one_bucket(prefix: u128, q: u64) {
            prop_assume!(prefix != u128::MAX);
            let mut bytes = [0u8; 32];
            bytes[8..24].copy_from_slice(&prefix.to_be_bytes());
            let key = Uint256::from_bytes(bytes).with_low_u64(q);

            let next = quality_next(&key);
            let mut expected = [0u8; 32];
            expected[8..24].copy_from_slice(&(prefix + 1).to_be_bytes());
            prop_assert!(next > key);
            prop_assert_eq!(next, Uint256::from_bytes(expected).with_low_u64(q));
        }

        #[test]
        fn next_is_above_every_quality_of_its_bucket(base: [u8; 32], q: u64) {
            let base = Uint256::from_bytes(base);
            prop_assume!(base.as_bytes()[..24].iter().any(|b| *b != 0xff));
            let bucket_start = quality_index(&base, 0);
            prop_assert!(quality_next(&bucket_start) > quality_index(&base, q));
        }
    }
}
