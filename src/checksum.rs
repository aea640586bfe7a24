//! Additive checksum over frame bytes
//!
//! The DiagLink checksum is the sum of the covered bytes reduced modulo 256.
//! It catches single-byte corruption cheaply; the CRC covers the rest.

/// Compute the 8-bit additive checksum of `bytes`.
///
/// Empty input yields 0. Because it is a plain sum, the result is
/// independent of byte order.
pub fn compute(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compute(&[]), 0);
    }

    #[test]
    fn test_example_frame_body() {
        // DEVICE..PAYLOAD bytes of the canonical example frame
        let body = [0x01, 0x10, 0x02, 0x1A, 0x2B];
        assert_eq!(compute(&body), 0x58);
    }

    #[test]
    fn test_wraps_modulo_256() {
        assert_eq!(compute(&[0xFF, 0x01]), 0x00);
        assert_eq!(compute(&[0x80, 0x80, 0x01]), 0x01);
    }

    proptest! {
        #[test]
        fn test_order_independent(mut bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let forward = compute(&bytes);
            bytes.reverse();
            prop_assert_eq!(compute(&bytes), forward);
        }
    }
}
