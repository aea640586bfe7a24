//! CRC-16/CCITT over frame bytes
//!
//! Polynomial 0x1021, MSB-first bit-by-bit processing, initial register
//! 0xFFFF, no reflection and no final XOR (the CCITT-FALSE parameter set).

/// CRC polynomial
pub const POLYNOMIAL: u16 = 0x1021;

/// Initial register value used on the wire
pub const INIT: u16 = 0xFFFF;

/// Compute the CRC-16/CCITT of `bytes` with the standard 0xFFFF init.
pub fn compute(bytes: &[u8]) -> u16 {
    compute_with(bytes, INIT)
}

/// Compute the CRC-16/CCITT of `bytes` starting from `init`.
///
/// Taking the register value lets a CRC be continued across
/// non-contiguous ranges.
pub fn compute_with(bytes: &[u8], init: u16) -> u16 {
    let mut crc = init;
    for &byte in bytes {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_init() {
        assert_eq!(compute(&[]), 0xFFFF);
        assert_eq!(compute_with(&[], 0x0000), 0x0000);
    }

    #[test]
    fn test_check_value() {
        // Standard CRC-16/CCITT-FALSE check input
        assert_eq!(compute(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_example_frame_body() {
        let body = [0x01, 0x10, 0x02, 0x1A, 0x2B];
        assert_eq!(compute(&body), 0xB72B);
    }

    #[test]
    fn test_single_zero_byte() {
        assert_eq!(compute(&[0x00]), 0xE1F0);
    }

    proptest! {
        #[test]
        fn test_resumable(bytes in proptest::collection::vec(any::<u8>(), 0..64), split in 0usize..64) {
            let split = split.min(bytes.len());
            let whole = compute(&bytes);
            let partial = compute_with(&bytes[split..], compute(&bytes[..split]));
            prop_assert_eq!(partial, whole);
        }
    }
}
