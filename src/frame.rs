//! Frame entity, structural faults, and frame encoding

use heapless::Vec;

use crate::{checksum, crc};

/// Delimiter byte marking both frame start and frame end
pub const DELIMITER: u8 = 0x7E;

/// Fixed bytes in every frame: two delimiters, three header bytes,
/// checksum, and the two CRC bytes
pub const FIXED_OVERHEAD: usize = 8;

/// Byte count of the smallest complete frame (zero-length payload)
pub const MIN_FRAME_SIZE: usize = FIXED_OVERHEAD;

/// Byte count below which not even the header can be located
pub const MIN_HEADER_SIZE: usize = 5;

/// Maximum payload size, bounded by the one-byte LENGTH field
pub const MAX_PAYLOAD_SIZE: usize = 255;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + FIXED_OVERHEAD;

/// Offset of the first payload byte
pub(crate) const PAYLOAD_OFFSET: usize = 4;

/// A structural fault found while validating a byte sequence as a frame
///
/// Faults are recorded in check order, and every fault that is still
/// determinable is recorded — a decode reports all of its problems,
/// not just the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameFault {
    /// Fewer bytes than the operation's minimum frame size
    TooShort { actual: usize },
    /// First byte is not the 0x7E delimiter
    MissingStartDelimiter,
    /// Last byte is not the 0x7E delimiter
    MissingEndDelimiter,
    /// Declared LENGTH does not agree with the actual byte count
    SizeMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for FrameFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameFault::TooShort { actual } => {
                write!(f, "frame too short: {actual} bytes")
            }
            FrameFault::MissingStartDelimiter => write!(f, "missing 0x7E start delimiter"),
            FrameFault::MissingEndDelimiter => write!(f, "missing 0x7E end delimiter"),
            FrameFault::SizeMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected} bytes, got {actual}")
            }
        }
    }
}

/// At most one fault of each kind can occur per decode
pub const MAX_FAULTS: usize = 4;

/// Ordered list of structural faults from one decode
pub type FaultList = Vec<FrameFault, MAX_FAULTS>;

/// One decoded frame
///
/// How much is populated depends on the decoder operation that produced it:
/// [`decode_header`](crate::decoder::decode_header) fills only the header
/// fields, [`decode_payload`](crate::decoder::decode_payload) adds the
/// payload, and [`validate`](crate::decoder::validate) /
/// [`decode_full`](crate::decoder::decode_full) add the integrity fields.
/// Until an operation populates them, the integrity fields are zero and the
/// validity accessors carry no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Source device identifier
    pub device_id: u8,
    /// Command code
    pub command: u8,
    /// Declared payload length in bytes
    pub length: u8,
    /// Payload bytes
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
    /// Checksum transmitted in the frame
    pub checksum_given: u8,
    /// Checksum computed over the covered bytes
    pub checksum_calc: u8,
    /// CRC transmitted in the frame
    pub crc_given: u16,
    /// CRC computed over the covered bytes
    pub crc_calc: u16,
    /// Structural faults accumulated while decoding
    pub errors: FaultList,
}

impl Frame {
    /// True when the transmitted checksum matches the computed one
    pub fn checksum_valid(&self) -> bool {
        self.checksum_given == self.checksum_calc
    }

    /// True when the transmitted CRC matches the computed one
    pub fn crc_valid(&self) -> bool {
        self.crc_given == self.crc_calc
    }
}

/// Errors from frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Payload exceeds what the one-byte LENGTH field can declare
    PayloadTooLarge,
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncodeError::PayloadTooLarge => write!(f, "payload exceeds 255 bytes"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Build a complete delimited frame with correct checksum and CRC.
pub fn encode(
    device_id: u8,
    command: u8,
    payload: &[u8],
) -> Result<Vec<u8, MAX_FRAME_SIZE>, EncodeError> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(EncodeError::PayloadTooLarge);
    }

    // MAX_FRAME_SIZE covers the largest payload, so the pushes cannot fail
    let mut out = Vec::new();
    let _ = out.push(DELIMITER);
    let _ = out.push(device_id);
    let _ = out.push(command);
    let _ = out.push(payload.len() as u8);
    let _ = out.extend_from_slice(payload);

    let sum = checksum::compute(&out[1..]);
    let crc = crc::compute(&out[1..]);
    let _ = out.push(sum);
    let _ = out.push((crc >> 8) as u8);
    let _ = out.push(crc as u8);
    let _ = out.push(DELIMITER);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let bytes = encode(0x01, 0x10, &[0x1A, 0x2B]).unwrap();
        assert_eq!(
            &bytes[..],
            &[0x7E, 0x01, 0x10, 0x02, 0x1A, 0x2B, 0x58, 0xB7, 0x2B, 0x7E]
        );
    }

    #[test]
    fn test_encode_empty_payload() {
        let bytes = encode(0x05, 0x01, &[]).unwrap();
        assert_eq!(bytes.len(), MIN_FRAME_SIZE);
        assert_eq!(bytes[0], DELIMITER);
        assert_eq!(bytes[3], 0); // length
        assert_eq!(bytes[4], 0x06); // checksum over [05, 01, 00]
        assert_eq!(bytes[7], DELIMITER);
    }

    #[test]
    fn test_encode_payload_too_large() {
        let oversized = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(
            encode(0x01, 0x02, &oversized),
            Err(EncodeError::PayloadTooLarge)
        );
    }

    #[test]
    fn test_validity_derived_from_fields() {
        let mut frame = Frame {
            checksum_given: 0x58,
            checksum_calc: 0x58,
            crc_given: 0x1234,
            crc_calc: 0xB72B,
            ..Frame::default()
        };
        assert!(frame.checksum_valid());
        assert!(!frame.crc_valid());

        frame.crc_given = 0xB72B;
        assert!(frame.crc_valid());
    }

    #[test]
    fn test_fault_display() {
        let fault = FrameFault::SizeMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(
            std::format!("{fault}"),
            "length mismatch: expected 10 bytes, got 9"
        );
    }
}
