//! Frame decoding and validation
//!
//! Four operations over the same structural gate, differing in how much of
//! the [`Frame`] they populate and in how strict they are:
//!
//! - [`decode_header`] — header fields only
//! - [`decode_payload`] — header plus extracted payload
//! - [`validate`] — fully populated frame, any structural fault is fatal
//! - [`decode_full`] — fully populated frame, faults accumulated in
//!   [`Frame::errors`] wherever the fixed fields can still be located
//!
//! Structural checks always run in the same order (size floor, start
//! delimiter, end delimiter, declared-length agreement), so the fault list
//! for a given input is reproducible.

use crate::frame::{
    FaultList, Frame, FrameFault, DELIMITER, FIXED_OVERHEAD, MIN_FRAME_SIZE, MIN_HEADER_SIZE,
    PAYLOAD_OFFSET,
};
use crate::hex::{self, HexError};
use crate::{checksum, crc};

/// Hard decode failure: the input cannot be interpreted as a frame at all
///
/// Checksum and CRC mismatches are deliberately absent here. A corrupted but
/// well-formed frame decodes successfully and reports the mismatch through
/// [`Frame::checksum_valid`] / [`Frame::crc_valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The text is not decodable as hex
    MalformedHex(HexError),
    /// The byte sequence cannot satisfy the frame layout
    InvalidFrame(FaultList),
}

impl From<HexError> for DecodeError {
    fn from(err: HexError) -> Self {
        DecodeError::MalformedHex(err)
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeError::MalformedHex(err) => write!(f, "malformed hex: {err}"),
            DecodeError::InvalidFrame(faults) => {
                write!(f, "invalid frame")?;
                for (i, fault) in faults.iter().enumerate() {
                    let sep = if i == 0 { ':' } else { ';' };
                    write!(f, "{sep} {fault}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Shared structural gate: size floor plus both delimiter checks.
///
/// Each check records its fault independently, so a short frame with no
/// delimiters reports all three problems.
fn check_structure(bytes: &[u8], min_size: usize) -> FaultList {
    let mut faults = FaultList::new();
    // one fault of each kind at most, the list capacity makes pushes infallible
    if bytes.len() < min_size {
        let _ = faults.push(FrameFault::TooShort {
            actual: bytes.len(),
        });
    }
    if bytes.first() != Some(&DELIMITER) {
        let _ = faults.push(FrameFault::MissingStartDelimiter);
    }
    if bytes.last() != Some(&DELIMITER) {
        let _ = faults.push(FrameFault::MissingEndDelimiter);
    }
    faults
}

/// Decode only the header fields of a frame.
///
/// Fails when the byte count cannot hold a header or a delimiter is absent.
/// The returned frame has an empty payload and untouched integrity fields.
pub fn decode_header(text: &str) -> Result<Frame, DecodeError> {
    let bytes = hex::decode(text)?;
    let faults = check_structure(&bytes, MIN_HEADER_SIZE);
    if !faults.is_empty() {
        return Err(DecodeError::InvalidFrame(faults));
    }

    Ok(Frame {
        device_id: bytes[1],
        command: bytes[2],
        length: bytes[3],
        ..Frame::default()
    })
}

/// Decode the header and extract the payload.
///
/// On top of the header checks, fails when the declared length would place
/// the payload past the end of the input.
pub fn decode_payload(text: &str) -> Result<Frame, DecodeError> {
    let bytes = hex::decode(text)?;
    let mut faults = check_structure(&bytes, MIN_HEADER_SIZE);
    if !faults.is_empty() {
        return Err(DecodeError::InvalidFrame(faults));
    }

    let expected = bytes[3] as usize + FIXED_OVERHEAD;
    if bytes.len() < expected {
        let _ = faults.push(FrameFault::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
        return Err(DecodeError::InvalidFrame(faults));
    }

    let mut frame = Frame {
        device_id: bytes[1],
        command: bytes[2],
        length: bytes[3],
        ..Frame::default()
    };
    let _ = frame
        .payload
        .extend_from_slice(&bytes[PAYLOAD_OFFSET..PAYLOAD_OFFSET + frame.length as usize]);
    Ok(frame)
}

/// Fully decode a frame and check its integrity fields, strictly.
///
/// Every structural fault is a hard failure here. Checksum and CRC
/// mismatches never are: a well-formed but corrupted frame comes back `Ok`
/// with the corresponding validity accessor returning false.
pub fn validate(text: &str) -> Result<Frame, DecodeError> {
    match decode_full(text)? {
        frame if frame.errors.is_empty() => Ok(frame),
        frame => Err(DecodeError::InvalidFrame(frame.errors)),
    }
}

/// Decode a frame, accumulating every structural fault it can determine.
///
/// Input shorter than the zero-payload minimum cannot have its fixed fields
/// located and fails hard, carrying the faults gathered up to that point.
/// The same applies when the declared length runs past the end of the
/// input. Anything else decodes: the integrity fields are computed relative
/// to the declared length and surviving faults (a missing delimiter, extra
/// trailing bytes) land in [`Frame::errors`] on a fully populated frame.
pub fn decode_full(text: &str) -> Result<Frame, DecodeError> {
    let bytes = hex::decode(text)?;
    let mut faults = check_structure(&bytes, MIN_FRAME_SIZE);
    if bytes.len() < MIN_FRAME_SIZE {
        return Err(DecodeError::InvalidFrame(faults));
    }

    let expected = bytes[3] as usize + FIXED_OVERHEAD;
    if bytes.len() != expected {
        let _ = faults.push(FrameFault::SizeMismatch {
            expected,
            actual: bytes.len(),
        });
        if bytes.len() < expected {
            return Err(DecodeError::InvalidFrame(faults));
        }
    }

    let length = bytes[3] as usize;
    let covered = &bytes[1..PAYLOAD_OFFSET + length];

    let mut frame = Frame {
        device_id: bytes[1],
        command: bytes[2],
        length: bytes[3],
        checksum_given: bytes[PAYLOAD_OFFSET + length],
        checksum_calc: checksum::compute(covered),
        crc_given: u16::from_be_bytes([
            bytes[PAYLOAD_OFFSET + length + 1],
            bytes[PAYLOAD_OFFSET + length + 2],
        ]),
        crc_calc: crc::compute(covered),
        errors: faults,
        ..Frame::default()
    };
    let _ = frame
        .payload
        .extend_from_slice(&bytes[PAYLOAD_OFFSET..PAYLOAD_OFFSET + length]);
    Ok(frame)
}
