//! DiagLink device-to-host diagnostic protocol
//!
//! This crate implements the frame codec for the DiagLink serial diagnostic
//! link: hex-text decoding, structural frame validation, and the two
//! integrity algorithms (8-bit additive checksum and CRC-16/CCITT).
//!
//! # Frame format
//!
//! ```text
//! ┌───────┬────────┬─────────┬────────┬─────────┬──────────┬───────┬───────┐
//! │ START │ DEVICE │ COMMAND │ LENGTH │ PAYLOAD │ CHECKSUM │ CRC16 │ END   │
//! │ 0x7E  │ 1B     │ 1B      │ 1B     │ 0–255B  │ 1B       │ 2B    │ 0x7E  │
//! └───────┴────────┴─────────┴────────┴─────────┴──────────┴───────┴───────┘
//! ```
//!
//! Checksum and CRC cover the DEVICE, COMMAND, LENGTH and PAYLOAD bytes;
//! the delimiters and the integrity fields themselves are excluded. The CRC
//! is transmitted high byte first.
//!
//! Decoding distinguishes two failure tiers. Input that cannot be read as a
//! frame at all — undecodable hex, too few bytes, missing delimiters — fails
//! hard with a [`DecodeError`]. A structurally sound frame whose checksum or
//! CRC does not match is normal output: the mismatch surfaces through
//! [`Frame::checksum_valid`] and [`Frame::crc_valid`], so callers can tell a
//! frame corrupted in transit from input that was never a frame.

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod checksum;
pub mod crc;
pub mod decoder;
pub mod frame;
pub mod hex;

pub use decoder::{decode_full, decode_header, decode_payload, validate, DecodeError};
pub use frame::{
    encode, EncodeError, FaultList, Frame, FrameFault, DELIMITER, MAX_FRAME_SIZE,
    MAX_PAYLOAD_SIZE, MIN_FRAME_SIZE,
};
pub use hex::HexError;
