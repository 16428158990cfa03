//! invite_qr - fixed-profile QR code generation for short payloads
//!
//! A pure Rust QR code generator pinned to the smallest Model 2 symbol:
//! version 1 (21x21 modules) at error-correction level M, byte mode,
//! mask pattern 0. Payloads of up to 14 UTF-8 bytes become a
//! deterministic boolean module matrix, ready for whatever rendering
//! the caller prefers.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (bitstream, error correction, placement)
pub mod encoder;
/// Encoding error types
pub mod error;
/// Core data structures (QrMatrix, BitMatrix, mask patterns)
pub mod models;

mod debug;

pub use encoder::qr_encoder::QrEncoder;
pub use error::EncodeError;
pub use models::{BitMatrix, ECLevel, MaskPattern, QrMatrix};

use rayon::prelude::*;

/// Encode UTF-8 text into a 21x21 QR symbol
///
/// # Arguments
/// * `text` - Payload text, at most 14 UTF-8 bytes
///
/// # Returns
/// The finished module matrix, or [`EncodeError::CapacityExceeded`]
/// when the payload does not fit
pub fn encode(text: &str) -> Result<QrMatrix, EncodeError> {
    QrEncoder::new().encode(text)
}

/// Encode UTF-16 code units into a 21x21 QR symbol
///
/// Surrogate pairs are combined before conversion to the UTF-8 payload;
/// unpaired surrogates are carried through as three-byte sequences.
pub fn encode_utf16(units: &[u16]) -> Result<QrMatrix, EncodeError> {
    QrEncoder::new().encode_utf16(units)
}

/// Encode many payloads in parallel, one symbol per input
///
/// Results come back in input order. The Reed-Solomon setup is shared
/// across the whole batch.
pub fn encode_batch<T: AsRef<str> + Sync>(texts: &[T]) -> Vec<Result<QrMatrix, EncodeError>> {
    let encoder = QrEncoder::new();
    texts
        .par_iter()
        .map(|text| encoder.encode(text.as_ref()))
        .collect()
}
