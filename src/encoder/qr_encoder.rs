use super::bitstream::Bitstream;
use super::byte::utf16_to_bytes;
use super::codewords;
use super::format::FormatInfo;
use super::matrix_builder::MatrixBuilder;
use super::reed_solomon::ReedSolomonEncoder;
use super::{DATA_CODEWORDS, ECC_CODEWORDS, TOTAL_CODEWORDS};
use crate::error::EncodeError;
use crate::models::{ECLevel, MaskPattern, QrMatrix};

/// Main QR encoder that wires the pipeline together: segment bits,
/// codeword packing, error correction, module placement.
///
/// Construction builds the Reed-Solomon generator polynomial, so keep
/// one encoder around when producing many symbols.
pub struct QrEncoder {
    rs: ReedSolomonEncoder,
    format: FormatInfo,
}

impl QrEncoder {
    /// An encoder for the fixed version 1-M profile
    pub fn new() -> Self {
        Self {
            rs: ReedSolomonEncoder::new(ECC_CODEWORDS),
            format: FormatInfo::new(ECLevel::M, MaskPattern::Pattern0),
        }
    }

    /// Encode UTF-8 text into a symbol
    pub fn encode(&self, text: &str) -> Result<QrMatrix, EncodeError> {
        self.encode_payload(text.as_bytes())
    }

    /// Encode UTF-16 code units into a symbol. Unpaired surrogates are
    /// carried through as their own three-byte sequences rather than
    /// rejected.
    pub fn encode_utf16(&self, units: &[u16]) -> Result<QrMatrix, EncodeError> {
        self.encode_payload(&utf16_to_bytes(units))
    }

    /// The complete codeword sequence for a payload, data codewords
    /// followed by error correction, before placement
    pub fn codewords(&self, payload: &[u8]) -> Result<[u8; TOTAL_CODEWORDS], EncodeError> {
        let stream = Bitstream::for_payload(payload)?;
        let data = codewords::pack(&stream);
        let ecc = self.rs.remainder(&data);
        let mut all = [0u8; TOTAL_CODEWORDS];
        all[..data.len()].copy_from_slice(&data);
        all[data.len()..].copy_from_slice(&ecc);
        Ok(all)
    }

    fn encode_payload(&self, payload: &[u8]) -> Result<QrMatrix, EncodeError> {
        let codewords = self.codewords(payload)?;
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "DEBUG: data {:02X?} ecc {:02X?}",
                &codewords[..DATA_CODEWORDS],
                &codewords[DATA_CODEWORDS..]
            );
        }
        Ok(MatrixBuilder::build(&codewords, self.format))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
