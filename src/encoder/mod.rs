//! QR code encoding modules
//!
//! This module contains the full path from text to module matrix:
//! - Segment and bitstream assembly (byte mode)
//! - Codeword packing and Reed-Solomon error correction
//! - Format information (BCH)
//! - Function pattern stamping and codeword placement

/// Message bit assembly (mode indicator, count, payload, terminator)
pub mod bitstream;
/// UTF-16 to UTF-8 payload conversion
pub mod byte;
/// Packing message bits into padded data codewords
pub mod codewords;
/// Format information codeword (BCH-protected level and mask)
pub mod format;
/// Tracks modules reserved by function patterns
pub mod function_mask;
/// GF(256) arithmetic tables
pub mod galois;
/// Module matrix assembly (function patterns, placement, format)
pub mod matrix_builder;
/// Codeword traversal order and format bit positions
pub mod placement;
pub mod profile;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error-correction codeword generation
pub mod reed_solomon;

pub use profile::*;
