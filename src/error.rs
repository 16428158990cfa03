use thiserror::Error;

/// Errors surfaced to callers of the encode entry points
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload does not fit a version 1-M byte-mode symbol (at most
    /// 14 bytes of text). `needed` counts the un-terminated bit stream:
    /// mode indicator + count indicator + payload bits.
    #[error("payload needs {needed} data bits but a version 1-M symbol holds {capacity}")]
    CapacityExceeded {
        /// Bits required by mode indicator, count indicator, and payload
        needed: usize,
        /// Data-region capacity in bits (128 for this configuration)
        capacity: usize,
    },
}
