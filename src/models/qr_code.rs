use super::BitMatrix;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// The 2-bit level indicator as written into format information
    /// (wire mapping: L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`format_bits`](Self::format_bits)
    pub fn from_format_bits(bits: u8) -> Option<Self> {
        match bits & 0x03 {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (row + col) % 2 == 0
    Pattern0 = 0,
    /// row % 2 == 0
    Pattern1 = 1,
    /// col % 3 == 0
    Pattern2 = 2,
    /// (row + col) % 3 == 0
    Pattern3 = 3,
    /// (row/2 + col/3) % 2 == 0
    Pattern4 = 4,
    /// (row*col)%2 + (row*col)%3 == 0
    Pattern5 = 5,
    /// ((row*col)%2 + (row*col)%3) % 2 == 0
    Pattern6 = 6,
    /// ((row+col)%2 + (row*col)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from its 3-bit indicator
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0 => Some(MaskPattern::Pattern0),
            1 => Some(MaskPattern::Pattern1),
            2 => Some(MaskPattern::Pattern2),
            3 => Some(MaskPattern::Pattern3),
            4 => Some(MaskPattern::Pattern4),
            5 => Some(MaskPattern::Pattern5),
            6 => Some(MaskPattern::Pattern6),
            7 => Some(MaskPattern::Pattern7),
            _ => None,
        }
    }

    /// The 3-bit indicator as written into format information
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Check if the data module at (row, col) gets its bit flipped
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (row + col) % 2 == 0,
            MaskPattern::Pattern1 => row % 2 == 0,
            MaskPattern::Pattern2 => col % 3 == 0,
            MaskPattern::Pattern3 => (row + col) % 3 == 0,
            MaskPattern::Pattern4 => (row / 2 + col / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((row * col) % 2 + (row * col) % 3) == 0,
            MaskPattern::Pattern6 => (((row * col) % 2) + ((row * col) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((row + col) % 2) + ((row * col) % 3)) % 2 == 0,
        }
    }
}

/// A finished QR symbol: the module grid plus the fixed configuration it
/// was encoded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    modules: BitMatrix,
    version: u8,
    ec_level: ECLevel,
    mask_pattern: MaskPattern,
}

impl QrMatrix {
    pub(crate) fn new(
        modules: BitMatrix,
        version: u8,
        ec_level: ECLevel,
        mask_pattern: MaskPattern,
    ) -> Self {
        Self {
            modules,
            version,
            ec_level,
            mask_pattern,
        }
    }

    /// Side length in modules (21 for version 1)
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Module state at (row, col): true = dark. Coordinates outside the
    /// grid read as light, so renderers may overscan for a quiet zone.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.modules.get(row, col)
    }

    /// The packed module grid
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Symbol version (always 1)
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Error correction level the symbol was encoded with
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask pattern applied to the data region
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }
}
