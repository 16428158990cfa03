use crate::models::{ECLevel, MaskPattern};

/// BCH generator polynomial for the 15-bit format information,
/// x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u16 = 0b101_0011_0111;

/// Fixed mask XORed onto the codeword so format information is never
/// all-zero in the symbol
const FORMAT_MASK: u16 = 0b101_0100_0001_0010;

/// Format information: error-correction level and mask pattern,
/// protected by a BCH(15,5) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level of the symbol
    pub ec_level: ECLevel,
    /// Mask pattern applied to the data region
    pub mask: MaskPattern,
}

impl FormatInfo {
    /// Format information for the given level and mask
    pub fn new(ec_level: ECLevel, mask: MaskPattern) -> Self {
        Self { ec_level, mask }
    }

    /// The 15 format bits: 5 data bits (level then mask), 10 BCH
    /// remainder bits, XORed with the fixed mask. Bit 14 is the first
    /// data bit.
    pub fn bits(&self) -> u16 {
        let data = (u16::from(self.ec_level.format_bits()) << 3) | u16::from(self.mask.bits());
        let mut rem = data << 10;
        for shift in (0..5).rev() {
            if rem & (1 << (shift + 10)) != 0 {
                rem ^= FORMAT_GENERATOR << shift;
            }
        }
        ((data << 10) | rem) ^ FORMAT_MASK
    }

    /// Whether `bits` is a valid masked format codeword
    pub fn check(bits: u16) -> bool {
        let mut rem = bits ^ FORMAT_MASK;
        for shift in (0..5).rev() {
            if rem & (1 << (shift + 10)) != 0 {
                rem ^= FORMAT_GENERATOR << shift;
            }
        }
        rem == 0
    }

    /// Recover the level and mask from a masked format codeword, or
    /// `None` if the BCH remainder does not check out
    pub fn decode(bits: u16) -> Option<Self> {
        if !Self::check(bits) {
            return None;
        }
        let data = (bits ^ FORMAT_MASK) >> 10;
        let ec_level = ECLevel::from_format_bits(((data >> 3) & 0b11) as u8)?;
        let mask = MaskPattern::from_bits((data & 0b111) as u8)?;
        Some(Self { ec_level, mask })
    }
}
