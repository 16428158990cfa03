//! Fixed symbol profile: version 1 at error-correction level M with
//! mask pattern 0, the smallest Model 2 symbol.

/// Symbol version
pub const VERSION: u8 = 1;

/// Modules per side, 17 + 4 * version
pub const SIZE: usize = 21;

/// Data codewords at level M
pub const DATA_CODEWORDS: usize = 16;

/// Error-correction codewords at level M
pub const ECC_CODEWORDS: usize = 10;

/// All codewords carried by the symbol
pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + ECC_CODEWORDS;

/// Bits available for mode indicator, character count and payload
pub const DATA_BIT_CAPACITY: usize = DATA_CODEWORDS * 8;

/// Longest byte-mode payload: capacity minus the 12 header bits,
/// rounded down to whole bytes
pub const MAX_DATA_BYTES: usize = (DATA_BIT_CAPACITY - 12) / 8;

/// Modules left for codeword bits after function patterns
pub const DATA_MODULE_COUNT: usize = TOTAL_CODEWORDS * 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_constants_are_consistent() {
        assert_eq!(SIZE, 17 + 4 * VERSION as usize);
        assert_eq!(DATA_BIT_CAPACITY, 128);
        assert_eq!(MAX_DATA_BYTES, 14);
        assert_eq!(TOTAL_CODEWORDS, 26);
        assert_eq!(DATA_MODULE_COUNT, 208);
    }
}
