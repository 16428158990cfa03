use std::sync::OnceLock;

/// GF(256) arithmetic tables for Reed-Solomon coding.
///
/// The field is generated by repeated multiplication by 2 under the
/// primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D). The exponent
/// table is mirrored into 255..511 so `mul` can index `log[a] + log[b]`
/// without a wrap-around step.
pub struct Gf256 {
    exp: [u8; 512],
    log: [u8; 256],
}

static TABLES: OnceLock<Gf256> = OnceLock::new();

impl Gf256 {
    /// Build the exponent and logarithm tables
    pub fn new() -> Self {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= 0x11D;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Self { exp, log }
    }

    /// Process-wide shared tables, built once on first use and read-only
    /// afterwards, so concurrent encodes share them without locking
    pub fn shared() -> &'static Gf256 {
        TABLES.get_or_init(Gf256::new)
    }

    /// Field multiplication
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// alpha^i, the i-th power of the generator element 2
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % 255]
    }
}

impl Default for Gf256 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_table_start() {
        let gf = Gf256::new();
        let expected = [1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38];
        for (i, &want) in expected.iter().enumerate() {
            assert_eq!(gf.exp(i), want, "exp({})", i);
        }
    }

    #[test]
    fn test_exp_wraps_at_255() {
        let gf = Gf256::new();
        assert_eq!(gf.exp(254), 142);
        // alpha^255 = 1 (order of the multiplicative group)
        assert_eq!(gf.exp(255), 1);
        assert_eq!(gf.exp(256), gf.exp(1));
    }

    #[test]
    fn test_mul_zero_and_one() {
        let gf = Gf256::new();
        assert_eq!(gf.mul(0, 57), 0);
        assert_eq!(gf.mul(57, 0), 0);
        for a in [1u8, 2, 77, 128, 255] {
            assert_eq!(gf.mul(a, 1), a);
            assert_eq!(gf.mul(1, a), a);
        }
    }

    #[test]
    fn test_mul_known_products() {
        let gf = Gf256::new();
        assert_eq!(gf.mul(2, 2), 4);
        // 128 * 2 overflows x^8 and reduces through 0x11D
        assert_eq!(gf.mul(128, 2), 29);
        assert_eq!(gf.mul(0x53, 0xCA), 0x8F);
        assert_eq!(gf.mul(255, 255), 226);
    }

    #[test]
    fn test_mul_distributes_over_xor() {
        let gf = Gf256::new();
        for (a, b, c) in [(3u8, 7u8, 250u8), (91, 180, 17), (255, 2, 128)] {
            assert_eq!(gf.mul(a, b ^ c), gf.mul(a, b) ^ gf.mul(a, c));
        }
    }

    #[test]
    fn test_shared_is_one_instance() {
        assert!(std::ptr::eq(Gf256::shared(), Gf256::shared()));
        assert_eq!(Gf256::shared().mul(2, 2), 4);
    }
}
