use super::galois::Gf256;

/// Reed-Solomon encoder producing the error-correction codewords that
/// are appended to the data codewords of the symbol.
///
/// Construction is the expensive part (the generator polynomial is the
/// product of `ecc_len` linear factors), so build one encoder and reuse
/// it across messages.
pub struct ReedSolomonEncoder {
    gf: &'static Gf256,
    /// Generator polynomial, coefficients most significant first. The
    /// leading coefficient is always 1.
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build an encoder emitting `ecc_len` error-correction codewords.
    ///
    /// The generator polynomial is the product of (x - alpha^i) for
    /// i in 0..ecc_len.
    pub fn new(ecc_len: usize) -> Self {
        let gf = Gf256::shared();
        let mut generator = vec![1u8];
        for i in 0..ecc_len {
            generator = poly_mul(gf, &generator, &[1, gf.exp(i)]);
        }
        Self { gf, generator }
    }

    /// Number of error-correction codewords this encoder emits
    pub fn ecc_len(&self) -> usize {
        self.generator.len() - 1
    }

    /// Remainder of `data * x^ecc_len` divided by the generator
    /// polynomial. These bytes are the error-correction codewords for
    /// `data`.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut ecc = vec![0u8; self.ecc_len()];
        for &byte in data {
            let factor = byte ^ ecc[0];
            ecc.copy_within(1.., 0);
            let last = ecc.len() - 1;
            ecc[last] = 0;
            for (i, &coef) in self.generator.iter().skip(1).enumerate() {
                ecc[i] ^= self.gf.mul(coef, factor);
            }
        }
        ecc
    }
}

/// Polynomial product over GF(256), coefficients most significant first
fn poly_mul(gf: &Gf256, a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] ^= gf.mul(x, y);
        }
    }
    out
}
