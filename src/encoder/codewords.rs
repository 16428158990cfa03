use super::bitstream::Bitstream;
use super::DATA_CODEWORDS;

/// Alternating pad codewords appended after the message bits
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Pack the message bits into the fixed number of data codewords,
/// filling the unused tail with the alternating pad bytes.
pub fn pack(stream: &Bitstream) -> [u8; DATA_CODEWORDS] {
    let mut codewords = [0u8; DATA_CODEWORDS];
    let bits = stream.as_slice();
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            codewords[i / 8] |= 0x80 >> (i % 8);
        }
    }
    // The stream is always a whole number of codewords
    let used = bits.len() / 8;
    for (k, slot) in codewords.iter_mut().enumerate().skip(used) {
        *slot = PAD_CODEWORDS[(k - used) % 2];
    }
    codewords
}
