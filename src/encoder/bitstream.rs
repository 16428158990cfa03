use super::DATA_BIT_CAPACITY;
use crate::error::EncodeError;

/// Byte-mode segment indicator
const BYTE_MODE: u32 = 0b0100;

/// Bit-level message body: mode indicator, character count, payload
/// bits and terminator, most significant bit first throughout.
#[derive(Debug)]
pub struct Bitstream {
    bits: Vec<bool>,
}

impl Bitstream {
    /// Assemble the message bits for a byte-mode payload.
    ///
    /// Fails with [`EncodeError::CapacityExceeded`] when indicator,
    /// count and payload together do not fit the symbol's data bit
    /// capacity. The terminator and the zero fill to the codeword
    /// boundary are appended here, so the result is always a whole
    /// number of codewords.
    pub fn for_payload(payload: &[u8]) -> Result<Self, EncodeError> {
        let needed = 4 + 8 + 8 * payload.len();
        if needed > DATA_BIT_CAPACITY {
            return Err(EncodeError::CapacityExceeded {
                needed,
                capacity: DATA_BIT_CAPACITY,
            });
        }
        let mut stream = Self {
            bits: Vec::with_capacity(DATA_BIT_CAPACITY),
        };
        stream.push_bits(BYTE_MODE, 4);
        stream.push_bits(payload.len() as u32, 8);
        for &byte in payload {
            stream.push_bits(u32::from(byte), 8);
        }
        // Terminator is up to four zero bits, shortened if capacity runs out
        let terminator = (DATA_BIT_CAPACITY - stream.bits.len()).min(4);
        stream.push_bits(0, terminator);
        while stream.bits.len() % 8 != 0 {
            stream.bits.push(false);
        }
        Ok(stream)
    }

    /// Append the low `count` bits of `value`, most significant first
    fn push_bits(&mut self, value: u32, count: usize) {
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Number of bits in the stream
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the stream holds no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The assembled bits, most significant first
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}
