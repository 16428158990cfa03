/// Compact square bit grid, row-major, bit-packed into bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-light square matrix with the given side length
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get bit at (row, col); out-of-range coordinates read as false
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (row, col); out-of-range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        let index = row * self.size + col;
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Number of set bits in the whole grid
    pub fn count_set(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw row-major packed bits
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
