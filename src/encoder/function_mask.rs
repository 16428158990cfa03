use super::SIZE;
use crate::models::BitMatrix;

/// Tracks which modules belong to function patterns or reserved format
/// areas, so codeword placement can skip them.
pub struct FunctionMask {
    cells: BitMatrix,
}

impl FunctionMask {
    /// An empty mask with every module still available for data
    pub fn new() -> Self {
        Self {
            cells: BitMatrix::new(SIZE),
        }
    }

    /// Mark `(row, col)` as a function module
    pub fn mark(&mut self, row: usize, col: usize) {
        self.cells.set(row, col, true);
    }

    /// Whether `(row, col)` is off-limits for codeword bits
    pub fn is_function(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col)
    }

    /// Number of modules left over for codeword bits
    pub fn data_module_count(&self) -> usize {
        SIZE * SIZE - self.cells.count_set()
    }
}

impl Default for FunctionMask {
    fn default() -> Self {
        Self::new()
    }
}
