use super::format::FormatInfo;
use super::function_mask::FunctionMask;
use super::placement::{FORMAT_POSITIONS, traversal_order};
use super::{SIZE, TOTAL_CODEWORDS, VERSION};
use crate::models::{BitMatrix, MaskPattern, QrMatrix};

/// Assembles the module matrix in three phases: function patterns
/// first, then codeword bits through the masked data region, then the
/// format information over its reserved cells.
///
/// Everything that is not a codeword bit, the dark module included, is
/// stamped and marked before placement starts, so the traversal meets
/// exactly one cell per codeword bit.
pub struct MatrixBuilder {
    modules: BitMatrix,
    func: FunctionMask,
}

impl MatrixBuilder {
    /// A builder with all function patterns stamped and reserved
    pub fn new() -> Self {
        let mut builder = Self {
            modules: BitMatrix::new(SIZE),
            func: FunctionMask::new(),
        };
        builder.stamp_function_patterns();
        builder
    }

    /// Which modules are off-limits for codeword bits
    pub fn function_mask(&self) -> &FunctionMask {
        &self.func
    }

    /// Run all phases and produce the finished symbol
    pub fn build(codewords: &[u8; TOTAL_CODEWORDS], format: FormatInfo) -> QrMatrix {
        let mut builder = Self::new();
        builder.place_codewords(codewords, format.mask);
        builder.write_format_info(format.bits());
        QrMatrix::new(builder.modules, VERSION, format.ec_level, format.mask)
    }

    /// Set and reserve one module, ignoring out-of-bounds coordinates
    /// so finder stamping can run over the symbol edge
    fn set_function(&mut self, row: i32, col: i32, dark: bool) {
        if row < 0 || col < 0 || row >= SIZE as i32 || col >= SIZE as i32 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        self.modules.set(row, col, dark);
        self.func.mark(row, col);
    }

    fn stamp_function_patterns(&mut self) {
        let size = SIZE as i32;
        for (row0, col0) in [(0, 0), (0, size - 7), (size - 7, 0)] {
            self.stamp_finder(row0, col0);
        }
        // Timing patterns between the finders, dark on even indices
        for i in 8..size - 8 {
            let dark = i % 2 == 0;
            self.set_function(6, i, dark);
            self.set_function(i, 6, dark);
        }
        // Reserve the format areas as light; real values land after
        // placement
        for pair in FORMAT_POSITIONS {
            for (row, col) in pair {
                self.set_function(row as i32, col as i32, false);
            }
        }
        // The dark module above the bottom-left finder's separator
        self.set_function(4 * i32::from(VERSION) + 9, 8, true);
    }

    /// One finder with its separator, stamped around `(row0, col0)`.
    /// The extra ring at offsets -1 and 7 is the separator and falls
    /// off the symbol on the outer sides.
    fn stamp_finder(&mut self, row0: i32, col0: i32) {
        for r in -1..=7 {
            for c in -1..=7 {
                let dark = if r == -1 || r == 7 || c == -1 || c == 7 {
                    false
                } else if r == 0 || r == 6 || c == 0 || c == 6 {
                    true
                } else {
                    (2..=4).contains(&r) && (2..=4).contains(&c)
                };
                self.set_function(row0 + r, col0 + c, dark);
            }
        }
    }

    /// Write codeword bits through the data mask into the traversal
    /// order. The traversal must line up exactly with the codeword
    /// bits; a mismatch means the function patterns are wrong.
    fn place_codewords(&mut self, codewords: &[u8; TOTAL_CODEWORDS], mask: MaskPattern) {
        let order = traversal_order(&self.func);
        assert_eq!(
            order.len(),
            codewords.len() * 8,
            "data modules must match codeword bits"
        );
        for (i, &(row, col)) in order.iter().enumerate() {
            let bit = (codewords[i / 8] >> (7 - i % 8)) & 1 == 1;
            self.modules.set(row, col, bit != mask.is_masked(row, col));
        }
    }

    /// Write the 15 masked format bits into both reserved copies
    fn write_format_info(&mut self, bits: u16) {
        for (i, pair) in FORMAT_POSITIONS.iter().enumerate() {
            let dark = (bits >> i) & 1 == 1;
            for &(row, col) in pair {
                self.modules.set(row, col, dark);
            }
        }
    }
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}
