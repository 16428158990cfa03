use super::function_mask::FunctionMask;
use super::{DATA_MODULE_COUNT, SIZE};

/// Where each of the 15 format bits lives, least significant bit
/// first. Every bit is written twice: the first position walks the
/// vertical run in column 8, the second the horizontal run in row 8.
/// Both runs skip the timing row/column.
pub const FORMAT_POSITIONS: [[(usize, usize); 2]; 15] = [
    [(0, 8), (8, 20)],
    [(1, 8), (8, 19)],
    [(2, 8), (8, 18)],
    [(3, 8), (8, 17)],
    [(4, 8), (8, 16)],
    [(5, 8), (8, 15)],
    [(7, 8), (8, 14)],
    [(8, 8), (8, 13)],
    [(14, 8), (8, 7)],
    [(15, 8), (8, 5)],
    [(16, 8), (8, 4)],
    [(17, 8), (8, 3)],
    [(18, 8), (8, 2)],
    [(19, 8), (8, 1)],
    [(20, 8), (8, 0)],
];

/// The order in which codeword bits fill the symbol: two-module wide
/// columns from the right edge leftward, snaking up then down, with
/// the vertical timing column skipped and function modules passed
/// over.
pub fn traversal_order(mask: &FunctionMask) -> Vec<(usize, usize)> {
    let size = SIZE as i32;
    let mut order = Vec::with_capacity(DATA_MODULE_COUNT);
    let mut row: i32 = size - 1;
    let mut dir: i32 = -1;
    let mut col: i32 = size - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
        }
        loop {
            for cc in [col, col - 1] {
                let (r, c) = (row as usize, cc as usize);
                if !mask.is_function(r, c) {
                    order.push((r, c));
                }
            }
            let next = row + dir;
            if next < 0 || next >= size {
                dir = -dir;
                break;
            }
            row = next;
        }
        col -= 2;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::matrix_builder::MatrixBuilder;
    use std::collections::HashSet;

    #[test]
    fn test_format_positions_are_distinct_and_in_bounds() {
        let mut seen = HashSet::new();
        for pair in FORMAT_POSITIONS {
            for (row, col) in pair {
                assert!(row < SIZE && col < SIZE, "({}, {})", row, col);
                assert_ne!(row, 6);
                assert_ne!(col, 6);
                assert!(seen.insert((row, col)), "duplicate ({}, {})", row, col);
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn test_traversal_covers_every_data_module_once() {
        let builder = MatrixBuilder::new();
        let order = traversal_order(builder.function_mask());
        assert_eq!(order.len(), DATA_MODULE_COUNT);
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(unique.len(), DATA_MODULE_COUNT);
    }

    #[test]
    fn test_traversal_starts_bottom_right_and_ends_left() {
        let builder = MatrixBuilder::new();
        let order = traversal_order(builder.function_mask());
        assert_eq!(&order[..4], &[(20, 20), (20, 19), (19, 20), (19, 19)]);
        assert_eq!(
            &order[order.len() - 4..],
            &[(11, 1), (11, 0), (12, 1), (12, 0)]
        );
    }

    #[test]
    fn test_traversal_skips_timing_column_and_function_modules() {
        let builder = MatrixBuilder::new();
        let order = traversal_order(builder.function_mask());
        for &(row, col) in &order {
            assert_ne!(col, 6, "timing column at ({}, {})", row, col);
            assert!(
                !builder.function_mask().is_function(row, col),
                "function module at ({}, {})",
                row,
                col
            );
        }
    }

    #[test]
    fn test_traversal_through_narrow_strip_left_of_finder() {
        // Columns 8/7 hold data only in rows 9..=12 between the finder
        // rings and the reserved format cells
        let builder = MatrixBuilder::new();
        let order = traversal_order(builder.function_mask());
        assert_eq!(
            &order[176..184],
            &[
                (12, 8),
                (12, 7),
                (11, 8),
                (11, 7),
                (10, 8),
                (10, 7),
                (9, 8),
                (9, 7)
            ]
        );
    }
}
