//! Siamese placement for odd-order squares
//!
//! Deterministic: the completed grid is a pure function of the order.
//! Placement walks an up-right diagonal with wraparound on both axes; every
//! n-th value the diagonal lands on an occupied cell, and the cursor drops
//! one row straight down from the last placed cell instead. For odd n that
//! drop cell is always free, so there is no backtracking.

use crate::error::Error;
use crate::order::Order;
use crate::square::MagicSquare;

/// Transient placement position; not part of the grid.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// One row up, one column right, both wrapping.
    fn up_right(self, n: usize) -> (usize, usize) {
        let row = if self.row == 0 { n - 1 } else { self.row - 1 };
        let col = if self.col == n - 1 { 0 } else { self.col + 1 };
        (row, col)
    }

    /// One row straight down (wrapping), same column.
    fn down(self, n: usize) -> (usize, usize) {
        ((self.row + 1) % n, self.col)
    }
}

/// Generate the order-n Siamese magic square.
///
/// The only failure mode is grid allocation; the placement rule itself
/// never needs a retry.
pub fn generate(order: Order) -> Result<MagicSquare, Error> {
    let n = order.get();
    let mut square = MagicSquare::zeroed(order)?;

    // 1 always starts in the middle of the top row
    let mut cursor = Cursor { row: 0, col: n / 2 };
    square.set(cursor.row, cursor.col, 1);

    for value in 2..=(n * n) as u32 {
        let (row, col) = cursor.up_right(n);
        let (row, col) = if square.get(row, col) != 0 {
            cursor.down(n)
        } else {
            (row, col)
        };
        square.set(row, col, value);
        cursor = Cursor { row, col };
    }

    Ok(square)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn generate_order(n: i64) -> MagicSquare {
        generate(Order::new(n).unwrap()).unwrap()
    }

    #[test]
    fn test_canonical_order_3() {
        let sq = generate_order(3);
        let expected = MagicSquare::from_rows(&[&[8, 1, 6], &[3, 5, 7], &[4, 9, 2]]);
        assert_eq!(sq, expected);
    }

    #[test]
    fn test_canonical_order_5() {
        let sq = generate_order(5);
        let expected = MagicSquare::from_rows(&[
            &[17, 24, 1, 8, 15],
            &[23, 5, 7, 14, 16],
            &[4, 6, 13, 20, 22],
            &[10, 12, 19, 21, 3],
            &[11, 18, 25, 2, 9],
        ]);
        assert_eq!(sq, expected);
    }

    #[test]
    fn test_order_5_lines_sum_to_65() {
        let sq = generate_order(5);
        assert_eq!(sq.magic_constant(), 65);
        for row in sq.rows() {
            assert_eq!(row.iter().map(|&v| u64::from(v)).sum::<u64>(), 65);
        }
        for col in 0..5 {
            let sum: u64 = (0..5).map(|row| u64::from(sq.get(row, col))).sum();
            assert_eq!(sum, 65);
        }
        let main: u64 = (0..5).map(|i| u64::from(sq.get(i, i))).sum();
        let anti: u64 = (0..5).map(|i| u64::from(sq.get(i, 4 - i))).sum();
        assert_eq!(main, 65);
        assert_eq!(anti, 65);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let order = Order::new(7).unwrap();
        assert_eq!(generate(order).unwrap(), generate(order).unwrap());
    }

    #[test]
    fn test_one_starts_top_middle() {
        for n in [3usize, 9, 15] {
            let sq = generate_order(n as i64);
            assert_eq!(sq.get(0, n / 2), 1);
        }
    }

    proptest! {
        /// Every odd order in [3, 99] yields a grid holding each of 1..n²
        /// exactly once with all lines at the magic constant.
        #[test]
        fn prop_odd_orders_are_magic(k in 1usize..=49) {
            let n = 2 * k + 1;
            let sq = generate_order(n as i64);
            prop_assert_eq!(sq.order(), n);
            prop_assert!(sq.is_magic());
        }

        /// Same order in, same grid out.
        #[test]
        fn prop_generation_is_deterministic(k in 1usize..=49) {
            let order = Order::new((2 * k + 1) as i64).unwrap();
            prop_assert_eq!(generate(order).unwrap(), generate(order).unwrap());
        }
    }
}
