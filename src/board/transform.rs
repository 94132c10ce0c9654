//! Bit-pattern transforms
//!
//! Every transform XORs a mask derived from the grid geometry, so applying
//! one twice restores the original value. The `*_mask` functions expose the
//! masks on their own for previews; the `toggle_*` functions apply them.
//!
//! All geometry goes through row/column arithmetic. Plain index shifts wrap
//! from one row into the next at the board edges and are never used here.

use super::square::{Square, SIDE};

/// Knight jumps as (rows, columns)
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Every square in the row of `sq`
pub const fn rank_mask(sq: Square) -> u64 {
    0xFFu64 << (sq.row() * SIDE)
}

/// Every square in the column of `sq`
pub const fn file_mask(sq: Square) -> u64 {
    0x0101_0101_0101_0101u64 << sq.col()
}

/// The bottom-left to top-right diagonal through `sq`
///
/// The diagonal number `col + row - 7` picks the top-most square; the walk
/// then steps down-left (+7) and ends on the first square in column 0.
pub fn rising_diagonal_mask(sq: Square) -> u64 {
    let n = sq.col() as i32 + sq.row() as i32 - 7;
    let mut pos = if n > 0 { 8 * n + 7 } else { n + 7 };
    let mut mask = 0u64;
    while pos < 64 {
        mask |= 1u64 << pos;
        if pos % 8 == 0 {
            break;
        }
        pos += 7;
    }
    mask
}

/// The top-left to bottom-right diagonal through `sq`
///
/// The diagonal number `col - row` picks the top-most square; the walk
/// then steps down-right (+9) and ends on the first square in column 7.
pub fn falling_diagonal_mask(sq: Square) -> u64 {
    let n = sq.col() as i32 - sq.row() as i32;
    let mut pos = if n < 0 { -8 * n } else { n };
    let mut mask = 0u64;
    while pos < 64 {
        mask |= 1u64 << pos;
        if pos % 8 == 7 {
            break;
        }
        pos += 9;
    }
    mask
}

/// Squares a knight on `sq` attacks
pub fn knight_mask(sq: Square) -> u64 {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(d_row, d_col)| sq.offset(d_row, d_col))
        .fold(0, |mask, target| mask | target.bit())
}

#[inline]
pub const fn toggle_bit(bits: u64, sq: Square) -> u64 {
    bits ^ sq.bit()
}

#[inline]
pub const fn toggle_all(bits: u64) -> u64 {
    !bits
}

#[inline]
pub const fn toggle_rank(bits: u64, sq: Square) -> u64 {
    bits ^ rank_mask(sq)
}

#[inline]
pub const fn toggle_file(bits: u64, sq: Square) -> u64 {
    bits ^ file_mask(sq)
}

#[inline]
pub fn toggle_rising_diagonal(bits: u64, sq: Square) -> u64 {
    bits ^ rising_diagonal_mask(sq)
}

#[inline]
pub fn toggle_falling_diagonal(bits: u64, sq: Square) -> u64 {
    bits ^ falling_diagonal_mask(sq)
}

#[inline]
pub fn toggle_knight_targets(bits: u64, sq: Square) -> u64 {
    bits ^ knight_mask(sq)
}
