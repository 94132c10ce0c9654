//! Grid square addressing
//!
//! Squares are numbered 0..=63 in reading order: row 0 is the top of the
//! board (rank 8), column 0 is the left edge (file A). Bit `i` of the board
//! value belongs to square `i`.

use std::fmt;

/// Number of squares on one side of the board
pub const SIDE: u8 = 8;

/// A square on the 8x8 grid, always in 0..=63
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Top-left corner (a8)
    pub const TOP_LEFT: Square = Square(0);

    /// Create a square from a linear index, `None` when out of range
    #[cfg(test)]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from row and column, `None` when either is off the board
    pub const fn at(row: u8, col: u8) -> Option<Self> {
        if row < SIDE && col < SIDE {
            Some(Square(row * SIDE + col))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Row from the top, 0..=7
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / SIDE
    }

    /// Column from the left, 0..=7
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % SIDE
    }

    /// Single-bit mask for this square
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// Offset by whole rows and columns, `None` if that leaves the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if (0..SIDE as i8).contains(&row) && (0..SIDE as i8).contains(&col) {
            Square::at(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Offset by whole rows and columns, stopping at the board edge
    pub fn clamped_offset(self, d_row: i8, d_col: i8) -> Self {
        let max = SIDE as i8 - 1;
        let row = (self.row() as i8 + d_row).clamp(0, max) as u8;
        let col = (self.col() as i8 + d_col).clamp(0, max) as u8;
        Square(row * SIDE + col)
    }

    /// All 64 squares in index order
    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::TOP_LEFT
    }
}

impl fmt::Display for Square {
    /// Algebraic name: file letter then rank number, e.g. `a8` for square 0
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        write!(f, "{}{}", file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H1: Square = Square(63);

    #[test]
    fn test_row_and_col() {
        let sq = Square::new(19).unwrap();
        assert_eq!(sq.row(), 2);
        assert_eq!(sq.col(), 3);
        assert_eq!(Square::at(2, 3), Some(sq));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Square::new(64), None);
        assert_eq!(Square::at(8, 0), None);
        assert_eq!(Square::at(0, 8), None);
    }

    #[test]
    fn test_algebraic_names() {
        assert_eq!(Square::TOP_LEFT.to_string(), "a8");
        assert_eq!(H1.to_string(), "h1");
        assert_eq!(Square::new(19).unwrap().to_string(), "d6");
    }

    #[test]
    fn test_offset_rejects_wrap() {
        let h8 = Square::new(7).unwrap();
        // One column right of h8 would be a7 under naive index arithmetic
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(1, 0), Square::new(15));
        assert_eq!(Square::TOP_LEFT.offset(-1, 0), None);
    }

    #[test]
    fn test_clamped_offset_stops_at_edges() {
        assert_eq!(Square::TOP_LEFT.clamped_offset(-1, -1), Square::TOP_LEFT);
        assert_eq!(H1.clamped_offset(1, 1), H1);
        assert_eq!(
            Square::TOP_LEFT.clamped_offset(2, 3),
            Square::new(19).unwrap()
        );
    }
}
