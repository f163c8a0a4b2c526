//! Board coordinates.

use std::fmt;

/// A cell of the 9x10 board, stored as `row * 9 + col`.
///
/// Columns run 0..=8 left to right, rows run 0..=9 from Black's back rank
/// (row 0) to Red's back rank (row 9).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of columns.
    pub const COLS: u8 = 9;
    /// Number of rows.
    pub const ROWS: u8 = 10;
    /// Total number of squares.
    pub const COUNT: usize = 90;

    /// Create a square from a column and row, returning `None` when off the board.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Square> {
        if col < Self::COLS && row < Self::ROWS {
            Some(Square(row * Self::COLS + col))
        } else {
            None
        }
    }

    /// Create a square from an index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 90`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!((index as usize) < Self::COUNT);
        Square(index)
    }

    /// Return the zero-based index (0..90).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the column (0..=8).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::COLS
    }

    /// Return the row (0..=9).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::COLS
    }

    /// Step by `(dc, dr)`, returning `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        let col = self.col() as i8 + dc;
        let row = self.row() as i8 + dr;
        if col < 0 || row < 0 {
            return None;
        }
        Square::new(col as u8, row as u8)
    }

    /// Iterate over all 90 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..Self::COUNT as u8).map(Square)
    }

    /// Parse an ICCS square such as `e0` (file `a`..`i`, rank `0`..`9` from Red's side).
    pub fn from_iccs(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'i').contains(&file) || !rank.is_ascii_digit() {
            return None;
        }

        Square::new(file - b'a', 9 - (rank - b'0'))
    }
}

/// ICCS notation: file letter then rank digit counted from Red's back rank.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, 9 - self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.col(), self.row())
    }
}
