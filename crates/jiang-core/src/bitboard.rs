//! A set of board squares packed into the low 90 bits of a `u128`.

use std::fmt;
use std::ops::BitAnd;

use crate::player::Player;
use crate::square::Square;

/// Build a mask of the rectangle `col_lo..=col_hi` x `row_lo..=row_hi`.
const fn region(col_lo: u8, col_hi: u8, row_lo: u8, row_hi: u8) -> u128 {
    let mut bits = 0u128;
    let mut row = row_lo;
    while row <= row_hi {
        let mut col = col_lo;
        while col <= col_hi {
            bits |= 1u128 << (row as u32 * Square::COLS as u32 + col as u32);
            col += 1;
        }
        row += 1;
    }
    bits
}

/// A 90-bit board where bit `i` is the square with index `i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u128);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Red's palace: columns 3-5, rows 7-9.
    pub const RED_PALACE: Bitboard = Bitboard(region(3, 5, 7, 9));

    /// Black's palace: columns 3-5, rows 0-2.
    pub const BLACK_PALACE: Bitboard = Bitboard(region(3, 5, 0, 2));

    /// Red's side of the river: rows 5-9.
    pub const RED_HALF: Bitboard = Bitboard(region(0, 8, 5, 9));

    /// Black's side of the river: rows 0-4.
    pub const BLACK_HALF: Bitboard = Bitboard(region(0, 8, 0, 4));

    /// Return `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the number of set bits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if the given square's bit is set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u128 << sq.index())) != 0
    }

    /// Return a new bitboard with the given square set.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u128 << sq.index()))
    }

    /// Return the palace mask of `player`.
    #[inline]
    pub const fn palace(player: Player) -> Bitboard {
        match player {
            Player::Red => Self::RED_PALACE,
            Player::Black => Self::BLACK_PALACE,
        }
    }

    /// Return the half of the board on `player`'s side of the river.
    #[inline]
    pub const fn home_half(player: Player) -> Bitboard {
        match player {
            Player::Red => Self::RED_HALF,
            Player::Black => Self::BLACK_HALF,
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Bitboard {}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

// Row 0 printed first, matching the board's pretty printer.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in 0..Square::ROWS {
            write!(f, "  {} ", 9 - row)?;
            for col in 0..Square::COLS {
                let index = row as u32 * Square::COLS as u32 + col as u32;
                if (self.0 >> index) & 1 == 1 {
                    write!(f, "1 ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h i")
    }
}
