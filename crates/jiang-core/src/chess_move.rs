//! Move representation, bit-packed into a u16.

use std::fmt;

use crate::square::Square;

const SQ_MASK: u16 = 0x007F;
const DST_SHIFT: u32 = 7;

/// A move from one square to another, encoded in 14 bits.
///
/// ```text
/// bits 0-6:  source square      (0-89)
/// bits 7-13: destination square (0-89)
/// ```
///
/// A capture is implied when the destination holds an opposing piece; the
/// move itself does not record it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT))
    }

    /// Extract the source square.
    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SQ_MASK) as u8)
    }

    /// Extract the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 >> DST_SHIFT) & SQ_MASK) as u8)
    }

    /// Parse ICCS notation such as `h2e2` (a dash between squares is allowed).
    pub fn from_iccs(s: &str) -> Option<Move> {
        let s = s.trim();
        let (from, to) = match s.len() {
            4 => (s.get(0..2)?, s.get(2..4)?),
            5 if s.as_bytes()[2] == b'-' => (s.get(0..2)?, s.get(3..5)?),
            _ => return None,
        };
        let source = Square::from_iccs(from)?;
        let dest = Square::from_iccs(to)?;
        if source == dest {
            return None;
        }
        Some(Move::new(source, dest))
    }

    /// Format as ICCS notation.
    pub fn to_iccs(self) -> String {
        format!("{}{}", self.source(), self.dest())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.dest())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::square::Square;

    fn sq(col: u8, row: u8) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn source_and_dest_extremes() {
        let mv = Move::new(sq(8, 9), sq(0, 0));
        assert_eq!(mv.source(), sq(8, 9));
        assert_eq!(mv.dest(), sq(0, 0));

        let mv = Move::new(sq(0, 0), sq(8, 9));
        assert_eq!(mv.source(), sq(0, 0));
        assert_eq!(mv.dest(), sq(8, 9));
    }

    #[test]
    fn iccs_parse_and_format() {
        let mv = Move::from_iccs("h2e2").unwrap();
        assert_eq!(mv.source(), sq(7, 7));
        assert_eq!(mv.dest(), sq(4, 7));
        assert_eq!(mv.to_iccs(), "h2e2");
        assert_eq!(Move::from_iccs("H2-E2"), Some(mv));
    }

    #[test]
    fn iccs_invalid() {
        assert_eq!(Move::from_iccs("h2"), None);
        assert_eq!(Move::from_iccs("h2h2"), None);
        assert_eq!(Move::from_iccs("z2e2"), None);
        assert_eq!(Move::from_iccs("h2xe2"), None);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Move::from_iccs("b0c2").unwrap()), "Move(b0c2)");
    }
}
