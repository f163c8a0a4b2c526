//! The two sides of a Xiangqi game.

use std::fmt;
use std::ops::Not;

/// A side: Red (moves first, starts on rows 5-9) or Black (rows 0-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Black = 1,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    /// Return the opposing player.
    #[inline]
    pub const fn flip(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row delta of a forward step. Red advances toward row 0, Black toward row 9.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// Return `true` if `row` lies on this player's own side of the river.
    #[inline]
    pub const fn owns_row(self, row: u8) -> bool {
        match self {
            Player::Red => row >= 5,
            Player::Black => row <= 4,
        }
    }

    /// Parse the side-to-move field of a FEN string.
    pub fn from_fen(s: &str) -> Option<Player> {
        match s {
            "w" | "r" => Some(Player::Red),
            "b" => Some(Player::Black),
            _ => None,
        }
    }

    /// Return the lowercase name, as printed to users.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Black => "black",
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.flip()
    }
}

/// Writes the FEN side-to-move character.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "w"),
            Player::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn flip_and_not() {
        assert_eq!(Player::Red.flip(), Player::Black);
        assert_eq!(!Player::Black, Player::Red);
        assert_eq!(!!Player::Red, Player::Red);
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Player::Red.forward(), -1);
        assert_eq!(Player::Black.forward(), 1);
    }

    #[test]
    fn river_halves() {
        assert!(Player::Red.owns_row(5));
        assert!(Player::Red.owns_row(9));
        assert!(!Player::Red.owns_row(4));
        assert!(Player::Black.owns_row(0));
        assert!(Player::Black.owns_row(4));
        assert!(!Player::Black.owns_row(5));
    }

    #[test]
    fn fen_field() {
        assert_eq!(Player::from_fen("w"), Some(Player::Red));
        assert_eq!(Player::from_fen("r"), Some(Player::Red));
        assert_eq!(Player::from_fen("b"), Some(Player::Black));
        assert_eq!(Player::from_fen("x"), None);
        assert_eq!(format!("{}", Player::Red), "w");
        assert_eq!(format!("{}", Player::Black), "b");
    }
}
