//! A piece with its owner, bit-packed into a single byte.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::player::Player;

/// A piece belonging to one player.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-6)
/// - bit 3: [`Player`] (0 = Red, 1 = Black)
///
/// Kind and owner are fixed for the lifetime of the piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const RED_GENERAL: Piece = Piece::new(PieceKind::General, Player::Red);
    pub const RED_ADVISOR: Piece = Piece::new(PieceKind::Advisor, Player::Red);
    pub const RED_ELEPHANT: Piece = Piece::new(PieceKind::Elephant, Player::Red);
    pub const RED_HORSE: Piece = Piece::new(PieceKind::Horse, Player::Red);
    pub const RED_CHARIOT: Piece = Piece::new(PieceKind::Chariot, Player::Red);
    pub const RED_CANNON: Piece = Piece::new(PieceKind::Cannon, Player::Red);
    pub const RED_SOLDIER: Piece = Piece::new(PieceKind::Soldier, Player::Red);

    pub const BLACK_GENERAL: Piece = Piece::new(PieceKind::General, Player::Black);
    pub const BLACK_ADVISOR: Piece = Piece::new(PieceKind::Advisor, Player::Black);
    pub const BLACK_ELEPHANT: Piece = Piece::new(PieceKind::Elephant, Player::Black);
    pub const BLACK_HORSE: Piece = Piece::new(PieceKind::Horse, Player::Black);
    pub const BLACK_CHARIOT: Piece = Piece::new(PieceKind::Chariot, Player::Black);
    pub const BLACK_CANNON: Piece = Piece::new(PieceKind::Cannon, Player::Black);
    pub const BLACK_SOLDIER: Piece = Piece::new(PieceKind::Soldier, Player::Black);

    /// Create a piece from a kind and an owner.
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Piece {
        Piece((player as u8) << 3 | (kind as u8))
    }

    /// Parse a FEN letter. Uppercase is Red, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let player = if c.is_ascii_uppercase() {
            Player::Red
        } else {
            Player::Black
        };
        Some(Piece::new(kind, player))
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::General,
            1 => PieceKind::Advisor,
            2 => PieceKind::Elephant,
            3 => PieceKind::Horse,
            4 => PieceKind::Chariot,
            5 => PieceKind::Cannon,
            _ => PieceKind::Soldier,
        }
    }

    /// Return the owning player.
    #[inline]
    pub const fn player(self) -> Player {
        match self.0 >> 3 {
            0 => Player::Red,
            _ => Player::Black,
        }
    }

    /// Return `true` if this piece belongs to `player`.
    #[inline]
    pub const fn is(self, player: Player) -> bool {
        self.player() as u8 == player as u8
    }

    /// Return the FEN letter: uppercase for Red, lowercase for Black.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind().fen_char();
        match self.player() {
            Player::Red => base.to_ascii_uppercase(),
            Player::Black => base,
        }
    }

    /// Return the traditional character for this piece.
    pub const fn chinese_char(self) -> char {
        match (self.player(), self.kind()) {
            (Player::Red, PieceKind::General) => '帥',
            (Player::Red, PieceKind::Advisor) => '仕',
            (Player::Red, PieceKind::Elephant) => '相',
            (Player::Red, PieceKind::Horse) => '傌',
            (Player::Red, PieceKind::Chariot) => '俥',
            (Player::Red, PieceKind::Cannon) => '炮',
            (Player::Red, PieceKind::Soldier) => '兵',
            (Player::Black, PieceKind::General) => '將',
            (Player::Black, PieceKind::Advisor) => '士',
            (Player::Black, PieceKind::Elephant) => '象',
            (Player::Black, PieceKind::Horse) => '馬',
            (Player::Black, PieceKind::Chariot) => '車',
            (Player::Black, PieceKind::Cannon) => '砲',
            (Player::Black, PieceKind::Soldier) => '卒',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.player() {
            Player::Red => 'R',
            Player::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind().fen_char().to_ascii_uppercase())
    }
}
