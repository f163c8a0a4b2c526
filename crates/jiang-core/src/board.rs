//! The Xiangqi board: 90 cells, each empty or holding one piece.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::player::Player;
use crate::square::Square;

/// Back-rank layout from column 0 to column 8, shared by both sides.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// Piece placement on a 9x10 grid.
///
/// A board is a plain value: the rules engine only reads it, and moves are
/// applied by producing a new board (see [`Board::make_move`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return a fresh board holding the standard starting position.
    ///
    /// Every call builds an independent value.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(square(col, 0), Some(Piece::new(kind, Player::Black)));
            board.set(square(col, 9), Some(Piece::new(kind, Player::Red)));
        }

        for col in [1, 7] {
            board.set(square(col, 2), Some(Piece::BLACK_CANNON));
            board.set(square(col, 7), Some(Piece::RED_CANNON));
        }

        for col in [0, 2, 4, 6, 8] {
            board.set(square(col, 3), Some(Piece::BLACK_SOLDIER));
            board.set(square(col, 6), Some(Piece::RED_SOLDIER));
        }

        board
    }

    /// Return a copy of this board with `piece` placed on `sq`, replacing any occupant.
    ///
    /// Convenient for building positions by hand.
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.set(sq, Some(piece));
        self
    }

    /// Return a copy of this board with `sq` emptied.
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Board {
        self.set(sq, None);
        self
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Overwrite a cell.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Iterate over occupied squares and their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of `player`'s general, or `None` if it has been captured.
    pub fn general_square(&self, player: Player) -> Option<Square> {
        let general = Piece::new(PieceKind::General, player);
        self.pieces()
            .find(|&(_, piece)| piece == general)
            .map(|(sq, _)| sq)
    }

    /// Validate that the board could arise in a game.
    ///
    /// Each side needs exactly one general, standing inside its own palace,
    /// and no more pieces of a kind than the starting position holds.
    pub fn validate(&self) -> Result<(), BoardError> {
        for player in Player::ALL {
            let general = Piece::new(PieceKind::General, player);
            let squares: Vec<Square> = self
                .pieces()
                .filter(|&(_, piece)| piece == general)
                .map(|(sq, _)| sq)
                .collect();

            if squares.len() != 1 {
                return Err(BoardError::InvalidGeneralCount {
                    player: player.name(),
                    count: squares.len(),
                });
            }

            if !Bitboard::palace(player).contains(squares[0]) {
                return Err(BoardError::GeneralOutsidePalace {
                    player: player.name(),
                    square: squares[0],
                });
            }

            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, player);
                let count = self.pieces().filter(|&(_, p)| p == piece).count();
                if count > kind.max_count() {
                    return Err(BoardError::TooManyPieces { piece, count });
                }
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.to_fen())
    }
}

// Coordinates in this file are literal constants on the board.
fn square(col: u8, row: u8) -> Square {
    Square::from_index_unchecked(row * Square::COLS + col)
}

/// Wrapper for pretty-printing a board as a 9x10 grid, Black at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..Square::ROWS {
            write!(f, "{}  ", 9 - row)?;
            for col in 0..Square::COLS {
                let c = board
                    .piece_on(square(col, row))
                    .map_or('.', Piece::fen_char);
                if col < Square::COLS - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
            if row == 4 {
                writeln!(f, "   ~~~~~~~~~~~~~~~~~")?;
            }
        }
        write!(f, "   a b c d e f g h i")
    }
}
