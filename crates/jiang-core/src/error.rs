//! Error types for FEN parsing, board validation, and move submission.

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input contained no piece placement.
    #[error("empty FEN string")]
    Empty,
    /// More fields than `placement side - - halfmove fullmove`.
    #[error("expected at most 6 FEN fields, found {found}")]
    TooManyFields {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not have exactly 10 ranks.
    #[error("expected 10 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 9 cells.
    #[error("rank {rank_index} describes {length} cells, expected 9")]
    BadRankLength {
        /// Zero-based rank index, 0 being the top (Black's back rank).
        rank_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w", "r" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid field.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one general.
    #[error("expected 1 general for {player}, found {count}")]
    InvalidGeneralCount {
        /// Which side has the wrong count.
        player: &'static str,
        /// Number of generals found.
        count: usize,
    },
    /// A general stands outside its palace.
    #[error("{player} general on {square} is outside its palace")]
    GeneralOutsidePalace {
        /// Which side's general.
        player: &'static str,
        /// Where it stands.
        square: Square,
    },
    /// A side has more pieces of one kind than the starting position holds.
    #[error("too many {piece} pieces: {count}")]
    TooManyPieces {
        /// The over-represented piece.
        piece: Piece,
        /// Number found.
        count: usize,
    },
}

/// Reasons a [`Game`](crate::game::Game) refuses a move. The board is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A general has been captured or the side to move has no legal move.
    #[error("the game is over")]
    GameOver,
    /// The source square is empty.
    #[error("no piece on {square}")]
    EmptySource { square: Square },
    /// The source piece belongs to the side not to move.
    #[error("the piece on {square} belongs to the other side")]
    NotYourPiece { square: Square },
    /// The piece cannot reach the destination.
    #[error("{mv} is not a legal move for that piece")]
    IllegalDestination { mv: Move },
    /// The move would open the file between the two generals.
    #[error("{mv} would leave the generals facing each other")]
    FacingGenerals { mv: Move },
    /// Under standard rules, the move would leave the mover's general attacked.
    #[error("{mv} would leave the general in check")]
    LeavesGeneralInCheck { mv: Move },
}

/// A ruleset name other than `basic` or `standard`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ruleset \"{found}\"")]
pub struct ParseRulesetError {
    /// The rejected name.
    pub found: String,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError};
    use crate::chess_move::Move;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongRankCount { found: 8 };
        assert_eq!(format!("{err}"), "expected 10 ranks in piece placement, found 8");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidGeneralCount { player: "black", count: 2 };
        assert_eq!(format!("{err}"), "expected 1 general for black, found 2");
    }

    #[test]
    fn fen_error_from_board_error() {
        let fen_err: FenError = BoardError::InvalidGeneralCount { player: "red", count: 0 }.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
    }

    #[test]
    fn move_error_display_uses_iccs() {
        let mv = Move::new(Square::new(4, 9).unwrap(), Square::new(4, 8).unwrap());
        let err = MoveError::FacingGenerals { mv };
        assert_eq!(format!("{err}"), "e0e1 would leave the generals facing each other");
    }
}
