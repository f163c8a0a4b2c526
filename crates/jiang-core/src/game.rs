//! Turn controller: owns the board, alternates turns, and commits or rejects moves.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::Move;
use crate::error::{FenError, MoveError};
use crate::fen::parse_fen;
use crate::movegen::{MoveList, generate_legal_moves, generate_moves};
use crate::piece::Piece;
use crate::player::Player;
use crate::rules::{Ruleset, Violation, is_in_check, violation};
use crate::square::Square;

/// How a finished game ended. Xiangqi has no stalemate draw: a side with
/// no legal move loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Black's general was captured or Black had no legal move.
    RedWon,
    /// Red's general was captured or Red had no legal move.
    BlackWon,
}

impl Outcome {
    fn win_for(player: Player) -> Outcome {
        match player {
            Player::Red => Outcome::RedWon,
            Player::Black => Outcome::BlackWon,
        }
    }

    /// Return the winning side.
    pub fn winner(self) -> Player {
        match self {
            Outcome::RedWon => Player::Red,
            Outcome::BlackWon => Player::Black,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} won", self.winner().name())
    }
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Player,
    ruleset: Ruleset,
    fullmove_number: u16,
    /// Each played move with the board it was played on.
    history: Vec<(Move, Board)>,
    /// Legal moves for the side to move, refreshed after every change.
    moves: MoveList,
}

impl Game {
    /// Start a game from the standard position, Red to move.
    pub fn new(ruleset: Ruleset) -> Game {
        Game::from_board(Board::starting_position(), Player::Red, ruleset)
    }

    /// Start a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Player, ruleset: Ruleset) -> Game {
        let moves = generate_legal_moves(&board, side_to_move, ruleset);
        Game {
            board,
            side_to_move,
            ruleset,
            fullmove_number: 1,
            history: Vec::new(),
            moves,
        }
    }

    /// Return the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Return the active ruleset.
    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Return the number of moves played since the game was set up.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Switch rulesets mid-game. The legal move list is rebuilt.
    pub fn set_ruleset(&mut self, ruleset: Ruleset) {
        self.ruleset = ruleset;
        self.refresh();
    }

    /// Return the legal moves for the side to move.
    #[inline]
    pub fn legal_moves(&self) -> &MoveList {
        &self.moves
    }

    /// Return the legal destinations of the piece on `sq`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    pub fn moves_from(&self, sq: Square) -> Bitboard {
        self.moves
            .as_slice()
            .iter()
            .filter(|mv| mv.source() == sq)
            .map(|mv| mv.dest())
            .collect()
    }

    /// Return `true` if the side to move has its general attacked.
    pub fn in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Play a move for the side to move, returning the captured piece.
    ///
    /// On error the game is unchanged.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        if self.outcome().is_some() {
            return Err(MoveError::GameOver);
        }

        let src = mv.source();
        let piece = self
            .board
            .piece_on(src)
            .ok_or(MoveError::EmptySource { square: src })?;
        if !piece.is(self.side_to_move) {
            return Err(MoveError::NotYourPiece { square: src });
        }
        if !generate_moves(&self.board, src).contains(mv.dest()) {
            return Err(MoveError::IllegalDestination { mv });
        }

        let after = self.board.make_move(mv);
        match violation(&after, self.side_to_move, self.ruleset) {
            Some(Violation::FacingGenerals) => {
                debug!(%mv, "move rejected: generals would face each other");
                return Err(MoveError::FacingGenerals { mv });
            }
            Some(Violation::GeneralInCheck) => {
                debug!(%mv, "move rejected: general left in check");
                return Err(MoveError::LeavesGeneralInCheck { mv });
            }
            None => {}
        }

        let captured = self.board.captured_by(mv);
        self.history.push((mv, self.board));
        self.board = after;
        if self.side_to_move == Player::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.flip();
        self.refresh();

        debug!(%mv, captured = ?captured, "move played");
        if let Some(outcome) = self.outcome() {
            info!(%outcome, ply = self.ply(), "game over");
        }

        Ok(captured)
    }

    /// Take back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, board) = self.history.pop()?;
        self.board = board;
        self.side_to_move = self.side_to_move.flip();
        if self.side_to_move == Player::Black {
            self.fullmove_number = self.fullmove_number.saturating_sub(1).max(1);
        }
        self.refresh();
        Some(mv)
    }

    /// Return the result if the game has ended.
    ///
    /// A side whose general has been captured loses; so does the side to
    /// move when it has no legal move.
    pub fn outcome(&self) -> Option<Outcome> {
        for player in Player::ALL {
            if self.board.general_square(player).is_none() {
                return Some(Outcome::win_for(player.flip()));
            }
        }

        if self.moves.is_empty() {
            return Some(Outcome::win_for(self.side_to_move.flip()));
        }

        None
    }

    /// Serialize the position as a full FEN string.
    pub fn fen(&self) -> String {
        format!(
            "{} {} - - 0 {}",
            self.board.to_fen(),
            self.side_to_move,
            self.fullmove_number
        )
    }

    fn refresh(&mut self) {
        self.moves = generate_legal_moves(&self.board, self.side_to_move, self.ruleset);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Ruleset::default())
    }
}

/// Parses a full FEN string into a game under the default ruleset.
impl FromStr for Game {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Game, FenError> {
        let fields = parse_fen(fen)?;
        let mut game = Game::from_board(fields.board, fields.side_to_move, Ruleset::default());
        game.fullmove_number = fields.fullmove_number.max(1);
        Ok(game)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.pretty())?;
        if let Some((mv, _)) = self.history.last() {
            write!(f, "({}) {} - ", self.ply(), mv)?;
        }
        match self.outcome() {
            Some(outcome) => write!(f, "{outcome}"),
            None => write!(
                f,
                "{} {} - {} legal moves",
                self.side_to_move.name(),
                if self.in_check() { "in check" } else { "to play" },
                self.moves.len()
            ),
        }
    }
}
