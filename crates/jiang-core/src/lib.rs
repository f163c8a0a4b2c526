//! Core Xiangqi types: board representation, move generation, and game rules.

mod bitboard;
mod board;
mod chess_move;
mod error;
mod fen;
mod game;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod player;
mod rules;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use error::{BoardError, FenError, MoveError, ParseRulesetError};
pub use fen::STARTING_FEN;
pub use game::{Game, Outcome};
pub use movegen::{MoveList, attacks, generate_all_moves, generate_legal_moves, generate_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use player::Player;
pub use rules::{Ruleset, Violation, is_illegal_facing_generals, is_in_check, violation};
pub use square::Square;
