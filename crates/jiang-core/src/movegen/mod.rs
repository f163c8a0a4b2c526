//! Move generation.
//!
//! Every piece kind has a *reach*: the squares it could land on given the
//! blockers on the board, ignoring who owns the destination. Moves are the
//! reach minus squares held by the mover's own side; the same reach doubles
//! as the attack set used for check detection.

mod elephant;
mod horse;
mod palace;
mod sliders;
mod soldier;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::player::Player;
use crate::rules::{Ruleset, violation};
use crate::square::Square;

use self::elephant::elephant_reach;
use self::horse::horse_reach;
use self::palace::{advisor_reach, general_reach};
use self::sliders::{cannon_reach, chariot_reach};
use self::soldier::soldier_reach;

/// Growable buffer of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if the list holds `mv`.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Return every square the piece on `sq` reaches, including squares held by
/// its own side. Empty squares reach nothing.
pub fn attacks(board: &Board, sq: Square) -> Bitboard {
    let Some(piece) = board.piece_on(sq) else {
        return Bitboard::EMPTY;
    };
    let player = piece.player();

    match piece.kind() {
        PieceKind::General => general_reach(sq, player),
        PieceKind::Advisor => advisor_reach(sq, player),
        PieceKind::Elephant => elephant_reach(board, sq, player),
        PieceKind::Horse => horse_reach(board, sq),
        PieceKind::Chariot => chariot_reach(board, sq),
        PieceKind::Cannon => cannon_reach(board, sq),
        PieceKind::Soldier => soldier_reach(sq, player),
    }
}

/// Return the destinations of the piece on `sq`.
///
/// Squares held by the mover's own side are excluded; opposing pieces are
/// included as captures. An empty `sq` yields an empty set. The board is not
/// modified, and the result does not consider whose turn it is or whether the
/// move would expose a general.
pub fn generate_moves(board: &Board, sq: Square) -> Bitboard {
    let Some(piece) = board.piece_on(sq) else {
        return Bitboard::EMPTY;
    };

    attacks(board, sq)
        .filter(|&dst| board.piece_on(dst).is_none_or(|target| !target.is(piece.player())))
        .collect()
}

/// Generate the moves of every piece `player` owns, without legality filtering.
pub fn generate_all_moves(board: &Board, player: Player) -> MoveList {
    let mut list = MoveList::new();
    for (src, _) in board.pieces().filter(|(_, piece)| piece.is(player)) {
        for dst in generate_moves(board, src) {
            list.push(Move::new(src, dst));
        }
    }
    list
}

/// Generate the moves of `player` that `ruleset` accepts.
///
/// Each candidate is applied to a copy of the board and rejected if the
/// result breaks the ruleset (see [`violation`]). A board missing either
/// general is a finished game and has no legal moves.
pub fn generate_legal_moves(board: &Board, player: Player, ruleset: Ruleset) -> MoveList {
    let mut list = MoveList::new();
    if Player::ALL.iter().any(|&side| board.general_square(side).is_none()) {
        return list;
    }
    for &mv in &generate_all_moves(board, player) {
        let after = board.make_move(mv);
        if violation(&after, player, ruleset).is_none() {
            list.push(mv);
        }
    }
    list
}
