//! Elephant moves.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::player::Player;
use crate::square::Square;

const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Squares an elephant on `sq` reaches.
///
/// Two diagonal steps, blocked when the midpoint ("eye") is occupied, and
/// never across the river.
pub(super) fn elephant_reach(board: &Board, sq: Square, player: Player) -> Bitboard {
    let mut reach = Bitboard::EMPTY;
    for (dc, dr) in DIAGONAL {
        let Some(eye) = sq.offset(dc, dr) else {
            continue;
        };
        if board.is_occupied(eye) {
            continue;
        }
        if let Some(dst) = sq.offset(2 * dc, 2 * dr) {
            reach = reach.with(dst);
        }
    }
    reach & Bitboard::home_half(player)
}
