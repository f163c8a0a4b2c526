//! Soldier moves.

use crate::bitboard::Bitboard;
use crate::player::Player;
use crate::square::Square;

/// Squares a soldier on `sq` reaches.
///
/// One step forward; once across the river, also one step left or right.
pub(super) fn soldier_reach(sq: Square, player: Player) -> Bitboard {
    let mut reach = Bitboard::EMPTY;
    if let Some(dst) = sq.offset(0, player.forward()) {
        reach = reach.with(dst);
    }
    if !player.owns_row(sq.row()) {
        for dc in [-1, 1] {
            if let Some(dst) = sq.offset(dc, 0) {
                reach = reach.with(dst);
            }
        }
    }
    reach
}
