//! Chariot and cannon moves along ranks and files.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::square::Square;

const DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Squares a chariot on `sq` reaches: every empty square up to and including
/// the first occupied one in each direction.
pub(super) fn chariot_reach(board: &Board, sq: Square) -> Bitboard {
    let mut reach = Bitboard::EMPTY;
    for (dc, dr) in DIRECTIONS {
        let mut cur = sq;
        while let Some(next) = cur.offset(dc, dr) {
            reach = reach.with(next);
            if board.is_occupied(next) {
                break;
            }
            cur = next;
        }
    }
    reach
}

/// Squares a cannon on `sq` reaches.
///
/// Empty squares before the first piece (the screen) are quiet moves. The
/// screen itself is never reachable; the next occupied square beyond it is
/// the only capture candidate in that direction.
pub(super) fn cannon_reach(board: &Board, sq: Square) -> Bitboard {
    let mut reach = Bitboard::EMPTY;
    for (dc, dr) in DIRECTIONS {
        let mut cur = sq;
        let mut screened = false;
        while let Some(next) = cur.offset(dc, dr) {
            cur = next;
            if !board.is_occupied(next) {
                if !screened {
                    reach = reach.with(next);
                }
                continue;
            }
            if screened {
                reach = reach.with(next);
                break;
            }
            screened = true;
        }
    }
    reach
}
