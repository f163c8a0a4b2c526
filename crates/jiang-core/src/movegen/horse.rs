//! Horse moves.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::square::Square;

/// The eight jumps, each paired with the leg offset that hobbles it.
const JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-1, -2), (0, -1)),
    ((1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, 2), (0, 1)),
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
];

/// Squares a horse on `sq` reaches.
///
/// A jump is skipped when the orthogonal neighbour on its long axis is occupied.
pub(super) fn horse_reach(board: &Board, sq: Square) -> Bitboard {
    let mut reach = Bitboard::EMPTY;
    for ((dc, dr), (lc, lr)) in JUMPS {
        let Some(dst) = sq.offset(dc, dr) else {
            continue;
        };
        // The leg is on the board whenever the destination is.
        let hobbled = sq.offset(lc, lr).is_none_or(|leg| board.is_occupied(leg));
        if !hobbled {
            reach = reach.with(dst);
        }
    }
    reach
}
