//! General and advisor moves, both confined to the palace.

use crate::bitboard::Bitboard;
use crate::player::Player;
use crate::square::Square;

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Squares a general on `sq` reaches: one orthogonal step inside its palace.
pub(super) fn general_reach(sq: Square, player: Player) -> Bitboard {
    steps(sq, &ORTHOGONAL) & Bitboard::palace(player)
}

/// Squares an advisor on `sq` reaches: one diagonal step inside its palace.
pub(super) fn advisor_reach(sq: Square, player: Player) -> Bitboard {
    steps(sq, &DIAGONAL) & Bitboard::palace(player)
}

fn steps(sq: Square, deltas: &[(i8, i8)]) -> Bitboard {
    deltas
        .iter()
        .filter_map(|&(dc, dr)| sq.offset(dc, dr))
        .collect()
}
